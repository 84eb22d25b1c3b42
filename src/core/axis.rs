use serde::{Deserialize, Serialize};

use crate::core::series::SeriesId;
use crate::core::types::{DoubleRange, Rect};
use crate::error::{ChartError, ChartResult};

/// Smallest zoom factor an axis accepts; keeps `zoom_factor > 0`.
pub const MIN_ZOOM_FACTOR: f64 = 1e-9;

/// Role of an axis in the Cartesian pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    /// Independent (primary) axis the trackball tracks along.
    X,
    /// Dependent axis.
    Y,
}

/// Value domain of an axis, drives label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisKind {
    Category,
    Numeric,
    /// Actual range is stored as exponents of `base`.
    Logarithmic { base: f64 },
    /// Values are UTC unix seconds.
    DateTime,
}

/// Zoom window of one axis in normalized `[0, 1]` units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub factor: f64,
    pub position: f64,
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self {
            factor: 1.0,
            position: 0.0,
        }
    }
}

impl ZoomWindow {
    /// Clamps into `0 < factor <= 1`, `0 <= position <= 1 - factor`.
    #[must_use]
    pub fn clamped(factor: f64, position: f64) -> Self {
        let factor = if factor.is_finite() {
            factor.clamp(MIN_ZOOM_FACTOR, 1.0)
        } else {
            1.0
        };
        let position = if position.is_finite() {
            position.clamp(0.0, 1.0 - factor)
        } else {
            0.0
        };
        Self { factor, position }
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.factor < 1.0 || self.position > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    role: AxisRole,
    kind: AxisKind,
    is_vertical: bool,
    is_inversed: bool,
    zoom: ZoomWindow,
    plot_offset_start: f64,
    plot_offset_end: f64,
    actual_range: DoubleRange,
    arrange_rect: Rect,
    registered_series: Vec<SeriesId>,
    label_format: Option<String>,
    categories: Vec<String>,
    uses_label_template: bool,
}

impl Axis {
    pub fn new(
        name: impl Into<String>,
        role: AxisRole,
        kind: AxisKind,
        start: f64,
        end: f64,
    ) -> ChartResult<Self> {
        let actual_range = DoubleRange::new(start, end)?;
        if actual_range.delta() == 0.0 {
            return Err(ChartError::InvalidRange { start, end });
        }
        Ok(Self {
            name: name.into(),
            role,
            kind,
            is_vertical: role == AxisRole::Y,
            is_inversed: false,
            zoom: ZoomWindow::default(),
            plot_offset_start: 0.0,
            plot_offset_end: 0.0,
            actual_range,
            arrange_rect: Rect::default(),
            registered_series: Vec::new(),
            label_format: None,
            categories: Vec::new(),
            uses_label_template: false,
        })
    }

    pub fn numeric(
        name: impl Into<String>,
        role: AxisRole,
        start: f64,
        end: f64,
    ) -> ChartResult<Self> {
        Self::new(name, role, AxisKind::Numeric, start, end)
    }

    /// Category axis spanning `[-0.5, n - 0.5]` so every category owns one unit slot.
    pub fn category(
        name: impl Into<String>,
        role: AxisRole,
        categories: Vec<String>,
    ) -> ChartResult<Self> {
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "category axis requires at least one category".to_owned(),
            ));
        }
        let end = categories.len() as f64 - 0.5;
        let mut axis = Self::new(name, role, AxisKind::Category, -0.5, end)?;
        axis.categories = categories;
        Ok(axis)
    }

    /// Logarithmic axis over raw values `[min, max]`; both must be `> 0`.
    pub fn logarithmic(
        name: impl Into<String>,
        role: AxisRole,
        base: f64,
        min: f64,
        max: f64,
    ) -> ChartResult<Self> {
        if !base.is_finite() || base <= 1.0 {
            return Err(ChartError::InvalidData(
                "logarithmic base must be finite and > 1".to_owned(),
            ));
        }
        if !(min > 0.0 && max > 0.0) {
            return Err(ChartError::InvalidRange {
                start: min,
                end: max,
            });
        }
        Self::new(
            name,
            role,
            AxisKind::Logarithmic { base },
            min.log(base),
            max.log(base),
        )
    }

    pub fn date_time(
        name: impl Into<String>,
        role: AxisRole,
        start: f64,
        end: f64,
    ) -> ChartResult<Self> {
        Self::new(name, role, AxisKind::DateTime, start, end)
    }

    #[must_use]
    pub fn with_inversed(mut self, inversed: bool) -> Self {
        self.is_inversed = inversed;
        self
    }

    #[must_use]
    pub fn with_plot_offsets(mut self, start: f64, end: f64) -> Self {
        self.plot_offset_start = start.max(0.0);
        self.plot_offset_end = end.max(0.0);
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_label_template(mut self, uses_template: bool) -> Self {
        self.uses_label_template = uses_template;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> AxisRole {
        self.role
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    #[must_use]
    pub fn is_inversed(&self) -> bool {
        self.is_inversed
    }

    pub fn set_inversed(&mut self, inversed: bool) {
        self.is_inversed = inversed;
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom.factor
    }

    #[must_use]
    pub fn zoom_position(&self) -> f64 {
        self.zoom.position
    }

    #[must_use]
    pub fn zoom_window(&self) -> ZoomWindow {
        self.zoom
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    #[must_use]
    pub fn plot_offsets(&self) -> (f64, f64) {
        (self.plot_offset_start, self.plot_offset_end)
    }

    #[must_use]
    pub fn actual_range(&self) -> DoubleRange {
        self.actual_range
    }

    /// Data range currently inside the zoom window.
    #[must_use]
    pub fn visible_range(&self) -> DoubleRange {
        let delta = self.actual_range.delta();
        let start = self.actual_range.start + delta * self.zoom.position;
        DoubleRange {
            start,
            end: start + delta * self.zoom.factor,
        }
    }

    #[must_use]
    pub fn arrange_rect(&self) -> Rect {
        self.arrange_rect
    }

    pub fn set_arrange_rect(&mut self, rect: Rect) {
        self.arrange_rect = rect;
    }

    /// Pixel length available to data along this axis, plot offsets excluded.
    #[must_use]
    pub fn span_px(&self) -> f64 {
        let full = if self.is_vertical {
            self.arrange_rect.height
        } else {
            self.arrange_rect.width
        };
        (full - self.plot_offset_start - self.plot_offset_end).max(0.0)
    }

    #[must_use]
    pub fn registered_series(&self) -> &[SeriesId] {
        &self.registered_series
    }

    #[must_use]
    pub fn label_format(&self) -> Option<&str> {
        self.label_format.as_deref()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn uses_label_template(&self) -> bool {
        self.uses_label_template
    }

    pub(crate) fn set_vertical(&mut self, vertical: bool) {
        self.is_vertical = vertical;
    }

    pub(crate) fn register_series(&mut self, id: SeriesId) {
        if !self.registered_series.contains(&id) {
            self.registered_series.push(id);
        }
    }

    pub(crate) fn unregister_series(&mut self, id: SeriesId) {
        self.registered_series.retain(|registered| *registered != id);
    }

    pub(crate) fn set_zoom(&mut self, window: ZoomWindow) {
        self.zoom = ZoomWindow::clamped(window.factor, window.position);
    }
}
