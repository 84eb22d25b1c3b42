use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::axis_transform::zoom_origin;
use crate::core::{Axis, ChartArea, Point, Rect, ZoomWindow};
use crate::error::ChartResult;

use super::events::{
    ResetZoomEventArgs, ScrollEventArgs, SelectionZoomDeltaEventArgs, SelectionZoomEndEventArgs,
    SelectionZoomStartEventArgs, ZoomDeltaEventArgs, ZoomEndEventArgs, ZoomPanListener,
    ZoomStartEventArgs,
};
use super::zoom_config::{
    DOUBLE_TAP_ZOOM_LEVEL, SELECTION_ZOOM_MIN_PX, ZOOM_LEVEL_STEP, ZoomMode, ZoomPanConfig,
};
use super::zoom_direction_resolver::can_zoom;
use super::zoom_factor_resolver::{
    current_zoom_level, limit_zoom_window, resolve_axis_range_zoom, resolve_cumulative_zoom,
    resolve_pan_position, resolve_selection_zoom,
};
use super::{GestureStatus, PointerInteractive};

/// Converts pinch, wheel, double-tap, drag and pan gestures into axis zoom
/// window updates.
///
/// This is the only component that mutates axis zoom state.
#[derive(Default)]
pub struct AxisZoomController {
    config: ZoomPanConfig,
    listeners: Vec<Box<dyn ZoomPanListener>>,
    is_pinch_active: bool,
    selection_origin: Option<Point>,
    selection_rect: Rect,
}

impl std::fmt::Debug for AxisZoomController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisZoomController")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("is_pinch_active", &self.is_pinch_active)
            .field("selection_rect", &self.selection_rect)
            .finish()
    }
}

impl AxisZoomController {
    pub fn new(config: ZoomPanConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> ZoomPanConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ZoomPanConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        if !self.config.enable_selection_zooming {
            self.clear_selection_rect();
        }
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Box<dyn ZoomPanListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn is_pinch_active(&self) -> bool {
        self.is_pinch_active
    }

    #[must_use]
    pub fn is_selection_zooming(&self) -> bool {
        self.selection_origin.is_some()
    }

    /// Current drag-selection rectangle; zero-sized when inactive.
    #[must_use]
    pub fn selection_rect(&self) -> Rect {
        self.selection_rect
    }

    fn is_eligible(&self, axis: &Axis, angle_deg: Option<f64>) -> bool {
        !axis.registered_series().is_empty()
            && can_zoom(
                self.config.zoom_mode,
                self.config.enable_directional_zooming,
                axis.is_vertical(),
                angle_deg,
            )
    }

    fn eligible_axes(&self, area: &ChartArea, angle_deg: Option<f64>) -> Vec<String> {
        area.axes()
            .filter(|axis| self.is_eligible(axis, angle_deg))
            .map(|axis| axis.name().to_owned())
            .collect()
    }

    /// Core zoom primitive: zooms `axis` to `cumulative_level` around `origin`.
    ///
    /// Returns `true` when a new window was committed.
    pub fn zoom(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        cumulative_level: f64,
        origin: f64,
    ) -> bool {
        match area.axis(axis) {
            Some(target) if self.is_eligible(target, None) => {}
            _ => return false,
        }
        self.zoom_axis(area, axis, cumulative_level, origin)
    }

    fn zoom_axis(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        cumulative_level: f64,
        origin: f64,
    ) -> bool {
        let maximum_zoom_level = self.config.maximum_zoom_level;
        self.apply_zoom(area, axis, |target| {
            resolve_cumulative_zoom(
                target.zoom_window(),
                cumulative_level,
                origin,
                maximum_zoom_level,
            )
        })
    }

    /// Runs the start → delta → commit → end sequence for one axis.
    fn apply_zoom(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        resolve: impl FnOnce(&Axis) -> Option<ZoomWindow>,
    ) -> bool {
        let Some(target) = area.axis(axis) else {
            return false;
        };
        let current = target.zoom_window();

        let mut start = ZoomStartEventArgs {
            axis: axis.to_owned(),
            current_factor: current.factor,
            current_position: current.position,
            cancel: false,
        };
        for listener in &mut self.listeners {
            listener.on_zoom_start(&mut start);
        }
        if start.cancel {
            debug!(axis, "zoom start cancelled");
            return false;
        }

        let Some(proposed) = resolve(target) else {
            return false;
        };

        let mut delta = ZoomDeltaEventArgs {
            axis: axis.to_owned(),
            previous_factor: current.factor,
            previous_position: current.position,
            current_factor: proposed.factor,
            current_position: proposed.position,
            cancel: false,
        };
        for listener in &mut self.listeners {
            listener.on_zoom_delta(&mut delta);
        }
        if delta.cancel {
            debug!(axis, "zoom delta cancelled");
            return false;
        }
        if proposed == current {
            return false;
        }

        let Some(target) = area.axis_mut(axis) else {
            return false;
        };
        target.set_zoom(proposed);
        let committed = target.zoom_window();
        debug!(
            axis,
            factor = committed.factor,
            position = committed.position,
            "zoom committed"
        );

        let end = ZoomEndEventArgs {
            axis: axis.to_owned(),
            current_factor: committed.factor,
            current_position: committed.position,
        };
        for listener in &mut self.listeners {
            listener.on_zoom_end(&end);
        }
        true
    }

    fn step_zoom(&mut self, area: &mut ChartArea, direction: f64, origin_at: Option<Point>) {
        for name in self.eligible_axes(area, None) {
            let Some(axis) = area.axis(&name) else {
                continue;
            };
            let level = (current_zoom_level(axis.zoom_window()) + direction * ZOOM_LEVEL_STEP)
                .max(1.0);
            let origin = origin_at.map_or(0.5, |point| zoom_origin(axis, point));
            self.zoom_axis(area, &name, level, origin);
        }
    }

    /// Zooms every eligible axis one step in around its center.
    pub fn zoom_in(&mut self, area: &mut ChartArea) {
        self.step_zoom(area, 1.0, None);
    }

    /// Zooms every eligible axis one step out around its center.
    pub fn zoom_out(&mut self, area: &mut ChartArea) {
        self.step_zoom(area, -1.0, None);
    }

    /// Shows exactly `[start, end]` (raw axis values) on `axis`.
    pub fn zoom_by_range(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        start: f64,
        end: f64,
    ) -> bool {
        let Some(target) = area.axis(axis) else {
            return false;
        };
        if !self.is_eligible(target, None) {
            return false;
        }
        let Some(window) = resolve_axis_range_zoom(target, start, end) else {
            trace!(axis, start, end, "zoom range outside actual range");
            return false;
        };
        let window = limit_zoom_window(window, self.config.maximum_zoom_level);
        self.set_window(area, axis, window)
    }

    /// Date-time flavour of [`Self::zoom_by_range`]; axis values are unix seconds.
    pub fn zoom_by_date_range(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        let to_seconds = |time: DateTime<Utc>| time.timestamp_millis() as f64 / 1_000.0;
        self.zoom_by_range(area, axis, to_seconds(start), to_seconds(end))
    }

    pub fn zoom_to_factor_on(
        &mut self,
        area: &mut ChartArea,
        axis: &str,
        position: f64,
        factor: f64,
    ) -> bool {
        let Some(target) = area.axis(axis) else {
            return false;
        };
        if !self.is_eligible(target, None) {
            return false;
        }
        let window = limit_zoom_window(
            ZoomWindow::clamped(factor, position),
            self.config.maximum_zoom_level,
        );
        self.set_window(area, axis, window)
    }

    /// Applies `factor` to every eligible axis, keeping positions inside the range.
    pub fn zoom_to_factor(&mut self, area: &mut ChartArea, factor: f64) {
        for name in self.eligible_axes(area, None) {
            let Some(axis) = area.axis(&name) else {
                continue;
            };
            let window = limit_zoom_window(
                ZoomWindow::clamped(factor, axis.zoom_position()),
                self.config.maximum_zoom_level,
            );
            self.set_window(area, &name, window);
        }
    }

    fn set_window(&mut self, area: &mut ChartArea, axis: &str, window: ZoomWindow) -> bool {
        let Some(target) = area.axis_mut(axis) else {
            return false;
        };
        if target.zoom_window() == window {
            return false;
        }
        target.set_zoom(window);
        debug!(
            axis,
            factor = window.factor,
            position = window.position,
            "zoom window set"
        );
        true
    }

    /// Restores every eligible axis to factor 1 / position 0.
    pub fn reset(&mut self, area: &mut ChartArea) {
        for name in self.eligible_axes(area, None) {
            let Some(axis) = area.axis_mut(&name) else {
                continue;
            };
            let previous = axis.zoom_window();
            if !previous.is_zoomed() {
                continue;
            }
            axis.set_zoom(ZoomWindow::default());
            debug!(axis = name.as_str(), "zoom reset");

            let args = ResetZoomEventArgs {
                axis: name.clone(),
                previous_factor: previous.factor,
                previous_position: previous.position,
            };
            for listener in &mut self.listeners {
                listener.on_reset(&args);
            }
        }
    }

    pub fn on_pinch_state_changed(
        &mut self,
        area: &mut ChartArea,
        status: GestureStatus,
        location: Point,
        angle_deg: Option<f64>,
        scale: f64,
    ) {
        if !self.config.enable_pinch_zooming {
            return;
        }
        match status {
            GestureStatus::Started => {
                self.is_pinch_active = true;
                self.clear_selection_rect();
            }
            GestureStatus::Running => {
                self.is_pinch_active = true;
                if !scale.is_finite() || scale <= 0.0 {
                    return;
                }
                for name in self.eligible_axes(area, angle_deg) {
                    let Some(axis) = area.axis(&name) else {
                        continue;
                    };
                    let origin = zoom_origin(axis, location);
                    let level = current_zoom_level(axis.zoom_window()) * scale;
                    self.zoom_axis(area, &name, level, origin);
                }
            }
            GestureStatus::Completed | GestureStatus::Canceled => {
                self.is_pinch_active = false;
            }
        }
    }

    /// Zooms one step per wheel event; positive deltas zoom in.
    pub fn on_mouse_wheel_changed(&mut self, area: &mut ChartArea, position: Point, delta: f64) {
        if !self.config.enable_mouse_wheel_zooming || delta == 0.0 || !delta.is_finite() {
            return;
        }
        if !area.plot_bounds().contains(position) {
            return;
        }
        self.step_zoom(area, delta.signum(), Some(position));
    }

    /// Pans every eligible axis by a pixel translation of the plot content.
    pub fn on_scroll_changed(&mut self, area: &mut ChartArea, translation: Point) {
        if !self.config.enable_panning || self.is_pinch_active || self.is_selection_zooming() {
            return;
        }
        for name in self.eligible_axes(area, None) {
            let Some(axis) = area.axis_mut(&name) else {
                continue;
            };
            let window = axis.zoom_window();
            let translation_px = if axis.is_vertical() {
                translation.y
            } else {
                translation.x
            };
            let Some(position) = resolve_pan_position(
                window,
                translation_px,
                axis.span_px(),
                axis.is_vertical(),
                axis.is_inversed(),
            ) else {
                continue;
            };
            if position == window.position {
                continue;
            }
            axis.set_zoom(ZoomWindow {
                factor: window.factor,
                position,
            });
            trace!(axis = name.as_str(), position, "pan");

            let args = ScrollEventArgs {
                axis: name.clone(),
                zoom_position: position,
            };
            for listener in &mut self.listeners {
                listener.on_scroll(&args);
            }
        }
    }

    /// Zooms in at `position`, or resets when any axis is already zoomed.
    pub fn on_double_tap(&mut self, area: &mut ChartArea, position: Point) {
        if !self.config.enable_double_tap || !area.plot_bounds().contains(position) {
            return;
        }
        let axes = self.eligible_axes(area, None);
        let any_zoomed = axes
            .iter()
            .filter_map(|name| area.axis(name))
            .any(Axis::is_zoomed);
        if any_zoomed {
            self.reset(area);
            return;
        }
        for name in axes {
            let Some(axis) = area.axis(&name) else {
                continue;
            };
            let origin = zoom_origin(axis, position);
            self.zoom_axis(area, &name, DOUBLE_TAP_ZOOM_LEVEL, origin);
        }
    }

    fn selection_bounds(&self, plot: Rect, origin: Point, current: Point) -> Rect {
        let rect = Rect::from_points(origin, plot.clamp_point(current));
        match self.config.zoom_mode {
            ZoomMode::X => Rect::new(rect.left, plot.top, rect.width, plot.height),
            ZoomMode::Y => Rect::new(plot.left, rect.top, plot.width, rect.height),
            ZoomMode::XY => rect,
        }
    }

    fn selection_is_large_enough(&self, rect: Rect) -> bool {
        match self.config.zoom_mode {
            ZoomMode::X => rect.width > SELECTION_ZOOM_MIN_PX,
            ZoomMode::Y => rect.height > SELECTION_ZOOM_MIN_PX,
            ZoomMode::XY => {
                rect.width > SELECTION_ZOOM_MIN_PX || rect.height > SELECTION_ZOOM_MIN_PX
            }
        }
    }

    fn clear_selection_rect(&mut self) {
        self.selection_origin = None;
        self.selection_rect = Rect::default();
    }

    fn begin_selection(&mut self, area: &ChartArea, point: Point) {
        if !self.config.enable_selection_zooming || self.is_pinch_active {
            return;
        }
        let plot = area.plot_bounds();
        if !plot.contains(point) {
            return;
        }
        self.selection_origin = Some(point);
        self.selection_rect = self.selection_bounds(plot, point, point);

        let args = SelectionZoomStartEventArgs {
            bounds: self.selection_rect,
        };
        for listener in &mut self.listeners {
            listener.on_selection_zoom_start(&args);
        }
    }

    fn update_selection(&mut self, area: &ChartArea, point: Point) {
        let Some(origin) = self.selection_origin else {
            return;
        };
        let mut args = SelectionZoomDeltaEventArgs {
            bounds: self.selection_bounds(area.plot_bounds(), origin, point),
            cancel: false,
        };
        for listener in &mut self.listeners {
            listener.on_selection_zoom_delta(&mut args);
        }
        if args.cancel {
            trace!("selection zoom delta cancelled");
            return;
        }
        self.selection_rect = args.bounds;
    }

    fn complete_selection(&mut self, area: &mut ChartArea) {
        if self.selection_origin.is_none() {
            return;
        }
        let selection = self.selection_rect;
        self.clear_selection_rect();

        let args = SelectionZoomEndEventArgs { bounds: selection };
        for listener in &mut self.listeners {
            listener.on_selection_zoom_end(&args);
        }
        if !self.selection_is_large_enough(selection) {
            return;
        }

        let maximum_zoom_level = self.config.maximum_zoom_level;
        for name in self.eligible_axes(area, None) {
            self.apply_zoom(area, &name, |axis| {
                resolve_selection_zoom(axis, selection)
                    .map(|window| limit_zoom_window(window, maximum_zoom_level))
            });
        }
    }
}

impl PointerInteractive for AxisZoomController {
    fn on_touch_down(&mut self, area: &mut ChartArea, point: Point) {
        self.begin_selection(area, point);
    }

    fn on_touch_move(&mut self, area: &mut ChartArea, point: Point) {
        self.update_selection(area, point);
    }

    fn on_touch_up(&mut self, area: &mut ChartArea, _point: Point) {
        self.complete_selection(area);
    }

    fn on_double_tap(&mut self, area: &mut ChartArea, point: Point) {
        AxisZoomController::on_double_tap(self, area, point);
    }
}
