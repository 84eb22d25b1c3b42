use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Cumulative-level step applied by wheel notches and `zoom_in`/`zoom_out`.
pub const ZOOM_LEVEL_STEP: f64 = 0.25;
/// Cumulative level applied by a double tap on an unzoomed chart.
pub const DOUBLE_TAP_ZOOM_LEVEL: f64 = 2.5;
/// Drag-selection rectangles must exceed this size to zoom.
pub const SELECTION_ZOOM_MIN_PX: f64 = 20.0;

/// Axis orientations a zoom/pan gesture may affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZoomMode {
    /// Horizontal axes only.
    X,
    /// Vertical axes only.
    Y,
    #[default]
    XY,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPanConfig {
    pub zoom_mode: ZoomMode,
    pub enable_pinch_zooming: bool,
    pub enable_panning: bool,
    pub enable_double_tap: bool,
    pub enable_mouse_wheel_zooming: bool,
    pub enable_selection_zooming: bool,
    /// Restricts pinch zoom to the axis matching the pinch angle (XY mode only).
    pub enable_directional_zooming: bool,
    /// Upper bound on the cumulative zoom level (`1 / zoom_factor`).
    pub maximum_zoom_level: Option<f64>,
}

impl Default for ZoomPanConfig {
    fn default() -> Self {
        Self {
            zoom_mode: ZoomMode::XY,
            enable_pinch_zooming: true,
            enable_panning: true,
            enable_double_tap: true,
            enable_mouse_wheel_zooming: true,
            enable_selection_zooming: false,
            enable_directional_zooming: false,
            maximum_zoom_level: None,
        }
    }
}

impl ZoomPanConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if let Some(level) = self.maximum_zoom_level {
            if !level.is_finite() || level < 1.0 {
                return Err(ChartError::InvalidData(
                    "maximum_zoom_level must be finite and >= 1".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}
