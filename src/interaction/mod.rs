pub mod events;
mod label_collision_resolver;
mod nearest_point_locator;
mod selection_controller;
mod selection_state;
mod selection_target;
mod trackball_config;
mod trackball_engine;
mod zoom_config;
mod zoom_controller;
mod zoom_direction_resolver;
mod zoom_factor_resolver;

use serde::{Deserialize, Serialize};

use crate::core::{ChartArea, Point};

pub use label_collision_resolver::{LABEL_SPACING_PX, smart_label_alignment};
pub use nearest_point_locator::{find_least_x_value, validate_for_all_series};
pub use selection_controller::SelectionBehavior;
pub use selection_state::{SelectionConfig, SelectionState, SelectionType};
pub use selection_target::{DataPointSelectionTarget, SelectionTarget, SeriesSelectionTarget};
pub use trackball_config::{
    AxisLabelInfo, TrackballActivationMode, TrackballConfig, TrackballDisplayMode,
};
pub use trackball_engine::TrackballEngine;
pub use zoom_config::{
    DOUBLE_TAP_ZOOM_LEVEL, SELECTION_ZOOM_MIN_PX, ZOOM_LEVEL_STEP, ZoomMode, ZoomPanConfig,
};
pub use zoom_controller::AxisZoomController;

/// Phase of a continuous gesture (pinch) as reported by the platform recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureStatus {
    Started,
    Running,
    Completed,
    Canceled,
}

/// Pointer capability shared by the zoom, trackball and selection behaviors.
///
/// Every hook defaults to a no-op so a behavior only overrides the events it
/// reacts to.
pub trait PointerInteractive {
    fn on_touch_down(&mut self, _area: &mut ChartArea, _point: Point) {}
    fn on_touch_move(&mut self, _area: &mut ChartArea, _point: Point) {}
    fn on_touch_up(&mut self, _area: &mut ChartArea, _point: Point) {}
    fn on_tap(&mut self, _area: &mut ChartArea, _point: Point) {}
    fn on_double_tap(&mut self, _area: &mut ChartArea, _point: Point) {}
    fn on_long_press(&mut self, _area: &mut ChartArea, _point: Point) {}
}
