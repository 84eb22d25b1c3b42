mod chart_gesture;
mod gesture_controller;
mod interaction_config;
mod interaction_snapshot;
mod interactive_chart;
mod selection_controller;
mod snapshot_controller;
mod zoom_controller;

pub use chart_gesture::ChartGesture;
pub use interaction_config::{InteractionConfig, SelectionScope};
pub use interaction_snapshot::{
    AxisZoomSnapshot, InteractionSnapshot, PointSelectionSnapshot, SelectionSnapshot,
};
pub use interactive_chart::InteractiveChart;
