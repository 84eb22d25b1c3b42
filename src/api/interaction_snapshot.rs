use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Rect, SeriesId, SeriesPointInfo};
use crate::interaction::{AxisLabelInfo, SelectionType};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisZoomSnapshot {
    pub zoom_factor: f64,
    pub zoom_position: f64,
    pub visible_start: f64,
    pub visible_end: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub selection_type: SelectionType,
    pub selected_index: Option<usize>,
    pub selected_indexes: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSelectionSnapshot {
    pub series: SeriesId,
    pub selection: SelectionSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    pub plot_bounds: Rect,
    pub transposed: bool,
    /// Zoom state per axis in registration order.
    pub axes: IndexMap<String, AxisZoomSnapshot>,
    pub selection_rect: Rect,
    pub trackball_points: Vec<SeriesPointInfo>,
    pub trackball_axis_labels: Vec<AxisLabelInfo>,
    pub series_selection: SelectionSnapshot,
    pub point_selections: Vec<PointSelectionSnapshot>,
}
