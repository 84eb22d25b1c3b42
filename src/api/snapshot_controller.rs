use crate::core::axis_transform::from_linear;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{SelectionBehavior, SelectionTarget};
use crate::render::InteractionLayer;

use super::{
    AxisZoomSnapshot, InteractionSnapshot, InteractiveChart, PointSelectionSnapshot,
    SelectionSnapshot,
};

fn selection_snapshot<T: SelectionTarget>(selection: &SelectionBehavior<T>) -> SelectionSnapshot {
    SelectionSnapshot {
        selection_type: selection.selection_type(),
        selected_index: selection.selected_index(),
        selected_indexes: selection.selected_indexes().to_vec(),
    }
}

impl<L: InteractionLayer> InteractiveChart<L> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> InteractionSnapshot {
        let axes = self
            .area
            .axes()
            .map(|axis| {
                let visible = axis.visible_range();
                (
                    axis.name().to_owned(),
                    AxisZoomSnapshot {
                        zoom_factor: axis.zoom_factor(),
                        zoom_position: axis.zoom_position(),
                        visible_start: from_linear(axis, visible.start),
                        visible_end: from_linear(axis, visible.end),
                    },
                )
            })
            .collect();

        InteractionSnapshot {
            plot_bounds: self.area.plot_bounds(),
            transposed: self.area.is_transposed(),
            axes,
            selection_rect: self.zoom.selection_rect(),
            trackball_points: self.trackball.points().to_vec(),
            trackball_axis_labels: self.trackball.axis_labels().to_vec(),
            series_selection: selection_snapshot(&self.series_selection),
            point_selections: self
                .point_selections
                .iter()
                .map(|(series, selection)| PointSelectionSnapshot {
                    series: *series,
                    selection: selection_snapshot(selection),
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
