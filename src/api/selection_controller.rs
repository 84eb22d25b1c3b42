use indexmap::IndexMap;

use crate::core::{Point, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DataPointSelectionTarget, SelectionBehavior, SelectionConfig, SelectionType,
    events::SelectionListener,
};
use crate::render::InteractionLayer;

use super::{InteractiveChart, SelectionScope};

impl<L: InteractionLayer> InteractiveChart<L> {
    #[must_use]
    pub fn selection_scope(&self) -> SelectionScope {
        self.config.selection_scope
    }

    pub fn set_selection_scope(&mut self, scope: SelectionScope) {
        self.config.selection_scope = scope;
    }

    #[must_use]
    pub fn selection_config(&self) -> SelectionConfig {
        self.config.selection
    }

    /// Changes the selection type of every selection behavior.
    pub fn set_selection_type(&mut self, selection_type: SelectionType) {
        self.config.selection.selection_type = selection_type;
        self.series_selection.set_type(&self.area, selection_type);
        for selection in self.point_selections.values_mut() {
            selection.set_type(&self.area, selection_type);
        }
    }

    pub fn add_series_selection_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.series_selection.add_listener(listener);
    }

    pub fn add_point_selection_listener(
        &mut self,
        series: SeriesId,
        listener: Box<dyn SelectionListener>,
    ) -> ChartResult<()> {
        point_selection_entry(&mut self.point_selections, series)?.add_listener(listener);
        Ok(())
    }

    pub fn set_selected_series_index(&mut self, index: Option<usize>) {
        self.series_selection.set_selected_index(&self.area, index);
    }

    pub fn set_selected_series_indexes(&mut self, indexes: impl IntoIterator<Item = usize>) {
        self.series_selection.set_selected_indexes(&self.area, indexes);
    }

    pub fn set_selected_point_index(
        &mut self,
        series: SeriesId,
        index: Option<usize>,
    ) -> ChartResult<()> {
        let selection = point_selection_entry(&mut self.point_selections, series)?;
        selection.set_selected_index(&self.area, index);
        Ok(())
    }

    pub fn set_selected_point_indexes(
        &mut self,
        series: SeriesId,
        indexes: impl IntoIterator<Item = usize>,
    ) -> ChartResult<()> {
        let selection = point_selection_entry(&mut self.point_selections, series)?;
        selection.set_selected_indexes(&self.area, indexes);
        Ok(())
    }

    pub fn add_selected_point_index(&mut self, series: SeriesId, index: usize) -> ChartResult<()> {
        let selection = point_selection_entry(&mut self.point_selections, series)?;
        selection.add_selected_index(&self.area, index);
        Ok(())
    }

    pub fn remove_selected_point_index(
        &mut self,
        series: SeriesId,
        index: usize,
    ) -> ChartResult<()> {
        let selection = point_selection_entry(&mut self.point_selections, series)?;
        selection.remove_selected_index(&self.area, index);
        Ok(())
    }

    /// Clears series and point selections.
    pub fn clear_selection(&mut self) {
        self.series_selection.clear_selection(&self.area);
        for selection in self.point_selections.values_mut() {
            selection.clear_selection(&self.area);
        }
    }

    /// Routes a tap to the configured selection scope; `true` when a selection changed.
    pub(super) fn select_at(&mut self, point: Point) -> bool {
        match self.config.selection_scope {
            SelectionScope::Series => self.series_selection.select_at(&self.area, point),
            SelectionScope::DataPoint => {
                // Later series paint on top; the topmost hit owns the tap even if cancelled.
                let area = &self.area;
                self.point_selections
                    .values_mut()
                    .rev()
                    .find(|selection| selection.hit_index(area, point).is_some())
                    .is_some_and(|selection| selection.select_at(area, point))
            }
        }
    }
}

fn point_selection_entry(
    selections: &mut IndexMap<SeriesId, SelectionBehavior<DataPointSelectionTarget>>,
    series: SeriesId,
) -> ChartResult<&mut SelectionBehavior<DataPointSelectionTarget>> {
    selections
        .get_mut(&series)
        .ok_or_else(|| unknown_series(series))
}

fn unknown_series(series: SeriesId) -> ChartError {
    ChartError::InvalidData(format!("unknown series {}", series.0))
}
