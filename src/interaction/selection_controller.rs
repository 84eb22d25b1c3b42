use tracing::{debug, trace};

use crate::core::{ChartArea, Point};
use crate::error::ChartResult;

use super::PointerInteractive;
use super::events::{SelectionChangedEventArgs, SelectionChangingEventArgs, SelectionListener};
use super::selection_state::{SelectionConfig, SelectionState, SelectionType};
use super::selection_target::SelectionTarget;

/// Single/multiple selection over a [`SelectionTarget`] with cancellable
/// "changing" and informational "changed" events.
pub struct SelectionBehavior<T: SelectionTarget> {
    config: SelectionConfig,
    target: T,
    state: SelectionState,
    listeners: Vec<Box<dyn SelectionListener>>,
    syncing_from_tap: bool,
}

impl<T: SelectionTarget + std::fmt::Debug> std::fmt::Debug for SelectionBehavior<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBehavior")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: SelectionTarget> SelectionBehavior<T> {
    pub fn new(target: T, config: SelectionConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            target,
            state: SelectionState::default(),
            listeners: Vec::new(),
            syncing_from_tap: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    #[must_use]
    pub fn selection_type(&self) -> SelectionType {
        self.config.selection_type
    }

    /// Switching to or from `Multiple` clears the current selection.
    pub fn set_type(&mut self, area: &ChartArea, selection_type: SelectionType) {
        let previous = self.config.selection_type;
        if previous == selection_type {
            return;
        }
        self.config.selection_type = selection_type;
        if previous == SelectionType::Multiple || selection_type == SelectionType::Multiple {
            self.clear_selection(area);
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    #[must_use]
    pub fn selected_indexes(&self) -> &[usize] {
        &self.state.selected_indexes
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn current_indexes(&self) -> Vec<usize> {
        match self.config.selection_type {
            SelectionType::Multiple => self.state.actual_indexes.clone(),
            _ => self.state.selected_index.into_iter().collect(),
        }
    }

    /// Indexes that would be selected after toggling `index`.
    fn proposed_indexes(&self, index: usize) -> Vec<usize> {
        match self.config.selection_type {
            SelectionType::Multiple => {
                let mut indexes = self.state.actual_indexes.clone();
                match indexes.iter().position(|value| *value == index) {
                    Some(position) => {
                        indexes.remove(position);
                    }
                    None => indexes.push(index),
                }
                indexes
            }
            SelectionType::SingleDeselect if self.state.selected_index == Some(index) => Vec::new(),
            _ => vec![index],
        }
    }

    /// Raises "changing" for a toggle of `index`; `false` when a listener cancelled.
    pub fn is_selection_changing_invoked(&mut self, index: usize) -> bool {
        if self.listeners.is_empty() {
            return true;
        }
        let mut args = SelectionChangingEventArgs {
            new_indexes: self.proposed_indexes(index),
            old_indexes: self.current_indexes(),
            cancel: false,
        };
        for listener in &mut self.listeners {
            listener.on_selection_changing(&mut args);
        }
        !args.cancel
    }

    fn invoke_selection_changed(&mut self, old_indexes: Vec<usize>, new_indexes: Vec<usize>) {
        let args = SelectionChangedEventArgs {
            new_indexes,
            old_indexes,
        };
        debug!(
            new = ?args.new_indexes,
            old = ?args.old_indexes,
            "selection changed"
        );
        for listener in &mut self.listeners {
            listener.on_selection_changed(&args);
        }
    }

    /// Applies a toggle of `index` to the selection state and highlights.
    pub fn update_selection_changing(&mut self, area: &ChartArea, index: usize, is_from_tap: bool) {
        match self.config.selection_type {
            SelectionType::None => {}
            SelectionType::Multiple => {
                let previous = self.state.actual_indexes.clone();
                self.state.actual_indexes = self.proposed_indexes(index);
                if is_from_tap {
                    self.syncing_from_tap = true;
                    self.state.selected_indexes = self.state.actual_indexes.clone();
                    self.selected_indexes_changed(area);
                    self.syncing_from_tap = false;
                }
                let current = self.state.actual_indexes.clone();
                self.sync_highlights(area, &previous, &current);
            }
            SelectionType::Single | SelectionType::SingleDeselect => {
                let previous = self.state.selected_index;
                self.state.previous_index = previous;
                self.state.selected_index = self.proposed_indexes(index).first().copied();
                let current: Vec<usize> = self.state.selected_index.into_iter().collect();
                self.sync_highlights(area, &previous.into_iter().collect::<Vec<_>>(), &current);
            }
        }
    }

    /// Selectable index under `point`, if the target is hit there.
    #[must_use]
    pub fn hit_index(&self, area: &ChartArea, point: Point) -> Option<usize> {
        self.target
            .index_at(area, point)
            .filter(|index| *index < self.target.selectable_count(area))
    }

    /// Selects or toggles the item under `point`.
    pub fn select_at(&mut self, area: &ChartArea, point: Point) -> bool {
        if self.config.selection_type == SelectionType::None {
            return false;
        }
        let Some(index) = self.hit_index(area, point) else {
            return false;
        };
        if !self.is_selection_changing_invoked(index) {
            trace!(index, "selection changing cancelled");
            return false;
        }
        let old_indexes = self.current_indexes();
        self.update_selection_changing(area, index, true);
        let new_indexes = self.current_indexes();
        self.invoke_selection_changed(old_indexes, new_indexes);
        true
    }

    /// Resets every selection when the target has something to clear.
    pub fn clear_selection(&mut self, area: &ChartArea) -> bool {
        if !self.target.can_clear(area) {
            return false;
        }
        let old_indexes: Vec<usize> = self
            .state
            .selected_index
            .into_iter()
            .chain(self.state.actual_indexes.iter().copied())
            .collect();
        let highlighted: Vec<usize> = self.target.highlighted().keys().copied().collect();
        for index in highlighted {
            self.target.clear_highlight(index);
        }
        self.state = SelectionState::default();
        if !old_indexes.is_empty() {
            self.invoke_selection_changed(old_indexes, Vec::new());
        }
        true
    }

    pub fn set_selected_index(&mut self, area: &ChartArea, index: Option<usize>) {
        let previous = self.state.selected_index;
        if previous == index {
            return;
        }
        let old_indexes = self.current_indexes();
        self.state.previous_index = previous;
        self.state.selected_index = index;
        let new_indexes: Vec<usize> = index.into_iter().collect();
        self.sync_highlights(
            area,
            &previous.into_iter().collect::<Vec<_>>(),
            &new_indexes,
        );
        self.invoke_selection_changed(old_indexes, new_indexes);
    }

    /// Replaces the public multiple-selection collection; duplicates are dropped.
    pub fn set_selected_indexes(
        &mut self,
        area: &ChartArea,
        indexes: impl IntoIterator<Item = usize>,
    ) {
        let mut unique: Vec<usize> = Vec::new();
        for index in indexes {
            if !unique.contains(&index) {
                unique.push(index);
            }
        }
        self.state.selected_indexes = unique;
        self.selected_indexes_changed(area);
    }

    pub fn add_selected_index(&mut self, area: &ChartArea, index: usize) {
        if self.state.selected_indexes.contains(&index) {
            return;
        }
        self.state.selected_indexes.push(index);
        self.selected_indexes_changed(area);
    }

    pub fn remove_selected_index(&mut self, area: &ChartArea, index: usize) {
        let Some(position) = self
            .state
            .selected_indexes
            .iter()
            .position(|value| *value == index)
        else {
            return;
        };
        self.state.selected_indexes.remove(position);
        self.selected_indexes_changed(area);
    }

    /// Reconciles the applied mirror with an edited public collection.
    ///
    /// Outside `Multiple` the collection is only stored; the single index stays
    /// the one active selection.
    fn selected_indexes_changed(&mut self, area: &ChartArea) {
        if self.syncing_from_tap || self.config.selection_type != SelectionType::Multiple {
            return;
        }
        let previous = std::mem::replace(
            &mut self.state.actual_indexes,
            self.state.selected_indexes.clone(),
        );
        let current = self.state.actual_indexes.clone();
        self.sync_highlights(area, &previous, &current);

        let mut before = previous.clone();
        let mut after = current.clone();
        before.sort_unstable();
        after.sort_unstable();
        if before != after {
            self.invoke_selection_changed(previous, current);
        }
    }

    fn sync_highlights(&mut self, area: &ChartArea, previous: &[usize], current: &[usize]) {
        for index in previous {
            if !current.contains(index) {
                self.target.clear_highlight(*index);
            }
        }
        let count = self.target.selectable_count(area);
        for index in current {
            if *index < count {
                self.target.apply_highlight(*index, self.config.selection_brush);
            }
        }
    }
}

impl<T: SelectionTarget> PointerInteractive for SelectionBehavior<T> {
    fn on_tap(&mut self, area: &mut ChartArea, point: Point) {
        self.select_at(area, point);
    }
}
