use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionType {
    None,
    #[default]
    Single,
    /// Like `Single`, but tapping the selected item again deselects it.
    SingleDeselect,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub selection_type: SelectionType,
    /// Highlight applied to selected points or series.
    pub selection_brush: Color,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selection_type: SelectionType::Single,
            selection_brush: Color::rgb(0.95, 0.55, 0.1),
        }
    }
}

impl SelectionConfig {
    pub fn validate(self) -> ChartResult<Self> {
        self.selection_brush.validate()?;
        Ok(self)
    }
}

/// Runtime selection of one behavior.
///
/// `selected_indexes` is the public multiple-selection collection; `actual`
/// mirrors what has been applied to the target so external edits of the
/// collection can be reconciled against tap toggles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub(crate) selected_index: Option<usize>,
    pub(crate) selected_indexes: Vec<usize>,
    pub(crate) actual_indexes: Vec<usize>,
    pub(crate) previous_index: Option<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn selected_indexes(&self) -> &[usize] {
        &self.selected_indexes
    }

    #[must_use]
    pub fn actual_indexes(&self) -> &[usize] {
        &self.actual_indexes
    }

    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.previous_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_index.is_none() && self.actual_indexes.is_empty()
    }
}
