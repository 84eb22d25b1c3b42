use indexmap::IndexMap;
use tracing::warn;

use super::{InteractionLayer, TrackballView, ViewId, ViewInstruction};

/// Headless interaction layer used by tests and hosts without a view tree.
///
/// It keeps the live view set in insertion order and counts instructions so
/// view churn can be asserted.
#[derive(Debug, Default)]
pub struct RecordingLayer {
    views: IndexMap<ViewId, TrackballView>,
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

impl RecordingLayer {
    #[must_use]
    pub fn views(&self) -> &IndexMap<ViewId, TrackballView> {
        &self.views
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn reset_counters(&mut self) {
        self.added = 0;
        self.updated = 0;
        self.removed = 0;
    }
}

impl InteractionLayer for RecordingLayer {
    fn apply(&mut self, instruction: ViewInstruction) {
        match instruction {
            ViewInstruction::Add { id, view } => {
                if self.views.insert(id, view).is_some() {
                    warn!(view = id.0, "view added twice");
                }
                self.added += 1;
            }
            ViewInstruction::Update { id, view } => {
                match self.views.get_mut(&id) {
                    Some(slot) => *slot = view,
                    None => warn!(view = id.0, "update for unknown view"),
                }
                self.updated += 1;
            }
            ViewInstruction::Remove { id } => {
                if self.views.shift_remove(&id).is_none() {
                    warn!(view = id.0, "remove for unknown view");
                }
                self.removed += 1;
            }
        }
    }
}
