use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{SelectionConfig, TrackballConfig, ZoomPanConfig};

/// What a tap selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionScope {
    /// Data points of the series under the pointer.
    #[default]
    DataPoint,
    /// Whole series.
    Series,
}

/// Public interaction bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// interaction setup alongside their own chart description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InteractionConfig {
    pub transposed: bool,
    pub zoom_pan: ZoomPanConfig,
    pub trackball: TrackballConfig,
    pub selection: SelectionConfig,
    pub selection_scope: SelectionScope,
}

impl InteractionConfig {
    #[must_use]
    pub fn with_transposed(mut self, transposed: bool) -> Self {
        self.transposed = transposed;
        self
    }

    #[must_use]
    pub fn with_zoom_pan(mut self, zoom_pan: ZoomPanConfig) -> Self {
        self.zoom_pan = zoom_pan;
        self
    }

    #[must_use]
    pub fn with_trackball(mut self, trackball: TrackballConfig) -> Self {
        self.trackball = trackball;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: SelectionConfig, scope: SelectionScope) -> Self {
        self.selection = selection;
        self.selection_scope = scope;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.zoom_pan.validate()?;
        self.trackball.validate()?;
        self.selection.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}
