use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::{LabelStyle, MarkerStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackballDisplayMode {
    /// One floating label per point, de-overlapped vertically.
    #[default]
    FloatAllPoints,
    /// Only the point nearest to the pointer in both directions.
    NearestPoint,
    /// One combined label listing every tracked point.
    GroupAllPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackballActivationMode {
    /// Hover and drag move the trackball.
    #[default]
    TouchMove,
    /// The trackball appears after a long press and follows the pointer until release.
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackballConfig {
    pub display_mode: TrackballDisplayMode,
    pub activation_mode: TrackballActivationMode,
    pub label_style: LabelStyle,
    pub marker_style: MarkerStyle,
    pub show_markers: bool,
    pub show_axis_labels: bool,
    pub axis_label_style: LabelStyle,
    /// Gap between a tracked point and its label.
    pub label_offset_px: f64,
}

impl Default for TrackballConfig {
    fn default() -> Self {
        Self {
            display_mode: TrackballDisplayMode::FloatAllPoints,
            activation_mode: TrackballActivationMode::TouchMove,
            label_style: LabelStyle::default(),
            marker_style: MarkerStyle::default(),
            show_markers: true,
            show_axis_labels: true,
            axis_label_style: LabelStyle::default(),
            label_offset_px: 8.0,
        }
    }
}

impl TrackballConfig {
    pub fn validate(self) -> ChartResult<Self> {
        self.label_style.validate()?;
        self.axis_label_style.validate()?;
        if !self.marker_style.size_px.is_finite() || self.marker_style.size_px < 0.0 {
            return Err(ChartError::InvalidData(
                "trackball marker size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_offset_px.is_finite() || self.label_offset_px < 0.0 {
            return Err(ChartError::InvalidData(
                "trackball label offset must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Axis value readout generated for one trackball activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelInfo {
    pub axis: String,
    pub text: String,
    pub rect: Rect,
    pub custom_template: bool,
}

#[cfg(test)]
mod tests {
    use super::TrackballConfig;

    #[test]
    fn negative_label_offset_is_rejected() {
        let config = TrackballConfig {
            label_offset_px: -1.0,
            ..TrackballConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(TrackballConfig::default().validate().is_ok());
    }
}
