use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Style descriptor for floating trackball and axis labels.
///
/// Text metrics are estimates used for collision layout; the view layer may
/// measure precisely, but placement is decided from these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub background: Color,
    pub text_color: Color,
    pub char_width_px: f64,
    pub line_height_px: f64,
    pub padding_px: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.12, 0.12, 0.12, 0.9),
            text_color: Color::rgb(1.0, 1.0, 1.0),
            char_width_px: 7.0,
            line_height_px: 14.0,
            padding_px: 4.0,
        }
    }
}

impl LabelStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.background.validate()?;
        self.text_color.validate()?;
        for (value, name) in [
            (self.char_width_px, "char_width_px"),
            (self.line_height_px, "line_height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "label style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "label style `padding_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Estimated box size of `text`, one line per `\n`.
    #[must_use]
    pub fn measure(self, text: &str) -> (f64, f64) {
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        (
            widest as f64 * self.char_width_px + 2.0 * self.padding_px,
            lines as f64 * self.line_height_px + 2.0 * self.padding_px,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub fill: Color,
    pub stroke: Color,
    pub size_px: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: Color::rgb(1.0, 1.0, 1.0),
            stroke: Color::rgb(0.12, 0.45, 0.85),
            size_px: 8.0,
        }
    }
}
