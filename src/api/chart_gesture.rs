use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::interaction::GestureStatus;

/// Pointer or gesture event already decoded by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartGesture {
    /// Pointer moved without a pressed button.
    Hover(Point),
    /// Pointer left the chart surface.
    Exit,
    TouchDown(Point),
    TouchMove(Point),
    TouchUp(Point),
    Tap(Point),
    DoubleTap(Point),
    LongPress(Point),
    Pinch {
        status: GestureStatus,
        location: Point,
        /// Angle between the two fingers in degrees, when the recognizer reports it.
        angle_deg: Option<f64>,
        scale: f64,
    },
    MouseWheel {
        position: Point,
        delta: f64,
    },
    /// Pan translation of the plot content in pixels.
    Scroll {
        translation: Point,
    },
}
