use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect, SeriesId};

use super::{LabelStyle, MarkerStyle};

/// Identity of a floating view owned by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Floating view content placed by the trackball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackballView {
    Marker {
        series: SeriesId,
        center: Point,
        style: MarkerStyle,
    },
    PointLabel {
        series: SeriesId,
        rect: Rect,
        text: String,
        style: LabelStyle,
    },
    /// One combined label listing every tracked point.
    GroupLabel {
        rect: Rect,
        lines: Vec<String>,
        style: LabelStyle,
    },
    AxisLabel {
        axis: String,
        rect: Rect,
        text: String,
        custom_template: bool,
        style: LabelStyle,
    },
}

impl TrackballView {
    #[must_use]
    pub fn rect(&self) -> Rect {
        match self {
            Self::Marker { center, style, .. } => Rect::new(
                center.x - style.size_px * 0.5,
                center.y - style.size_px * 0.5,
                style.size_px,
                style.size_px,
            ),
            Self::PointLabel { rect, .. }
            | Self::GroupLabel { rect, .. }
            | Self::AxisLabel { rect, .. } => *rect,
        }
    }
}

/// Instruction emitted to the host's interaction layer.
///
/// The core never paints; it only adds, repositions or removes views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewInstruction {
    Add { id: ViewId, view: TrackballView },
    Update { id: ViewId, view: TrackballView },
    Remove { id: ViewId },
}
