mod primitives;
mod recording_layer;
mod view;

pub use primitives::{Color, LabelStyle, MarkerStyle};
pub use recording_layer::RecordingLayer;
pub use view::{TrackballView, ViewId, ViewInstruction};

/// Contract implemented by the host's floating-view layer.
///
/// The interaction core hands over fully resolved placement instructions so
/// view creation and painting stay outside chart interaction logic.
pub trait InteractionLayer {
    fn apply(&mut self, instruction: ViewInstruction);
}
