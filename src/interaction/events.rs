//! Synchronous event surface of the interaction behaviors.
//!
//! Cancellable events expose a `cancel` flag; any listener in the chain may set
//! it and the raising operation stops before mutating state.

use serde::{Deserialize, Serialize};

use crate::core::{Rect, SeriesPointInfo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomStartEventArgs {
    pub axis: String,
    pub current_factor: f64,
    pub current_position: f64,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomDeltaEventArgs {
    pub axis: String,
    pub previous_factor: f64,
    pub previous_position: f64,
    pub current_factor: f64,
    pub current_position: f64,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomEndEventArgs {
    pub axis: String,
    pub current_factor: f64,
    pub current_position: f64,
}

/// Raised per axis by `reset`, carrying the window that was discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetZoomEventArgs {
    pub axis: String,
    pub previous_factor: f64,
    pub previous_position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollEventArgs {
    pub axis: String,
    pub zoom_position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionZoomStartEventArgs {
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionZoomDeltaEventArgs {
    pub bounds: Rect,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionZoomEndEventArgs {
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionChangingEventArgs {
    pub new_indexes: Vec<usize>,
    pub old_indexes: Vec<usize>,
    pub cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionChangedEventArgs {
    pub new_indexes: Vec<usize>,
    pub old_indexes: Vec<usize>,
}

/// Observer of zoom, pan and drag-selection zoom.
pub trait ZoomPanListener {
    fn on_zoom_start(&mut self, _args: &mut ZoomStartEventArgs) {}
    fn on_zoom_delta(&mut self, _args: &mut ZoomDeltaEventArgs) {}
    fn on_zoom_end(&mut self, _args: &ZoomEndEventArgs) {}
    fn on_reset(&mut self, _args: &ResetZoomEventArgs) {}
    fn on_scroll(&mut self, _args: &ScrollEventArgs) {}
    fn on_selection_zoom_start(&mut self, _args: &SelectionZoomStartEventArgs) {}
    fn on_selection_zoom_delta(&mut self, _args: &mut SelectionZoomDeltaEventArgs) {}
    fn on_selection_zoom_end(&mut self, _args: &SelectionZoomEndEventArgs) {}
}

/// Extension hooks around trackball generation.
pub trait TrackballListener {
    /// Called after styles are assigned; labels may be rewritten in place.
    fn on_labels_generated(&mut self, _points: &mut [SeriesPointInfo]) {}
    fn on_trackball_created(&mut self, _points: &[SeriesPointInfo]) {}
}

pub trait SelectionListener {
    fn on_selection_changing(&mut self, _args: &mut SelectionChangingEventArgs) {}
    fn on_selection_changed(&mut self, _args: &SelectionChangedEventArgs) {}
}
