use tracing::trace;

use crate::interaction::{GestureStatus, PointerInteractive, TrackballActivationMode};
use crate::render::InteractionLayer;

use super::{ChartGesture, InteractiveChart};

impl<L: InteractionLayer> InteractiveChart<L> {
    /// Routes a decoded gesture to the zoom, trackball and selection behaviors.
    pub fn handle_gesture(&mut self, gesture: ChartGesture) {
        trace!(?gesture, "handle gesture");
        match gesture {
            ChartGesture::Hover(point) => {
                if self.trackball.config().activation_mode == TrackballActivationMode::TouchMove {
                    self.trackball.show(&self.area, point);
                }
            }
            ChartGesture::Exit => self.trackball.hide(),
            ChartGesture::TouchDown(point) => {
                self.zoom.on_touch_down(&mut self.area, point);
                if !self.zoom.is_selection_zooming() {
                    self.trackball.on_touch_down(&mut self.area, point);
                }
            }
            ChartGesture::TouchMove(point) => {
                if self.zoom.is_selection_zooming() {
                    self.zoom.on_touch_move(&mut self.area, point);
                } else {
                    self.trackball.on_touch_move(&mut self.area, point);
                }
            }
            ChartGesture::TouchUp(point) => {
                self.zoom.on_touch_up(&mut self.area, point);
                self.trackball.on_touch_up(&mut self.area, point);
            }
            ChartGesture::Tap(point) => {
                self.select_at(point);
            }
            ChartGesture::DoubleTap(point) => {
                PointerInteractive::on_double_tap(&mut self.zoom, &mut self.area, point);
                self.trackball.refresh(&self.area);
            }
            ChartGesture::LongPress(point) => {
                self.trackball.on_long_press(&mut self.area, point);
            }
            ChartGesture::Pinch {
                status,
                location,
                angle_deg,
                scale,
            } => {
                if status == GestureStatus::Started {
                    self.trackball.hide();
                }
                self.zoom
                    .on_pinch_state_changed(&mut self.area, status, location, angle_deg, scale);
            }
            ChartGesture::MouseWheel { position, delta } => {
                self.zoom.on_mouse_wheel_changed(&mut self.area, position, delta);
                self.trackball.refresh(&self.area);
            }
            ChartGesture::Scroll { translation } => {
                self.zoom.on_scroll_changed(&mut self.area, translation);
                self.trackball.refresh(&self.area);
            }
        }
    }
}
