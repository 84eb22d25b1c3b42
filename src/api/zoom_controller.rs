use chrono::{DateTime, Utc};

use crate::error::ChartResult;
use crate::interaction::{ZoomPanConfig, events::ZoomPanListener};
use crate::render::InteractionLayer;

use super::InteractiveChart;

impl<L: InteractionLayer> InteractiveChart<L> {
    #[must_use]
    pub fn zoom_pan_config(&self) -> ZoomPanConfig {
        self.zoom.config()
    }

    pub fn set_zoom_pan_config(&mut self, config: ZoomPanConfig) -> ChartResult<()> {
        self.zoom.set_config(config)?;
        self.config.zoom_pan = config;
        Ok(())
    }

    pub fn add_zoom_pan_listener(&mut self, listener: Box<dyn ZoomPanListener>) {
        self.zoom.add_listener(listener);
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in(&mut self.area);
        self.trackball.refresh(&self.area);
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out(&mut self.area);
        self.trackball.refresh(&self.area);
    }

    /// Zooms `axis` by a cumulative level around a normalized origin.
    pub fn zoom(&mut self, axis: &str, cumulative_level: f64, origin: f64) -> bool {
        let changed = self.zoom.zoom(&mut self.area, axis, cumulative_level, origin);
        self.trackball.refresh(&self.area);
        changed
    }

    pub fn zoom_by_range(&mut self, axis: &str, start: f64, end: f64) -> bool {
        let changed = self.zoom.zoom_by_range(&mut self.area, axis, start, end);
        self.trackball.refresh(&self.area);
        changed
    }

    pub fn zoom_by_date_range(
        &mut self,
        axis: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        let changed = self.zoom.zoom_by_date_range(&mut self.area, axis, start, end);
        self.trackball.refresh(&self.area);
        changed
    }

    pub fn zoom_to_factor_on(&mut self, axis: &str, position: f64, factor: f64) -> bool {
        let changed = self
            .zoom
            .zoom_to_factor_on(&mut self.area, axis, position, factor);
        self.trackball.refresh(&self.area);
        changed
    }

    pub fn zoom_to_factor(&mut self, factor: f64) {
        self.zoom.zoom_to_factor(&mut self.area, factor);
        self.trackball.refresh(&self.area);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset(&mut self.area);
        self.trackball.refresh(&self.area);
    }
}
