use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Axis, ChartArea, ChartSeries, Rect, SeriesId};
use crate::error::ChartResult;
use crate::interaction::{
    AxisZoomController, DataPointSelectionTarget, SelectionBehavior, SeriesSelectionTarget,
    TrackballEngine,
};
use crate::render::InteractionLayer;

use super::InteractionConfig;

/// Main interaction facade consumed by host applications.
///
/// `InteractiveChart` owns the chart area and composes the zoom/pan,
/// trackball and selection behaviors over it. Decoded gestures enter through
/// [`InteractiveChart::handle_gesture`].
pub struct InteractiveChart<L: InteractionLayer> {
    pub(super) area: ChartArea,
    pub(super) config: InteractionConfig,
    pub(super) zoom: AxisZoomController,
    pub(super) trackball: TrackballEngine<L>,
    pub(super) series_selection: SelectionBehavior<SeriesSelectionTarget>,
    pub(super) point_selections: IndexMap<SeriesId, SelectionBehavior<DataPointSelectionTarget>>,
}

impl<L: InteractionLayer> InteractiveChart<L> {
    pub fn new(layer: L, plot_bounds: Rect, config: InteractionConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut area = ChartArea::new(plot_bounds);
        area.set_transposed(config.transposed);
        Ok(Self {
            area,
            config,
            zoom: AxisZoomController::new(config.zoom_pan)?,
            trackball: TrackballEngine::new(layer, config.trackball)?,
            series_selection: SelectionBehavior::new(
                SeriesSelectionTarget::new(),
                config.selection,
            )?,
            point_selections: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn area(&self) -> &ChartArea {
        &self.area
    }

    #[must_use]
    pub fn config(&self) -> InteractionConfig {
        self.config
    }

    #[must_use]
    pub fn plot_bounds(&self) -> Rect {
        self.area.plot_bounds()
    }

    /// Resizes the plot; a visible trackball is regenerated against the new layout.
    pub fn set_plot_bounds(&mut self, bounds: Rect) {
        self.area.set_plot_bounds(bounds);
        self.trackball.refresh(&self.area);
    }

    pub fn set_transposed(&mut self, transposed: bool) {
        if self.area.is_transposed() == transposed {
            return;
        }
        self.config.transposed = transposed;
        self.area.set_transposed(transposed);
        self.trackball.hide();
    }

    pub fn add_axis(&mut self, axis: Axis) {
        self.area.add_axis(axis);
    }

    /// Registers a series and gives it its own data point selection.
    pub fn add_series(&mut self, series: Box<dyn ChartSeries>) -> ChartResult<()> {
        let id = series.id();
        self.area.add_series(series)?;
        self.point_selections.insert(
            id,
            SelectionBehavior::new(DataPointSelectionTarget::new(id), self.config.selection)?,
        );
        debug!(series = id.0, "interactive chart series added");
        Ok(())
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<Box<dyn ChartSeries>> {
        let removed = self.area.remove_series(id)?;
        self.point_selections.shift_remove(&id);
        self.trackball.hide();
        Some(removed)
    }

    #[must_use]
    pub fn zoom_controller(&self) -> &AxisZoomController {
        &self.zoom
    }

    #[must_use]
    pub fn trackball(&self) -> &TrackballEngine<L> {
        &self.trackball
    }

    pub fn trackball_mut(&mut self) -> &mut TrackballEngine<L> {
        &mut self.trackball
    }

    #[must_use]
    pub fn layer(&self) -> &L {
        self.trackball.layer()
    }

    #[must_use]
    pub fn series_selection(&self) -> &SelectionBehavior<SeriesSelectionTarget> {
        &self.series_selection
    }

    #[must_use]
    pub fn point_selection(
        &self,
        series: SeriesId,
    ) -> Option<&SelectionBehavior<DataPointSelectionTarget>> {
        self.point_selections.get(&series)
    }
}
