use indexmap::IndexMap;
use tracing::debug;

use crate::core::axis::{Axis, AxisRole};
use crate::core::series::{ChartSeries, SeriesContext, SeriesId};
use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};

/// Axes and series of one Cartesian chart, shared by every interaction behavior.
///
/// Axes keep registration order; that order drives trackball iteration and
/// snapshot output.
pub struct ChartArea {
    plot_bounds: Rect,
    transposed: bool,
    axes: IndexMap<String, Axis>,
    series: Vec<Box<dyn ChartSeries>>,
}

impl std::fmt::Debug for ChartArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartArea")
            .field("plot_bounds", &self.plot_bounds)
            .field("transposed", &self.transposed)
            .field("axes", &self.axes.keys().collect::<Vec<_>>())
            .field("series_len", &self.series.len())
            .finish()
    }
}

impl ChartArea {
    #[must_use]
    pub fn new(plot_bounds: Rect) -> Self {
        Self {
            plot_bounds,
            transposed: false,
            axes: IndexMap::new(),
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn plot_bounds(&self) -> Rect {
        self.plot_bounds
    }

    /// Resizes the plot area; every axis is re-arranged onto the new bounds.
    pub fn set_plot_bounds(&mut self, bounds: Rect) {
        self.plot_bounds = bounds;
        for axis in self.axes.values_mut() {
            axis.set_arrange_rect(bounds);
        }
    }

    #[must_use]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Swaps horizontal/vertical roles of x and y axes.
    pub fn set_transposed(&mut self, transposed: bool) {
        self.transposed = transposed;
        for axis in self.axes.values_mut() {
            axis.set_vertical(is_vertical_for(axis.role(), transposed));
        }
    }

    /// Adds or replaces an axis; its arrange rectangle follows the plot bounds.
    pub fn add_axis(&mut self, mut axis: Axis) {
        axis.set_vertical(is_vertical_for(axis.role(), self.transposed));
        axis.set_arrange_rect(self.plot_bounds);
        if let Some(previous) = self.axes.get(axis.name()) {
            for id in previous.registered_series() {
                axis.register_series(*id);
            }
        }
        debug!(axis = axis.name(), role = ?axis.role(), "add axis");
        self.axes.insert(axis.name().to_owned(), axis);
    }

    /// Registers a series on its x and y axes; both must already exist.
    pub fn add_series(&mut self, series: Box<dyn ChartSeries>) -> ChartResult<()> {
        for name in [series.x_axis(), series.y_axis()] {
            if !self.axes.contains_key(name) {
                return Err(ChartError::UnknownAxis(name.to_owned()));
            }
        }
        if self.series.iter().any(|existing| existing.id() == series.id()) {
            return Err(ChartError::InvalidData(format!(
                "series id {} is already registered",
                series.id().0
            )));
        }

        let id = series.id();
        for name in [series.x_axis().to_owned(), series.y_axis().to_owned()] {
            if let Some(axis) = self.axes.get_mut(&name) {
                axis.register_series(id);
            }
        }
        debug!(series = id.0, name = series.name(), "add series");
        self.series.push(series);
        Ok(())
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<Box<dyn ChartSeries>> {
        let position = self.series.iter().position(|series| series.id() == id)?;
        for axis in self.axes.values_mut() {
            axis.unregister_series(id);
        }
        Some(self.series.remove(position))
    }

    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    pub(crate) fn axis_mut(&mut self, name: &str) -> Option<&mut Axis> {
        self.axes.get_mut(name)
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    #[must_use]
    pub fn axis_names(&self) -> Vec<String> {
        self.axes.keys().cloned().collect()
    }

    pub fn x_axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values().filter(|axis| axis.role() == AxisRole::X)
    }

    #[must_use]
    pub fn series(&self) -> &[Box<dyn ChartSeries>] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: SeriesId) -> Option<&dyn ChartSeries> {
        self.series
            .iter()
            .find(|series| series.id() == id)
            .map(|series| series.as_ref())
    }

    #[must_use]
    pub fn series_index(&self, id: SeriesId) -> Option<usize> {
        self.series.iter().position(|series| series.id() == id)
    }

    #[must_use]
    pub fn series_context<'a>(&'a self, series: &dyn ChartSeries) -> Option<SeriesContext<'a>> {
        Some(SeriesContext {
            x_axis: self.axes.get(series.x_axis())?,
            y_axis: self.axes.get(series.y_axis())?,
        })
    }
}

fn is_vertical_for(role: AxisRole, transposed: bool) -> bool {
    match role {
        AxisRole::X => transposed,
        AxisRole::Y => !transposed,
    }
}
