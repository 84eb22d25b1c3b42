use indexmap::IndexMap;

use crate::core::{ChartArea, Point, SeriesId};
use crate::render::Color;

/// What a selection behavior selects and how selected items are highlighted.
pub trait SelectionTarget {
    fn selectable_count(&self, area: &ChartArea) -> usize;

    /// Index of the selectable item under `point`, if any.
    fn index_at(&self, area: &ChartArea, point: Point) -> Option<usize>;

    /// Whether there is rendered state a clear could act on.
    fn can_clear(&self, area: &ChartArea) -> bool;

    fn apply_highlight(&mut self, index: usize, brush: Color);

    fn clear_highlight(&mut self, index: usize);

    /// Highlighted indexes with their brushes, in highlight order.
    fn highlighted(&self) -> &IndexMap<usize, Color>;
}

/// Selects data points (segments) of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPointSelectionTarget {
    series: SeriesId,
    highlighted: IndexMap<usize, Color>,
}

impl DataPointSelectionTarget {
    #[must_use]
    pub fn new(series: SeriesId) -> Self {
        Self {
            series,
            highlighted: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn series(&self) -> SeriesId {
        self.series
    }
}

impl SelectionTarget for DataPointSelectionTarget {
    fn selectable_count(&self, area: &ChartArea) -> usize {
        area.series_by_id(self.series)
            .map_or(0, |series| series.segment_count())
    }

    fn index_at(&self, area: &ChartArea, point: Point) -> Option<usize> {
        let series = area.series_by_id(self.series)?;
        if !series.is_visible() {
            return None;
        }
        let ctx = area.series_context(series)?;
        (0..series.segment_count()).find(|index| series.hit_test_segment(&ctx, *index, point))
    }

    fn can_clear(&self, area: &ChartArea) -> bool {
        self.selectable_count(area) > 0
    }

    fn apply_highlight(&mut self, index: usize, brush: Color) {
        self.highlighted.insert(index, brush);
    }

    fn clear_highlight(&mut self, index: usize) {
        self.highlighted.shift_remove(&index);
    }

    fn highlighted(&self) -> &IndexMap<usize, Color> {
        &self.highlighted
    }
}

/// Selects whole series of the chart, indexed in series order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSelectionTarget {
    highlighted: IndexMap<usize, Color>,
}

impl SeriesSelectionTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionTarget for SeriesSelectionTarget {
    fn selectable_count(&self, area: &ChartArea) -> usize {
        area.series().len()
    }

    fn index_at(&self, area: &ChartArea, point: Point) -> Option<usize> {
        // Later series paint on top.
        area.series()
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, series)| series.is_visible())
            .find(|(_, series)| {
                area.series_context(series.as_ref())
                    .is_some_and(|ctx| series.hit_test(&ctx, point))
            })
            .map(|(index, _)| index)
    }

    fn can_clear(&self, area: &ChartArea) -> bool {
        !area.series().is_empty()
    }

    fn apply_highlight(&mut self, index: usize, brush: Color) {
        self.highlighted.insert(index, brush);
    }

    fn clear_highlight(&mut self, index: usize) {
        self.highlighted.shift_remove(&index);
    }

    fn highlighted(&self) -> &IndexMap<usize, Color> {
        &self.highlighted
    }
}
