use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis::Axis;
use crate::core::axis_transform::{from_linear, point_to_value, to_linear, value_to_point};
use crate::core::label_format::format_axis_value;
use crate::core::types::{DataPoint, DoubleRange, Point, Rect};
use crate::render::{LabelStyle, MarkerStyle};

/// Stable identity of a series inside one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub u32);

/// Data point returned by a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Axes a series is plotted against, resolved by the chart area.
#[derive(Debug, Clone, Copy)]
pub struct SeriesContext<'a> {
    pub x_axis: &'a Axis,
    pub y_axis: &'a Axis,
}

impl SeriesContext<'_> {
    /// `true` when the independent axis runs vertically.
    #[must_use]
    pub fn is_transposed(&self) -> bool {
        self.x_axis.is_vertical()
    }

    /// Pixel position of a data sample.
    #[must_use]
    pub fn transform(&self, x: f64, y: f64) -> Point {
        let along_x = value_to_point(self.x_axis, x);
        let along_y = value_to_point(self.y_axis, y);
        if self.is_transposed() {
            Point::new(along_y, along_x)
        } else {
            Point::new(along_x, along_y)
        }
    }

    /// Pointer coordinate along the independent axis.
    #[must_use]
    pub fn primary_coordinate(&self, pointer: Point) -> f64 {
        if self.is_transposed() {
            pointer.y
        } else {
            pointer.x
        }
    }

    #[must_use]
    pub fn pointer_to_x_value(&self, pointer: Point) -> f64 {
        point_to_value(self.x_axis, self.primary_coordinate(pointer))
    }
}

/// Per-series trackball readout for one activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPointInfo {
    pub series: SeriesId,
    pub data_index: usize,
    pub x_axis: String,
    pub y_axis: String,
    pub x_value: f64,
    pub y_value: f64,
    /// Pixel position of the data point.
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub label_style: Option<LabelStyle>,
    pub marker_style: Option<MarkerStyle>,
    /// Label placement rectangle, resolved by the trackball.
    pub target_rect: Rect,
    pub is_side_by_side: bool,
    /// Side-by-side offset band in x-value units.
    pub sbs_info: Option<DoubleRange>,
}

impl SeriesPointInfo {
    #[must_use]
    pub fn pixel(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Contract the interaction core consumes from series implementations.
///
/// Geometry and hit-testing are black boxes; the core only asks for nearest
/// points, trackball readouts and boolean hit results.
pub trait ChartSeries {
    fn id(&self) -> SeriesId;
    fn name(&self) -> &str;
    fn x_axis(&self) -> &str;
    fn y_axis(&self) -> &str;

    fn is_visible(&self) -> bool {
        true
    }

    fn show_trackball_info(&self) -> bool {
        true
    }

    /// Bar-like series whose points occupy a per-series sub-band of each slot.
    fn is_side_by_side(&self) -> bool {
        false
    }

    fn sbs_info(&self) -> Option<DoubleRange> {
        None
    }

    fn side_by_side_index(&self) -> usize {
        0
    }

    fn find_nearest_chart_points(
        &self,
        ctx: &SeriesContext<'_>,
        pointer: Point,
    ) -> Vec<ChartPoint>;

    fn trackball_label(&self, ctx: &SeriesContext<'_>, point: &ChartPoint) -> String {
        format!("{}: {}", self.name(), format_axis_value(ctx.y_axis, point.y))
    }

    fn generate_trackball_point_info(
        &self,
        ctx: &SeriesContext<'_>,
        points: &[ChartPoint],
        target: &mut Vec<SeriesPointInfo>,
        is_side_by_side: &mut bool,
    ) {
        for point in points {
            let pixel = ctx.transform(point.x, point.y);
            if !pixel.x.is_finite() || !pixel.y.is_finite() {
                continue;
            }
            target.push(SeriesPointInfo {
                series: self.id(),
                data_index: point.index,
                x_axis: ctx.x_axis.name().to_owned(),
                y_axis: ctx.y_axis.name().to_owned(),
                x_value: point.x,
                y_value: point.y,
                x: pixel.x,
                y: pixel.y,
                label: self.trackball_label(ctx, point),
                label_style: None,
                marker_style: None,
                target_rect: Rect::default(),
                is_side_by_side: self.is_side_by_side(),
                sbs_info: self.sbs_info(),
            });
            if self.is_side_by_side() {
                *is_side_by_side = true;
            }
        }
    }

    /// Number of selectable segments (one per data point for point selection).
    fn segment_count(&self) -> usize;

    fn hit_test_segment(&self, ctx: &SeriesContext<'_>, index: usize, point: Point) -> bool;

    fn hit_test(&self, ctx: &SeriesContext<'_>, point: Point) -> bool {
        (0..self.segment_count()).any(|index| self.hit_test_segment(ctx, index, point))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum XySeriesKind {
    /// Continuous series; segments are hit within `hit_radius_px` of a point.
    Line { hit_radius_px: f64 },
    /// Side-by-side bars occupying `sbs_info` around each x value.
    Column { sbs_info: DoubleRange },
}

/// Reference series over `(x, y)` samples, line-like or column-like.
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    id: SeriesId,
    name: String,
    x_axis: String,
    y_axis: String,
    kind: XySeriesKind,
    points: Vec<DataPoint>,
    visible: bool,
    show_trackball_info: bool,
    side_by_side_index: usize,
}

impl XySeries {
    #[must_use]
    pub fn line(
        id: SeriesId,
        name: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
        points: Vec<DataPoint>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            kind: XySeriesKind::Line { hit_radius_px: 6.0 },
            points,
            visible: true,
            show_trackball_info: true,
            side_by_side_index: 0,
        }
    }

    /// Column series occupying slot `index` of `count` within `total_width`
    /// x-value units around each sample.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn column(
        id: SeriesId,
        name: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
        points: Vec<DataPoint>,
        index: usize,
        count: usize,
        total_width: f64,
    ) -> Self {
        let count = count.max(1);
        let slot = total_width / count as f64;
        let start = -0.5 * total_width + index as f64 * slot;
        let mut series = Self::line(id, name, x_axis, y_axis, points);
        series.kind = XySeriesKind::Column {
            sbs_info: DoubleRange {
                start,
                end: start + slot,
            },
        };
        series.side_by_side_index = index;
        series
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_trackball_info(mut self, show: bool) -> Self {
        self.show_trackball_info = show;
        self
    }

    #[must_use]
    pub fn kind(&self) -> XySeriesKind {
        self.kind
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    fn column_rect(&self, ctx: &SeriesContext<'_>, sample: DataPoint, band: DoubleRange) -> Rect {
        let linear_start = ctx.y_axis.actual_range().start;
        let baseline = from_linear(ctx.y_axis, linear_start.max(to_linear(ctx.y_axis, 0.0)));
        let a = ctx.transform(sample.x + band.start, baseline);
        let b = ctx.transform(sample.x + band.end, sample.y);
        Rect::from_points(a, b)
    }
}

impl ChartSeries for XySeries {
    fn id(&self) -> SeriesId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn x_axis(&self) -> &str {
        &self.x_axis
    }

    fn y_axis(&self) -> &str {
        &self.y_axis
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show_trackball_info(&self) -> bool {
        self.show_trackball_info
    }

    fn is_side_by_side(&self) -> bool {
        matches!(self.kind, XySeriesKind::Column { .. })
    }

    fn sbs_info(&self) -> Option<DoubleRange> {
        match self.kind {
            XySeriesKind::Column { sbs_info } => Some(sbs_info),
            XySeriesKind::Line { .. } => None,
        }
    }

    fn side_by_side_index(&self) -> usize {
        self.side_by_side_index
    }

    fn find_nearest_chart_points(
        &self,
        ctx: &SeriesContext<'_>,
        pointer: Point,
    ) -> Vec<ChartPoint> {
        let pointer_coordinate = ctx.primary_coordinate(pointer);
        let mut best: Option<OrderedFloat<f64>> = None;
        let mut nearest: SmallVec<[ChartPoint; 2]> = SmallVec::new();

        for (index, sample) in self.points.iter().enumerate() {
            if !sample.is_finite() {
                continue;
            }
            let coordinate = value_to_point(ctx.x_axis, sample.x);
            if !coordinate.is_finite() {
                continue;
            }
            let distance = OrderedFloat((coordinate - pointer_coordinate).abs());
            let point = ChartPoint {
                index,
                x: sample.x,
                y: sample.y,
            };
            match best {
                Some(current) if distance > current => {}
                Some(current) if distance == current => nearest.push(point),
                _ => {
                    best = Some(distance);
                    nearest.clear();
                    nearest.push(point);
                }
            }
        }
        nearest.into_vec()
    }

    fn segment_count(&self) -> usize {
        self.points.len()
    }

    fn hit_test_segment(&self, ctx: &SeriesContext<'_>, index: usize, point: Point) -> bool {
        let Some(sample) = self.points.get(index).copied() else {
            return false;
        };
        if !sample.is_finite() {
            return false;
        }
        match self.kind {
            XySeriesKind::Line { hit_radius_px } => {
                let pixel = ctx.transform(sample.x, sample.y);
                let dx = pixel.x - point.x;
                let dy = pixel.y - point.y;
                dx * dx + dy * dy <= hit_radius_px * hit_radius_px
            }
            XySeriesKind::Column { sbs_info } => {
                self.column_rect(ctx, sample, sbs_info).contains(point)
            }
        }
    }
}
