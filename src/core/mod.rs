pub mod axis;
pub mod axis_transform;
pub mod chart_area;
pub mod label_format;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisKind, AxisRole, MIN_ZOOM_FACTOR, ZoomWindow};
pub use chart_area::ChartArea;
pub use series::{
    ChartPoint, ChartSeries, SeriesContext, SeriesId, SeriesPointInfo, XySeries, XySeriesKind,
};
pub use types::{DataPoint, DoubleRange, Point, Rect};
