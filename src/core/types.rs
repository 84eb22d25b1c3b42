use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Data-space sample `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned pixel rectangle, `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds the normalized rectangle spanned by two corners.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self {
            left,
            top,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Half-open intersection: rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(self, other: Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Clamps `point` into this rectangle.
    #[must_use]
    pub fn clamp_point(self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.left, self.right().max(self.left)),
            point.y.clamp(self.top, self.bottom().max(self.top)),
        )
    }
}

/// Closed numeric range with `start <= end` after construction through `new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleRange {
    pub start: f64,
    pub end: f64,
}

impl DoubleRange {
    /// Creates a range, swapping reversed bounds.
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidRange { start, end });
        }
        if start <= end {
            Ok(Self { start, end })
        } else {
            Ok(Self {
                start: end,
                end: start,
            })
        }
    }

    #[must_use]
    pub fn delta(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn inside(self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::{DoubleRange, Point, Rect};

    #[test]
    fn edge_sharing_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(b));
        assert!(a.intersects(Rect::new(5.0, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn from_points_normalizes_corners() {
        let rect = Rect::from_points(Point::new(30.0, 40.0), Point::new(10.0, 5.0));
        assert_eq!(rect, Rect::new(10.0, 5.0, 20.0, 35.0));
    }

    #[test]
    fn range_swaps_reversed_bounds_and_rejects_nan() {
        let range = DoubleRange::new(10.0, 2.0).expect("range");
        assert_eq!((range.start, range.end), (2.0, 10.0));
        assert!(DoubleRange::new(f64::NAN, 1.0).is_err());
    }
}
