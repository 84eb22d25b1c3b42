use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Rect, SeriesPointInfo};

/// Minimum gap between stacked trackball labels.
pub const LABEL_SPACING_PX: f64 = 4.0;

/// One-dimensional view of label rectangles along the stacking direction
/// (y normally, x on transposed charts).
#[derive(Debug, Clone, Copy)]
struct StackAxis {
    transposed: bool,
}

impl StackAxis {
    fn start(self, rect: Rect) -> f64 {
        if self.transposed { rect.left } else { rect.top }
    }

    fn length(self, rect: Rect) -> f64 {
        if self.transposed {
            rect.width
        } else {
            rect.height
        }
    }

    fn end(self, rect: Rect) -> f64 {
        self.start(rect) + self.length(rect)
    }

    fn set_start(self, rect: &mut Rect, start: f64) {
        if self.transposed {
            rect.left = start;
        } else {
            rect.top = start;
        }
    }

    fn bounds(self, plot: Rect) -> (f64, f64) {
        if self.transposed {
            (plot.left, plot.right())
        } else {
            (plot.top, plot.bottom())
        }
    }

    fn pixel(self, point: &SeriesPointInfo) -> f64 {
        if self.transposed { point.x } else { point.y }
    }
}

/// De-overlaps floating trackball labels by stacking them along the axis
/// perpendicular to the independent axis.
///
/// Points are ordered by their perpendicular pixel coordinate (stable, so ties
/// keep iteration order) and points outside `plot` are dropped. Runs of
/// overlapping labels are spread evenly around their common centre with
/// `spacing` between them; a stack that runs past the trailing plot edge is
/// reflowed backwards from that edge.
pub fn smart_label_alignment(
    points: &mut Vec<SeriesPointInfo>,
    plot: Rect,
    transposed: bool,
    spacing: f64,
) {
    let stack = StackAxis { transposed };
    points.retain(|point| plot.contains(point.pixel()));
    points.sort_by_key(|point| OrderedFloat(stack.pixel(point)));
    if points.is_empty() {
        return;
    }

    let groups = intersected_groups(points);
    let (leading, trailing) = stack.bounds(plot);
    let mut previous_end: Option<f64> = None;

    for group in groups {
        let members = &mut points[group.clone()];
        if members.len() >= 2 {
            let total = members
                .iter()
                .map(|point| stack.length(point.target_rect))
                .sum::<f64>()
                + (members.len() - 1) as f64 * spacing;
            let first = stack.start(members[0].target_rect);
            let last = members
                .iter()
                .map(|point| stack.end(point.target_rect))
                .fold(first, f64::max);
            let centre = (first + last) * 0.5;

            let mut cursor = (centre - total * 0.5).max(leading);
            for point in members.iter_mut() {
                stack.set_start(&mut point.target_rect, cursor);
                cursor += stack.length(point.target_rect) + spacing;
            }
        }

        for point in members.iter_mut() {
            let start = stack.start(point.target_rect);
            if let Some(end) = previous_end {
                if start < end + spacing {
                    stack.set_start(&mut point.target_rect, end + spacing);
                }
            }
            previous_end = Some(stack.end(point.target_rect));
        }

        if previous_end.is_some_and(|end| end > trailing) {
            reflow_from_trailing_edge(&mut points[..group.end], stack, trailing, spacing);
            previous_end = points[..group.end]
                .last()
                .map(|point| stack.end(point.target_rect));
        }
    }
}

/// Maximal runs of consecutive labels whose rectangles intersect.
fn intersected_groups(points: &[SeriesPointInfo]) -> SmallVec<[std::ops::Range<usize>; 4]> {
    let mut groups = SmallVec::new();
    let mut start = 0;
    for index in 1..points.len() {
        if !points[index]
            .target_rect
            .intersects(points[index - 1].target_rect)
        {
            groups.push(start..index);
            start = index;
        }
    }
    groups.push(start..points.len());
    groups
}

fn reflow_from_trailing_edge(
    points: &mut [SeriesPointInfo],
    stack: StackAxis,
    trailing: f64,
    spacing: f64,
) {
    let mut limit = trailing;
    for point in points.iter_mut().rev() {
        let start = stack
            .start(point.target_rect)
            .min(limit - stack.length(point.target_rect));
        stack.set_start(&mut point.target_rect, start);
        limit = start - spacing;
    }
}
