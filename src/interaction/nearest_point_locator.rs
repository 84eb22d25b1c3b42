use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::axis_transform::value_to_point;
use crate::core::{ChartArea, Point, SeriesPointInfo};

use super::trackball_config::TrackballDisplayMode;

fn primary(point: &SeriesPointInfo, transposed: bool) -> f64 {
    if transposed { point.y } else { point.x }
}

fn perpendicular(point: &SeriesPointInfo, transposed: bool) -> f64 {
    if transposed { point.x } else { point.y }
}

/// Keeps only the candidates sharing the pixel coordinate nearest to the
/// pointer along the independent axis, returning that coordinate.
///
/// A candidate replaces the running best when it is strictly closer, or when
/// its signed delta equals the best's signed delta exactly; overlapping series
/// at the same x therefore all survive.
pub fn find_least_x_value(
    points: &mut Vec<SeriesPointInfo>,
    pointer: Point,
    transposed: bool,
) -> Option<f64> {
    let pointer_coordinate = if transposed { pointer.y } else { pointer.x };
    let mut best: Option<(f64, f64)> = None;

    for point in points.iter() {
        let coordinate = primary(point, transposed);
        let delta = pointer_coordinate - coordinate;
        match best {
            Some((best_delta, _)) if delta.abs() < best_delta.abs() || delta == best_delta => {
                best = Some((delta, coordinate));
            }
            None => best = Some((delta, coordinate)),
            Some(_) => {}
        }
    }

    let (_, least) = best?;
    points.retain(|point| primary(point, transposed) == least);
    Some(least)
}

/// Prunes candidates the pointer is not actually over.
///
/// Side-by-side points survive only when the pointer lies inside their pixel
/// band. Outside `FloatAllPoints`, points whose perpendicular coordinate is not
/// the nearest one to the pointer are dropped as well, using midpoints between
/// neighbouring coordinates as boundaries.
pub fn validate_for_all_series(
    area: &ChartArea,
    points: &mut Vec<SeriesPointInfo>,
    pointer: Point,
    mode: TrackballDisplayMode,
) {
    let transposed = area.is_transposed();
    let pointer_primary = if transposed { pointer.y } else { pointer.x };

    points.retain(|point| {
        let (Some(band), true) = (point.sbs_info, point.is_side_by_side) else {
            return true;
        };
        let Some(axis) = area.axis(&point.x_axis) else {
            return true;
        };
        let a = value_to_point(axis, point.x_value + band.start);
        let b = value_to_point(axis, point.x_value + band.end);
        pointer_primary >= a.min(b) && pointer_primary <= a.max(b)
    });

    if mode == TrackballDisplayMode::FloatAllPoints || points.len() < 2 {
        return;
    }

    points.sort_by_key(|point| OrderedFloat(perpendicular(point, transposed)));
    let mut coordinates: SmallVec<[f64; 8]> = points
        .iter()
        .map(|point| perpendicular(point, transposed))
        .collect();
    coordinates.dedup();

    let pointer_perpendicular = if transposed { pointer.x } else { pointer.y };
    points.retain(|point| {
        let coordinate = perpendicular(point, transposed);
        let Ok(slot) = coordinates.binary_search_by_key(&OrderedFloat(coordinate), |value| {
            OrderedFloat(*value)
        }) else {
            return false;
        };
        let lower = match slot.checked_sub(1) {
            Some(previous) => (coordinates[previous] + coordinate) * 0.5,
            None => f64::NEG_INFINITY,
        };
        let upper = match coordinates.get(slot + 1) {
            Some(next) => (coordinate + next) * 0.5,
            None => f64::INFINITY,
        };
        pointer_perpendicular >= lower && pointer_perpendicular <= upper
    });
}
