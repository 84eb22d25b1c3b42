//! Value ↔ pixel mapping for one axis.
//!
//! All functions are pure over the axis' zoom window, inversion, plot offsets
//! and arrange rectangle. Values outside the visible window map linearly
//! outside the visible pixel span; clipping is the caller's concern.

use crate::core::axis::{Axis, AxisKind};
use crate::core::types::Point;

/// Converts a raw data value into the axis' linear space.
#[must_use]
pub fn to_linear(axis: &Axis, value: f64) -> f64 {
    match axis.kind() {
        AxisKind::Logarithmic { base } => value.log(base),
        _ => value,
    }
}

/// Inverse of [`to_linear`].
#[must_use]
pub fn from_linear(axis: &Axis, value: f64) -> f64 {
    match axis.kind() {
        AxisKind::Logarithmic { base } => base.powf(value),
        _ => value,
    }
}

/// Normalized position of a linear-space value inside the visible window.
///
/// `0` is the axis start (left, or bottom for vertical axes) and `1` its end,
/// with inversion already applied.
#[must_use]
pub fn value_to_coefficient(axis: &Axis, linear_value: f64) -> f64 {
    let visible = axis.visible_range();
    let delta = visible.delta();
    if delta == 0.0 {
        return 0.0;
    }
    let coefficient = (linear_value - visible.start) / delta;
    if axis.is_inversed() {
        1.0 - coefficient
    } else {
        coefficient
    }
}

#[must_use]
pub fn coefficient_to_value(axis: &Axis, coefficient: f64) -> f64 {
    let coefficient = if axis.is_inversed() {
        1.0 - coefficient
    } else {
        coefficient
    };
    let visible = axis.visible_range();
    visible.start + coefficient * visible.delta()
}

/// Maps a raw data value to a pixel coordinate along the axis.
#[must_use]
pub fn value_to_point(axis: &Axis, value: f64) -> f64 {
    let coefficient = value_to_coefficient(axis, to_linear(axis, value));
    coefficient_to_point(axis, coefficient)
}

/// Maps a pixel coordinate along the axis back to a raw data value.
#[must_use]
pub fn point_to_value(axis: &Axis, pixel: f64) -> f64 {
    from_linear(axis, coefficient_to_value(axis, point_to_coefficient(axis, pixel)))
}

#[must_use]
pub fn coefficient_to_point(axis: &Axis, coefficient: f64) -> f64 {
    let rect = axis.arrange_rect();
    let (offset_start, _) = axis.plot_offsets();
    let span = axis.span_px();
    if axis.is_vertical() {
        rect.bottom() - offset_start - coefficient * span
    } else {
        rect.left + offset_start + coefficient * span
    }
}

#[must_use]
pub fn point_to_coefficient(axis: &Axis, pixel: f64) -> f64 {
    let span = axis.span_px();
    if span <= 0.0 {
        return 0.0;
    }
    let rect = axis.arrange_rect();
    let (offset_start, _) = axis.plot_offsets();
    if axis.is_vertical() {
        (rect.bottom() - offset_start - pixel) / span
    } else {
        (pixel - rect.left - offset_start) / span
    }
}

/// Pointer location along the axis as a zoom origin in `[0, 1]`.
///
/// The origin is expressed in zoom-window space (`0` = window start), so an
/// inversed axis reports `1 - coefficient`.
#[must_use]
pub fn zoom_origin(axis: &Axis, pointer: Point) -> f64 {
    let pixel = if axis.is_vertical() {
        pointer.y
    } else {
        pointer.x
    };
    let coefficient = point_to_coefficient(axis, pixel).clamp(0.0, 1.0);
    if axis.is_inversed() {
        1.0 - coefficient
    } else {
        coefficient
    }
}
