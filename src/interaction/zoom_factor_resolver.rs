use crate::core::axis_transform::to_linear;
use crate::core::{Axis, DoubleRange, Rect, ZoomWindow};

/// Cumulative zoom level currently shown by a window (`>= 1`).
pub(crate) fn current_zoom_level(window: ZoomWindow) -> f64 {
    (1.0 / window.factor.clamp(0.0, 1.0)).max(1.0)
}

/// Zooms `current` to `cumulative_level` while keeping `origin` visually fixed.
///
/// `origin` is the normalized pointer location in window space (0 = start).
pub(crate) fn resolve_cumulative_zoom(
    current: ZoomWindow,
    cumulative_level: f64,
    origin: f64,
    maximum_zoom_level: Option<f64>,
) -> Option<ZoomWindow> {
    let level = match maximum_zoom_level {
        Some(max) => cumulative_level.min(max),
        None => cumulative_level,
    };
    if !level.is_finite() || level <= 0.0 || !origin.is_finite() {
        return None;
    }

    let mut factor = (1.0 / level).clamp(0.0, 1.0);
    let position = (current.position + (current.factor - factor) * origin).max(0.0);
    if position + factor > 1.0 {
        factor = 1.0 - position;
    }
    Some(ZoomWindow::clamped(factor, position))
}

/// Window showing exactly `[start, end]` of `actual`, or `None` when the
/// request lies fully outside it.
pub(crate) fn resolve_range_zoom(actual: DoubleRange, start: f64, end: f64) -> Option<ZoomWindow> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    if end < actual.start || start > actual.end {
        return None;
    }

    let delta = actual.delta();
    if delta <= 0.0 {
        return None;
    }
    let start = start.max(actual.start);
    let end = end.min(actual.end);
    let position = (start - actual.start) / delta;
    let factor = (end - start) / delta;
    Some(ZoomWindow::clamped(factor, position))
}

/// Same as [`resolve_range_zoom`] with raw values mapped into the axis' linear space.
pub(crate) fn resolve_axis_range_zoom(axis: &Axis, start: f64, end: f64) -> Option<ZoomWindow> {
    resolve_range_zoom(axis.actual_range(), to_linear(axis, start), to_linear(axis, end))
}

/// Zoom position after dragging the plot content by `translation_px`.
///
/// Dragging content towards the axis end reveals values before the window, so
/// horizontal axes move backwards on positive deltas and vertical axes (whose
/// pixels grow downwards) move forwards; inversion flips both.
pub(crate) fn resolve_pan_position(
    current: ZoomWindow,
    translation_px: f64,
    span_px: f64,
    is_vertical: bool,
    is_inversed: bool,
) -> Option<f64> {
    if !translation_px.is_finite() || !span_px.is_finite() || span_px <= 0.0 {
        return None;
    }
    let delta = translation_px / span_px * current.factor;
    let forward = is_vertical != is_inversed;
    let position = if forward {
        current.position + delta
    } else {
        current.position - delta
    };
    Some(position.clamp(0.0, 1.0 - current.factor))
}

/// Raises `window.factor` to `1 / maximum_zoom_level` when it zooms in further,
/// keeping the window start and the range invariant.
pub(crate) fn limit_zoom_window(
    window: ZoomWindow,
    maximum_zoom_level: Option<f64>,
) -> ZoomWindow {
    match maximum_zoom_level {
        Some(level) if window.factor < 1.0 / level => {
            ZoomWindow::clamped(1.0 / level, window.position)
        }
        _ => window,
    }
}

/// Window after zooming into a drag-selection rectangle.
pub(crate) fn resolve_selection_zoom(axis: &Axis, selection: Rect) -> Option<ZoomWindow> {
    let span = axis.span_px();
    if span <= 0.0 {
        return None;
    }
    let current = axis.zoom_window();
    let rect = axis.arrange_rect();
    let (offset_start, _) = axis.plot_offsets();

    let (offset_px, selection_span) = if axis.is_vertical() {
        let axis_bottom = rect.bottom() - offset_start;
        let axis_top = axis_bottom - span;
        let offset = if axis.is_inversed() {
            selection.top - axis_top
        } else {
            axis_bottom - selection.bottom()
        };
        (offset, selection.height)
    } else {
        let axis_left = rect.left + offset_start;
        let axis_right = axis_left + span;
        let offset = if axis.is_inversed() {
            axis_right - selection.right()
        } else {
            selection.left - axis_left
        };
        (offset, selection.width)
    };

    let position = current.position + offset_px / span * current.factor;
    let factor = current.factor * (selection_span / span);
    Some(ZoomWindow::clamped(factor, position))
}
