use super::zoom_config::ZoomMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureDirection {
    Horizontal,
    Vertical,
    Both,
}

/// Classifies a pinch angle (degrees) into ±20° bands around each orientation.
pub(crate) fn resolve_gesture_direction(angle_deg: f64) -> GestureDirection {
    if !angle_deg.is_finite() {
        return GestureDirection::Both;
    }
    let angle = angle_deg.rem_euclid(360.0);
    let within = |low: f64, high: f64| angle >= low && angle <= high;

    if within(340.0, 360.0) || within(0.0, 20.0) || within(160.0, 200.0) {
        GestureDirection::Horizontal
    } else if within(70.0, 110.0) || within(250.0, 290.0) {
        GestureDirection::Vertical
    } else {
        GestureDirection::Both
    }
}

/// Whether an axis with the given orientation may react to a zoom gesture.
pub(crate) fn can_zoom(
    mode: ZoomMode,
    directional_zooming: bool,
    axis_is_vertical: bool,
    angle_deg: Option<f64>,
) -> bool {
    let mode_allows = match mode {
        ZoomMode::X => !axis_is_vertical,
        ZoomMode::Y => axis_is_vertical,
        ZoomMode::XY => true,
    };
    if !mode_allows {
        return false;
    }

    match (mode, directional_zooming, angle_deg) {
        (ZoomMode::XY, true, Some(angle)) => match resolve_gesture_direction(angle) {
            GestureDirection::Horizontal => !axis_is_vertical,
            GestureDirection::Vertical => axis_is_vertical,
            GestureDirection::Both => true,
        },
        _ => true,
    }
}
