use approx::assert_abs_diff_eq;
use chart_interaction::api::SelectionScope;
use chart_interaction::core::{Axis, AxisRole, DataPoint, Point, Rect, SeriesId, XySeries};
use chart_interaction::interaction::{
    GestureStatus, SelectionConfig, SelectionType, TrackballActivationMode, TrackballConfig,
    TrackballDisplayMode, ZoomMode, ZoomPanConfig,
};
use chart_interaction::render::RecordingLayer;
use chart_interaction::{ChartError, ChartGesture, InteractionConfig, InteractiveChart};

fn chart(config: InteractionConfig) -> InteractiveChart<RecordingLayer> {
    let mut chart = InteractiveChart::new(
        RecordingLayer::default(),
        Rect::new(0.0, 0.0, 1000.0, 500.0),
        config,
    )
    .expect("chart");
    chart.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    chart.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    let points = (0..10).map(|i| DataPoint::new(i as f64, 50.0)).collect();
    chart
        .add_series(Box::new(XySeries::line(SeriesId(1), "s", "x", "y", points)))
        .expect("series");
    chart
}

fn window(chart: &InteractiveChart<RecordingLayer>, axis: &str) -> (f64, f64) {
    let axis = chart.area().axis(axis).expect("axis");
    (axis.zoom_factor(), axis.zoom_position())
}

#[test]
fn config_json_roundtrip() {
    let config = InteractionConfig::default()
        .with_transposed(true)
        .with_zoom_pan(ZoomPanConfig {
            zoom_mode: ZoomMode::X,
            enable_selection_zooming: true,
            maximum_zoom_level: Some(8.0),
            ..ZoomPanConfig::default()
        })
        .with_trackball(TrackballConfig {
            display_mode: TrackballDisplayMode::GroupAllPoints,
            ..TrackballConfig::default()
        })
        .with_selection(
            SelectionConfig {
                selection_type: SelectionType::Multiple,
                ..SelectionConfig::default()
            },
            SelectionScope::Series,
        );

    let json = config.to_json_pretty().expect("serialize");
    let parsed = InteractionConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_config_fields_take_defaults() {
    assert_eq!(
        InteractionConfig::from_json_str("{}").expect("empty config"),
        InteractionConfig::default()
    );

    let parsed =
        InteractionConfig::from_json_str(r#"{"zoom_pan":{"enable_selection_zooming":true}}"#)
            .expect("partial config");
    assert!(parsed.zoom_pan.enable_selection_zooming);
    assert!(parsed.zoom_pan.enable_pinch_zooming);
    assert_eq!(parsed.trackball, TrackballConfig::default());
}

#[test]
fn invalid_config_is_rejected() {
    let err = InteractionConfig::from_json_str(r#"{"zoom_pan":{"maximum_zoom_level":0.5}}"#)
        .expect_err("level below one");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert!(InteractionConfig::from_json_str("{ not json").is_err());

    let config = InteractionConfig::default().with_zoom_pan(ZoomPanConfig {
        maximum_zoom_level: Some(f64::NAN),
        ..ZoomPanConfig::default()
    });
    assert!(
        InteractiveChart::new(
            RecordingLayer::default(),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            config
        )
        .is_err()
    );
}

#[test]
fn snapshot_reports_visible_ranges() {
    let mut chart = chart(InteractionConfig::default());
    assert!(chart.zoom_by_range("x", 2.0, 4.0));

    let snapshot = chart.snapshot();
    let x = snapshot.axes.get("x").expect("x snapshot");
    assert_abs_diff_eq!(x.zoom_factor, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(x.visible_start, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x.visible_end, 4.0, epsilon = 1e-9);
    let y = snapshot.axes.get("y").expect("y snapshot");
    assert_abs_diff_eq!(y.zoom_factor, 1.0);
    assert_eq!(snapshot.point_selections.len(), 1);
    assert_eq!(snapshot.point_selections[0].series, SeriesId(1));

    let json = chart.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"axes\""));
    assert!(json.contains("\"visible_start\""));
    assert!(json.contains("\"x\""));
}

#[test]
fn pinch_gesture_zooms_around_location() {
    let mut chart = chart(InteractionConfig::default());
    let location = Point::new(500.0, 250.0);

    for (status, scale) in [
        (GestureStatus::Started, 1.0),
        (GestureStatus::Running, 2.0),
        (GestureStatus::Completed, 1.0),
    ] {
        chart.handle_gesture(ChartGesture::Pinch {
            status,
            location,
            angle_deg: None,
            scale,
        });
    }

    for axis in ["x", "y"] {
        let (factor, position) = window(&chart, axis);
        assert_abs_diff_eq!(factor, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(position, 0.25, epsilon = 1e-12);
    }
    assert!(!chart.zoom_controller().is_pinch_active());
}

#[test]
fn scroll_gesture_pans_zoomed_axis() {
    let mut chart = chart(InteractionConfig::default());
    chart.zoom("x", 2.0, 0.5);

    chart.handle_gesture(ChartGesture::Scroll {
        translation: Point::new(-100.0, 0.0),
    });

    let (factor, position) = window(&chart, "x");
    assert_abs_diff_eq!(factor, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(position, 0.30, epsilon = 1e-12);
    assert_eq!(window(&chart, "y"), (1.0, 0.0));
}

#[test]
fn double_tap_gesture_zooms_then_resets() {
    let mut chart = chart(InteractionConfig::default());
    let center = Point::new(500.0, 250.0);

    chart.handle_gesture(ChartGesture::DoubleTap(center));
    let (factor, _) = window(&chart, "x");
    assert_abs_diff_eq!(factor, 0.4, epsilon = 1e-12);

    chart.handle_gesture(ChartGesture::DoubleTap(center));
    assert_eq!(window(&chart, "x"), (1.0, 0.0));
    assert_eq!(window(&chart, "y"), (1.0, 0.0));
}

#[test]
fn hover_shows_trackball_and_exit_hides_it() {
    let mut chart = chart(InteractionConfig::default());

    chart.handle_gesture(ChartGesture::Hover(Point::new(210.0, 250.0)));
    assert!(chart.trackball().is_visible());
    assert_eq!(chart.trackball().points()[0].data_index, 2);
    assert!(!chart.layer().is_empty());

    chart.handle_gesture(ChartGesture::Exit);
    assert!(!chart.trackball().is_visible());
    assert!(chart.layer().is_empty());
}

#[test]
fn zoom_refreshes_visible_trackball() {
    let mut chart = chart(InteractionConfig::default());
    chart.handle_gesture(ChartGesture::Hover(Point::new(210.0, 250.0)));

    // x now spans 0..5 over 1000 px, so pixel 210 reads x=1.05.
    chart.zoom_by_range("x", 0.0, 5.0);

    assert!(chart.trackball().is_visible());
    assert_eq!(chart.trackball().points()[0].data_index, 1);
}

#[test]
fn long_press_mode_ignores_hover() {
    let config = InteractionConfig::default().with_trackball(TrackballConfig {
        activation_mode: TrackballActivationMode::LongPress,
        ..TrackballConfig::default()
    });
    let mut chart = chart(config);

    chart.handle_gesture(ChartGesture::Hover(Point::new(210.0, 250.0)));
    assert!(!chart.trackball().is_visible());

    chart.handle_gesture(ChartGesture::LongPress(Point::new(210.0, 250.0)));
    assert!(chart.trackball().is_visible());

    chart.handle_gesture(ChartGesture::TouchUp(Point::new(210.0, 250.0)));
    assert!(!chart.trackball().is_visible());
}

#[test]
fn drag_gesture_zooms_to_selection() {
    let config = InteractionConfig::default().with_zoom_pan(ZoomPanConfig {
        zoom_mode: ZoomMode::X,
        enable_selection_zooming: true,
        ..ZoomPanConfig::default()
    });
    let mut chart = chart(config);

    chart.handle_gesture(ChartGesture::TouchDown(Point::new(200.0, 100.0)));
    chart.handle_gesture(ChartGesture::TouchMove(Point::new(400.0, 300.0)));
    assert!(chart.zoom_controller().is_selection_zooming());
    chart.handle_gesture(ChartGesture::TouchUp(Point::new(400.0, 300.0)));

    let (factor, position) = window(&chart, "x");
    assert_abs_diff_eq!(factor, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(position, 0.2, epsilon = 1e-12);
    assert_eq!(window(&chart, "y"), (1.0, 0.0));
    assert!(!chart.zoom_controller().is_selection_zooming());
}

#[test]
fn transposing_hides_trackball_and_swaps_orientation() {
    let mut chart = chart(InteractionConfig::default());
    chart.handle_gesture(ChartGesture::Hover(Point::new(210.0, 250.0)));

    chart.set_transposed(true);

    assert!(!chart.trackball().is_visible());
    assert!(chart.config().transposed);
    assert!(chart.area().axis("x").expect("x axis").is_vertical());
    assert!(!chart.area().axis("y").expect("y axis").is_vertical());
}
