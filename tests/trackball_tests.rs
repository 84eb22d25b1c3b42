use chart_interaction::core::{
    Axis, AxisRole, ChartArea, DataPoint, Point, Rect, SeriesId, SeriesPointInfo, XySeries,
};
use chart_interaction::interaction::events::TrackballListener;
use chart_interaction::interaction::{
    PointerInteractive, TrackballActivationMode, TrackballConfig, TrackballDisplayMode,
    TrackballEngine,
};
use chart_interaction::render::{RecordingLayer, TrackballView};

fn area() -> ChartArea {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    area.add_series(Box::new(XySeries::line(
        SeriesId(1),
        "s1",
        "x",
        "y",
        vec![DataPoint::new(2.0, 20.0), DataPoint::new(5.0, 50.0)],
    )))
    .expect("s1");
    area.add_series(Box::new(XySeries::line(
        SeriesId(2),
        "s2",
        "x",
        "y",
        vec![DataPoint::new(2.0, 80.0)],
    )))
    .expect("s2");
    area.add_series(Box::new(XySeries::line(
        SeriesId(3),
        "s3",
        "x",
        "y",
        vec![DataPoint::new(3.0, 50.0)],
    )))
    .expect("s3");
    area
}

fn engine(mode: TrackballDisplayMode) -> TrackballEngine<RecordingLayer> {
    TrackballEngine::new(
        RecordingLayer::default(),
        TrackballConfig {
            display_mode: mode,
            ..TrackballConfig::default()
        },
    )
    .expect("trackball")
}

fn series_ids(points: &[SeriesPointInfo]) -> Vec<u32> {
    let mut ids: Vec<u32> = points.iter().map(|point| point.series.0).collect();
    ids.sort_unstable();
    ids
}

fn count_views(layer: &RecordingLayer, predicate: impl Fn(&TrackballView) -> bool) -> usize {
    layer.views().values().filter(|view| predicate(view)).count()
}

#[test]
fn tied_series_survive_and_farther_series_is_excluded() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(210.0, 250.0));

    assert_eq!(series_ids(trackball.points()), vec![1, 2]);
    let layer = trackball.layer();
    assert_eq!(count_views(layer, |view| matches!(view, TrackballView::Marker { .. })), 2);
    assert_eq!(count_views(layer, |view| matches!(view, TrackballView::PointLabel { .. })), 2);
    assert_eq!(trackball.axis_labels().len(), 1);
    assert_eq!(trackball.axis_labels()[0].text, "2");
    assert_eq!(layer.len(), 5);
}

#[test]
fn labels_sit_right_of_points_and_flip_at_the_edge() {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    area.add_series(Box::new(XySeries::line(
        SeriesId(1),
        "s1",
        "x",
        "y",
        vec![DataPoint::new(2.0, 50.0), DataPoint::new(10.0, 50.0)],
    )))
    .expect("s1");
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(200.0, 250.0));
    let rect = trackball.points()[0].target_rect;
    assert!(rect.left > 200.0);
    assert!((rect.center().y - 250.0).abs() < 1e-9);

    trackball.show(&area, Point::new(1000.0, 250.0));
    let rect = trackball.points()[0].target_rect;
    assert!(rect.right() < 1000.0);
}

#[test]
fn nearest_point_mode_keeps_closest_y_only() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::NearestPoint);

    // s1 at y=20 maps to pixel 400, s2 at y=80 to pixel 100.
    trackball.show(&area, Point::new(210.0, 380.0));

    assert_eq!(series_ids(trackball.points()), vec![1]);
}

#[test]
fn group_mode_emits_one_combined_label() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::GroupAllPoints);

    trackball.show(&area, Point::new(210.0, 250.0));

    let layer = trackball.layer();
    assert_eq!(count_views(layer, |view| matches!(view, TrackballView::PointLabel { .. })), 0);
    let groups: Vec<&TrackballView> = layer
        .views()
        .values()
        .filter(|view| matches!(view, TrackballView::GroupLabel { .. }))
        .collect();
    assert_eq!(groups.len(), 1);
    if let TrackballView::GroupLabel { lines, rect, .. } = groups[0] {
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|line| line == "s1: 20"));
        assert!(lines.iter().any(|line| line == "s2: 80"));
        assert!(area.plot_bounds().contains(Point::new(rect.left, rect.top)));
    }
    assert!(trackball.group_rect().is_some());
}

#[test]
fn views_are_reused_between_activations() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(210.0, 250.0));
    let added = trackball.layer().added;
    trackball.layer_mut().reset_counters();

    trackball.show(&area, Point::new(215.0, 260.0));
    assert_eq!(trackball.layer().added, 0);
    assert_eq!(trackball.layer().removed, 0);
    assert_eq!(trackball.layer().updated, added);

    // Moving to x=5 leaves only s1's second point; every old view goes away.
    trackball.show(&area, Point::new(480.0, 250.0));
    assert_eq!(series_ids(trackball.points()), vec![1]);
    assert_eq!(trackball.points()[0].data_index, 1);
    assert_eq!(trackball.layer().len(), 3);
    assert_eq!(trackball.layer().removed, 5);
}

#[test]
fn hide_is_idempotent() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(210.0, 250.0));
    trackball.hide();
    assert!(trackball.layer().is_empty());
    assert!(!trackball.is_visible());
    let removed = trackball.layer().removed;

    trackball.hide();
    assert_eq!(trackball.layer().removed, removed);
}

#[test]
fn pointer_outside_plot_hides() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(210.0, 250.0));
    trackball.show(&area, Point::new(1_200.0, 250.0));
    assert!(!trackball.is_visible());
    assert!(trackball.layer().is_empty());
}

#[test]
fn hidden_and_opted_out_series_are_skipped() {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    let points = vec![DataPoint::new(2.0, 20.0)];
    area.add_series(Box::new(
        XySeries::line(SeriesId(1), "hidden", "x", "y", points.clone()).with_visible(false),
    ))
    .expect("hidden");
    area.add_series(Box::new(
        XySeries::line(SeriesId(2), "quiet", "x", "y", points.clone()).with_trackball_info(false),
    ))
    .expect("quiet");
    area.add_series(Box::new(XySeries::line(SeriesId(3), "shown", "x", "y", points)))
        .expect("shown");
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(200.0, 250.0));
    assert_eq!(series_ids(trackball.points()), vec![3]);
}

#[test]
fn side_by_side_columns_follow_the_hovered_band() {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    for index in 0..2u32 {
        area.add_series(Box::new(XySeries::column(
            SeriesId(index + 1),
            format!("c{index}"),
            "x",
            "y",
            vec![DataPoint::new(5.0, 40.0 + index as f64 * 20.0)],
            index as usize,
            2,
            0.8,
        )))
        .expect("column");
    }
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    trackball.show(&area, Point::new(480.0, 300.0));
    assert_eq!(series_ids(trackball.points()), vec![1]);

    trackball.show(&area, Point::new(520.0, 300.0));
    assert_eq!(series_ids(trackball.points()), vec![2]);
}

struct Renamer;

impl TrackballListener for Renamer {
    fn on_labels_generated(&mut self, points: &mut [SeriesPointInfo]) {
        for point in points {
            point.label = format!("#{}", point.series.0);
        }
    }
}

#[test]
fn labels_generated_hook_can_rewrite_text() {
    let area = area();
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);
    trackball.add_listener(Box::new(Renamer));

    trackball.show(&area, Point::new(210.0, 250.0));
    let mut labels: Vec<&str> = trackball
        .points()
        .iter()
        .map(|point| point.label.as_str())
        .collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["#1", "#2"]);
}

#[test]
fn long_press_activation_gates_touch_move() {
    let mut area = area();
    let mut trackball = TrackballEngine::new(
        RecordingLayer::default(),
        TrackballConfig {
            activation_mode: TrackballActivationMode::LongPress,
            ..TrackballConfig::default()
        },
    )
    .expect("trackball");

    trackball.on_touch_move(&mut area, Point::new(210.0, 250.0));
    assert!(!trackball.is_visible());

    trackball.on_long_press(&mut area, Point::new(210.0, 250.0));
    assert!(trackball.is_activated());
    assert!(trackball.is_visible());

    trackball.on_touch_move(&mut area, Point::new(480.0, 250.0));
    assert_eq!(trackball.points()[0].data_index, 1);

    trackball.on_touch_up(&mut area, Point::new(480.0, 250.0));
    assert!(!trackball.is_visible());
    assert!(!trackball.is_activated());
}

#[test]
fn transposed_chart_tracks_along_vertical_x_axis() {
    let mut area = area();
    area.set_transposed(true);
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    // x=2 sits 20% up the vertical axis: pixel y = 500 - 0.2 * 500.
    trackball.show(&area, Point::new(500.0, 395.0));
    assert_eq!(series_ids(trackball.points()), vec![1, 2]);
    for point in trackball.points() {
        assert!((point.y - 400.0).abs() < 1e-9);
        assert!(point.target_rect.bottom() <= point.y);
    }
    let label = &trackball.axis_labels()[0];
    assert!(label.rect.right() <= 1e-9);
}

fn axis_label_views(layer: &RecordingLayer) -> Vec<(String, String)> {
    let mut labels: Vec<(String, String)> = layer
        .views()
        .values()
        .filter_map(|view| match view {
            TrackballView::AxisLabel { axis, text, .. } => Some((axis.clone(), text.clone())),
            _ => None,
        })
        .collect();
    labels.sort_unstable();
    labels
}

#[test]
fn interleaved_x_axes_share_axis_label_views_by_text() {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("x2", AxisRole::X, 0.0, 20.0).expect("x2 axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    area.add_series(Box::new(XySeries::line(
        SeriesId(1),
        "low",
        "x",
        "y",
        vec![DataPoint::new(2.0, 20.0), DataPoint::new(3.0, 20.0)],
    )))
    .expect("low");
    area.add_series(Box::new(XySeries::line(
        SeriesId(2),
        "mid",
        "x2",
        "y",
        vec![DataPoint::new(4.0, 50.0)],
    )))
    .expect("mid");
    area.add_series(Box::new(XySeries::line(
        SeriesId(3),
        "high",
        "x",
        "y",
        vec![DataPoint::new(2.0, 80.0)],
    )))
    .expect("high");
    let mut trackball = engine(TrackballDisplayMode::FloatAllPoints);

    // All three sit at pixel x 200; sorted top-down the axes run x, x2, x.
    trackball.show(&area, Point::new(200.0, 250.0));
    assert_eq!(series_ids(trackball.points()), vec![1, 2, 3]);
    let labels: Vec<(&str, &str)> = trackball
        .axis_labels()
        .iter()
        .map(|label| (label.axis.as_str(), label.text.as_str()))
        .collect();
    assert_eq!(labels, vec![("x", "2"), ("x2", "4"), ("x", "2")]);
    assert_eq!(
        axis_label_views(trackball.layer()),
        vec![
            ("x".to_owned(), "2".to_owned()),
            ("x2".to_owned(), "4".to_owned())
        ]
    );

    trackball.show(&area, Point::new(200.0, 260.0));
    assert_eq!(axis_label_views(trackball.layer()).len(), 2);

    // Only "low" reaches x=3; both old axis label views give way to a new one.
    trackball.show(&area, Point::new(300.0, 250.0));
    assert_eq!(series_ids(trackball.points()), vec![1]);
    assert_eq!(trackball.axis_labels().len(), 1);
    assert_eq!(
        axis_label_views(trackball.layer()),
        vec![("x".to_owned(), "3".to_owned())]
    );
}
