use std::cell::RefCell;
use std::rc::Rc;

use chart_interaction::api::SelectionScope;
use chart_interaction::core::{
    Axis, AxisRole, ChartArea, DataPoint, Point, Rect, SeriesId, XySeries,
};
use chart_interaction::interaction::events::{
    SelectionChangedEventArgs, SelectionChangingEventArgs, SelectionListener,
};
use chart_interaction::interaction::{
    DataPointSelectionTarget, SelectionBehavior, SelectionConfig, SelectionTarget, SelectionType,
};
use chart_interaction::render::RecordingLayer;
use chart_interaction::{ChartError, ChartGesture, InteractionConfig, InteractiveChart};

fn line(id: u32, y: f64) -> Box<XySeries> {
    let points = (0..10).map(|i| DataPoint::new(i as f64, y)).collect();
    Box::new(XySeries::line(SeriesId(id), format!("s{id}"), "x", "y", points))
}

fn area() -> ChartArea {
    let mut area = ChartArea::new(Rect::new(0.0, 0.0, 1000.0, 500.0));
    area.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    area.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    area.add_series(line(1, 50.0)).expect("series");
    area
}

fn behavior(selection_type: SelectionType) -> SelectionBehavior<DataPointSelectionTarget> {
    SelectionBehavior::new(
        DataPointSelectionTarget::new(SeriesId(1)),
        SelectionConfig {
            selection_type,
            ..SelectionConfig::default()
        },
    )
    .expect("selection")
}

/// Pixel of data point `index` of the y=50 series.
fn point_pixel(index: usize) -> Point {
    Point::new(index as f64 * 100.0, 250.0)
}

#[derive(Default)]
struct Recorded {
    changing: usize,
    changed: Vec<SelectionChangedEventArgs>,
}

struct Recorder {
    recorded: Rc<RefCell<Recorded>>,
    cancel: bool,
}

impl SelectionListener for Recorder {
    fn on_selection_changing(&mut self, args: &mut SelectionChangingEventArgs) {
        self.recorded.borrow_mut().changing += 1;
        args.cancel = self.cancel;
    }

    fn on_selection_changed(&mut self, args: &SelectionChangedEventArgs) {
        self.recorded.borrow_mut().changed.push(args.clone());
    }
}

fn recorder(cancel: bool) -> (Box<Recorder>, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    (
        Box::new(Recorder {
            recorded: Rc::clone(&recorded),
            cancel,
        }),
        recorded,
    )
}

fn highlighted(selection: &SelectionBehavior<DataPointSelectionTarget>) -> Vec<usize> {
    let mut indexes: Vec<usize> = selection.target().highlighted().keys().copied().collect();
    indexes.sort_unstable();
    indexes
}

#[test]
fn single_selection_replaces_previous_index() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);

    assert!(selection.select_at(&area, point_pixel(3)));
    assert!(selection.select_at(&area, point_pixel(5)));

    assert_eq!(selection.selected_index(), Some(5));
    assert_eq!(selection.state().previous_index(), Some(3));
    assert_eq!(highlighted(&selection), vec![5]);
}

#[test]
fn single_selection_keeps_index_on_repeated_tap() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);

    selection.select_at(&area, point_pixel(3));
    selection.select_at(&area, point_pixel(3));
    assert_eq!(selection.selected_index(), Some(3));
}

#[test]
fn single_deselect_toggles_off_on_second_tap() {
    let area = area();
    let mut selection = behavior(SelectionType::SingleDeselect);

    selection.select_at(&area, point_pixel(3));
    assert_eq!(selection.selected_index(), Some(3));

    selection.select_at(&area, point_pixel(3));
    assert_eq!(selection.selected_index(), None);
    assert!(highlighted(&selection).is_empty());
}

#[test]
fn multiple_selection_toggles_membership() {
    let area = area();
    let mut selection = behavior(SelectionType::Multiple);

    selection.select_at(&area, point_pixel(2));
    selection.select_at(&area, point_pixel(4));
    selection.select_at(&area, point_pixel(2));

    assert_eq!(selection.state().actual_indexes(), &[4]);
    assert_eq!(selection.selected_indexes(), &[4]);
    assert_eq!(highlighted(&selection), vec![4]);
}

#[test]
fn tap_away_from_points_changes_nothing() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);
    let (listener, recorded) = recorder(false);
    selection.add_listener(listener);

    assert!(!selection.select_at(&area, Point::new(350.0, 100.0)));
    assert_eq!(selection.selected_index(), None);
    assert_eq!(recorded.borrow().changing, 0);
}

#[test]
fn selection_type_none_ignores_taps() {
    let area = area();
    let mut selection = behavior(SelectionType::None);

    assert!(!selection.select_at(&area, point_pixel(3)));
    assert!(selection.state().is_empty());
}

#[test]
fn programmatic_indexes_are_deduplicated_and_highlighted() {
    let area = area();
    let mut selection = behavior(SelectionType::Multiple);
    let (listener, recorded) = recorder(false);
    selection.add_listener(listener);

    selection.set_selected_indexes(&area, [5, 1, 3, 1]);

    let mut applied = selection.state().actual_indexes().to_vec();
    applied.sort_unstable();
    assert_eq!(applied, vec![1, 3, 5]);
    assert_eq!(highlighted(&selection), vec![1, 3, 5]);

    let recorded = recorded.borrow();
    assert_eq!(recorded.changing, 0);
    assert_eq!(recorded.changed.len(), 1);
    assert_eq!(recorded.changed[0].new_indexes, vec![5, 1, 3]);
    assert!(recorded.changed[0].old_indexes.is_empty());
}

#[test]
fn add_and_remove_selected_index_reconcile_highlights() {
    let area = area();
    let mut selection = behavior(SelectionType::Multiple);

    selection.add_selected_index(&area, 2);
    selection.add_selected_index(&area, 7);
    selection.add_selected_index(&area, 2);
    assert_eq!(selection.selected_indexes(), &[2, 7]);

    selection.remove_selected_index(&area, 2);
    assert_eq!(selection.selected_indexes(), &[7]);
    assert_eq!(highlighted(&selection), vec![7]);
}

#[test]
fn single_mode_stores_indexes_without_applying_them() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);
    let (listener, recorded) = recorder(false);
    selection.add_listener(listener);

    selection.set_selected_index(&area, Some(2));
    selection.set_selected_indexes(&area, [1, 3, 5]);
    selection.add_selected_index(&area, 7);

    assert_eq!(selection.selected_index(), Some(2));
    assert_eq!(selection.selected_indexes(), &[1, 3, 5, 7]);
    assert!(selection.state().actual_indexes().is_empty());
    assert_eq!(highlighted(&selection), vec![2]);
    assert!(recorded.borrow().changed.iter().all(|args| args.new_indexes.len() <= 1));
}

#[test]
fn out_of_range_indexes_are_kept_but_not_highlighted() {
    let area = area();
    let mut selection = behavior(SelectionType::Multiple);

    selection.set_selected_indexes(&area, [1, 42]);

    assert_eq!(selection.selected_indexes(), &[1, 42]);
    assert_eq!(highlighted(&selection), vec![1]);
}

#[test]
fn cancelled_changing_event_blocks_selection() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);
    let (listener, recorded) = recorder(true);
    selection.add_listener(listener);

    assert!(!selection.select_at(&area, point_pixel(3)));

    assert_eq!(selection.selected_index(), None);
    let recorded = recorded.borrow();
    assert_eq!(recorded.changing, 1);
    assert!(recorded.changed.is_empty());
}

#[test]
fn changed_event_reports_old_and_new_indexes() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);
    let (listener, recorded) = recorder(false);
    selection.add_listener(listener);

    selection.select_at(&area, point_pixel(3));
    selection.select_at(&area, point_pixel(6));

    let recorded = recorded.borrow();
    assert_eq!(recorded.changed.len(), 2);
    assert_eq!(recorded.changed[1].old_indexes, vec![3]);
    assert_eq!(recorded.changed[1].new_indexes, vec![6]);
}

#[test]
fn switching_to_multiple_clears_selection() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);

    selection.select_at(&area, point_pixel(3));
    selection.set_type(&area, SelectionType::SingleDeselect);
    assert_eq!(selection.selected_index(), Some(3));

    selection.set_type(&area, SelectionType::Multiple);
    assert!(selection.state().is_empty());
    assert!(highlighted(&selection).is_empty());
}

#[test]
fn clear_selection_reports_cleared_indexes() {
    let area = area();
    let mut selection = behavior(SelectionType::Single);
    let (listener, recorded) = recorder(false);
    selection.add_listener(listener);

    selection.select_at(&area, point_pixel(4));
    assert!(selection.clear_selection(&area));

    assert_eq!(selection.selected_index(), None);
    let recorded = recorded.borrow();
    let last = recorded.changed.last().expect("changed event");
    assert_eq!(last.old_indexes, vec![4]);
    assert!(last.new_indexes.is_empty());
}

fn chart(scope: SelectionScope) -> InteractiveChart<RecordingLayer> {
    let config = InteractionConfig::default().with_selection(SelectionConfig::default(), scope);
    let mut chart = InteractiveChart::new(
        RecordingLayer::default(),
        Rect::new(0.0, 0.0, 1000.0, 500.0),
        config,
    )
    .expect("chart");
    chart.add_axis(Axis::numeric("x", AxisRole::X, 0.0, 10.0).expect("x axis"));
    chart.add_axis(Axis::numeric("y", AxisRole::Y, 0.0, 100.0).expect("y axis"));
    chart.add_series(line(1, 50.0)).expect("s1");
    chart.add_series(line(2, 20.0)).expect("s2");
    chart
}

#[test]
fn series_scope_tap_selects_whole_series() {
    let mut chart = chart(SelectionScope::Series);

    // The y=20 series sits at pixel y=400.
    chart.handle_gesture(ChartGesture::Tap(Point::new(300.0, 400.0)));

    assert_eq!(chart.series_selection().selected_index(), Some(1));
    let points = chart.point_selection(SeriesId(2)).expect("point selection");
    assert_eq!(points.selected_index(), None);
}

#[test]
fn data_point_scope_tap_selects_point_of_hit_series() {
    let mut chart = chart(SelectionScope::DataPoint);

    chart.handle_gesture(ChartGesture::Tap(Point::new(300.0, 400.0)));

    let second = chart.point_selection(SeriesId(2)).expect("s2 selection");
    assert_eq!(second.selected_index(), Some(3));
    let first = chart.point_selection(SeriesId(1)).expect("s1 selection");
    assert_eq!(first.selected_index(), None);
    assert_eq!(chart.series_selection().selected_index(), None);
}

#[test]
fn cancelled_tap_on_top_series_does_not_reach_series_below() {
    let mut chart = chart(SelectionScope::DataPoint);
    chart.add_series(line(3, 20.0)).expect("s3");
    let (listener, recorded) = recorder(true);
    chart
        .add_point_selection_listener(SeriesId(3), listener)
        .expect("known series");

    chart.handle_gesture(ChartGesture::Tap(Point::new(300.0, 400.0)));

    assert_eq!(recorded.borrow().changing, 1);
    let top = chart.point_selection(SeriesId(3)).expect("s3 selection");
    assert_eq!(top.selected_index(), None);
    let below = chart.point_selection(SeriesId(2)).expect("s2 selection");
    assert_eq!(below.selected_index(), None);
}

#[test]
fn chart_selection_type_applies_to_every_behavior() {
    let mut chart = chart(SelectionScope::DataPoint);
    chart
        .set_selected_point_index(SeriesId(1), Some(2))
        .expect("known series");

    chart.set_selection_type(SelectionType::Multiple);

    assert_eq!(chart.selection_config().selection_type, SelectionType::Multiple);
    assert_eq!(chart.series_selection().selection_type(), SelectionType::Multiple);
    let first = chart.point_selection(SeriesId(1)).expect("s1 selection");
    assert_eq!(first.selection_type(), SelectionType::Multiple);
    assert_eq!(first.selected_index(), None);
}

#[test]
fn point_selection_on_unknown_series_is_an_error() {
    let mut chart = chart(SelectionScope::DataPoint);

    let err = chart
        .set_selected_point_index(SeriesId(9), Some(1))
        .expect_err("unknown series");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let (listener, _) = recorder(false);
    assert!(chart.add_point_selection_listener(SeriesId(9), listener).is_err());
}

#[test]
fn removing_series_drops_its_point_selection() {
    let mut chart = chart(SelectionScope::DataPoint);

    assert!(chart.remove_series(SeriesId(2)).is_some());
    assert!(chart.point_selection(SeriesId(2)).is_none());
    assert!(chart.set_selected_point_indexes(SeriesId(2), [1]).is_err());
}
