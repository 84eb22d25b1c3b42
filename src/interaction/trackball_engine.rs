use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::label_format::format_axis_value;
use crate::core::{ChartArea, Point, Rect, SeriesId, SeriesPointInfo};
use crate::error::ChartResult;
use crate::render::{InteractionLayer, TrackballView, ViewId, ViewInstruction};

use super::PointerInteractive;
use super::events::TrackballListener;
use super::label_collision_resolver::{LABEL_SPACING_PX, smart_label_alignment};
use super::nearest_point_locator::{find_least_x_value, validate_for_all_series};
use super::trackball_config::{
    AxisLabelInfo, TrackballActivationMode, TrackballConfig, TrackballDisplayMode,
};

#[derive(Debug, Clone, Copy, Default)]
struct PointViews {
    marker: Option<ViewId>,
    label: Option<ViewId>,
}

/// Cursor-following readout of the nearest data points across all series.
///
/// The engine owns the interaction layer it emits views to and recycles those
/// views between activations.
pub struct TrackballEngine<L: InteractionLayer> {
    config: TrackballConfig,
    layer: L,
    listeners: Vec<Box<dyn TrackballListener>>,
    is_scheduled: bool,
    is_activated: bool,
    last_pointer: Option<Point>,
    points: Vec<SeriesPointInfo>,
    axis_labels: Vec<AxisLabelInfo>,
    group_rect: Option<Rect>,
    point_views: IndexMap<(SeriesId, usize), PointViews>,
    axis_label_views: IndexMap<(String, String), ViewId>,
    group_view: Option<ViewId>,
    next_view_id: u64,
}

impl<L: InteractionLayer + std::fmt::Debug> std::fmt::Debug for TrackballEngine<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackballEngine")
            .field("config", &self.config)
            .field("layer", &self.layer)
            .field("points", &self.points.len())
            .field("axis_labels", &self.axis_labels.len())
            .finish()
    }
}

impl<L: InteractionLayer> TrackballEngine<L> {
    pub fn new(layer: L, config: TrackballConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            layer,
            listeners: Vec::new(),
            is_scheduled: false,
            is_activated: false,
            last_pointer: None,
            points: Vec::new(),
            axis_labels: Vec::new(),
            group_rect: None,
            point_views: IndexMap::new(),
            axis_label_views: IndexMap::new(),
            group_view: None,
            next_view_id: 1,
        })
    }

    #[must_use]
    pub fn config(&self) -> TrackballConfig {
        self.config
    }

    /// Replaces the configuration; a visible trackball is hidden first.
    pub fn set_config(&mut self, config: TrackballConfig) -> ChartResult<()> {
        let config = config.validate()?;
        self.hide();
        self.config = config;
        Ok(())
    }

    pub fn add_listener(&mut self, listener: Box<dyn TrackballListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPointInfo] {
        &self.points
    }

    #[must_use]
    pub fn axis_labels(&self) -> &[AxisLabelInfo] {
        &self.axis_labels
    }

    /// Combined label rectangle in `GroupAllPoints` mode.
    #[must_use]
    pub fn group_rect(&self) -> Option<Rect> {
        self.group_rect
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.points.is_empty()
    }

    /// `true` between a long press and the following release.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.is_activated
    }

    /// Shows the trackball for `pointer`, or hides it when the pointer leaves the plot.
    pub fn show(&mut self, area: &ChartArea, pointer: Point) {
        if self.is_scheduled {
            return;
        }
        if !area.plot_bounds().contains(pointer) {
            self.hide();
            return;
        }
        self.is_scheduled = true;
        self.last_pointer = Some(pointer);
        self.generate_trackball(area, pointer);
        self.is_scheduled = false;
    }

    /// Regenerates a visible trackball at its last pointer, e.g. after a zoom.
    pub fn refresh(&mut self, area: &ChartArea) {
        if let (true, Some(pointer)) = (self.is_visible(), self.last_pointer) {
            self.show(area, pointer);
        }
    }

    /// Removes every view and clears transient state; safe to call repeatedly.
    pub fn hide(&mut self) {
        let had_views = !self.point_views.is_empty()
            || !self.axis_label_views.is_empty()
            || self.group_view.is_some();

        for (_, views) in std::mem::take(&mut self.point_views) {
            self.remove_view(views.marker);
            self.remove_view(views.label);
        }
        for (_, id) in std::mem::take(&mut self.axis_label_views) {
            self.layer.apply(ViewInstruction::Remove { id });
        }
        let group = self.group_view.take();
        self.remove_view(group);

        self.points.clear();
        self.axis_labels.clear();
        self.group_rect = None;
        self.last_pointer = None;
        self.is_scheduled = false;
        if had_views {
            trace!("trackball hidden");
        }
    }

    fn generate_trackball(&mut self, area: &ChartArea, pointer: Point) {
        let transposed = area.is_transposed();
        let mode = self.config.display_mode;

        let mut points = Vec::new();
        let mut is_side_by_side = false;
        for x_axis in area.x_axes() {
            for id in x_axis.registered_series() {
                let Some(series) = area.series_by_id(*id) else {
                    continue;
                };
                if series.x_axis() != x_axis.name()
                    || !series.is_visible()
                    || !series.show_trackball_info()
                {
                    continue;
                }
                let Some(ctx) = area.series_context(series) else {
                    continue;
                };
                let nearest = series.find_nearest_chart_points(&ctx, pointer);
                series.generate_trackball_point_info(
                    &ctx,
                    &nearest,
                    &mut points,
                    &mut is_side_by_side,
                );
            }
        }

        find_least_x_value(&mut points, pointer, transposed);
        if mode == TrackballDisplayMode::NearestPoint
            || (is_side_by_side && mode != TrackballDisplayMode::GroupAllPoints)
        {
            validate_for_all_series(area, &mut points, pointer, mode);
        }

        if points.is_empty() {
            self.hide();
            return;
        }

        for point in &mut points {
            point.label_style = Some(self.config.label_style);
            point.marker_style = Some(self.config.marker_style);
        }
        for listener in &mut self.listeners {
            listener.on_labels_generated(&mut points);
        }
        for listener in &mut self.listeners {
            listener.on_trackball_created(&points);
        }

        let plot = area.plot_bounds();
        self.group_rect = None;
        if mode == TrackballDisplayMode::GroupAllPoints {
            self.group_rect = Some(self.group_label_rect(&points, plot, pointer, transposed));
        } else {
            for point in &mut points {
                point.target_rect = self.point_label_rect(point, plot, transposed);
            }
            if mode == TrackballDisplayMode::FloatAllPoints {
                smart_label_alignment(&mut points, plot, transposed, LABEL_SPACING_PX);
            }
        }

        self.axis_labels = if self.config.show_axis_labels {
            self.generate_axis_labels(area, &points)
        } else {
            Vec::new()
        };
        self.points = points;
        debug!(
            points = self.points.len(),
            axis_labels = self.axis_labels.len(),
            ?mode,
            "trackball generated"
        );

        self.reconcile_point_views();
        self.reconcile_group_view();
        self.reconcile_axis_label_views();
    }

    fn point_label_rect(&self, point: &SeriesPointInfo, plot: Rect, transposed: bool) -> Rect {
        let style = point.label_style.unwrap_or(self.config.label_style);
        let (width, height) = style.measure(&point.label);
        let offset = self.config.label_offset_px;
        if transposed {
            let mut top = point.y - offset - height;
            if top < plot.top {
                top = point.y + offset;
            }
            Rect::new(point.x - width * 0.5, top, width, height)
        } else {
            let mut left = point.x + offset;
            if left + width > plot.right() {
                left = point.x - offset - width;
            }
            Rect::new(left, point.y - height * 0.5, width, height)
        }
    }

    fn group_label_rect(
        &self,
        points: &[SeriesPointInfo],
        plot: Rect,
        pointer: Point,
        transposed: bool,
    ) -> Rect {
        let text = group_lines(points).join("\n");
        let (width, height) = self.config.label_style.measure(&text);
        let offset = self.config.label_offset_px;
        let anchor = points.first().map_or(pointer, SeriesPointInfo::pixel);

        let (left, top) = if transposed {
            let mut top = anchor.y - offset - height;
            if top < plot.top {
                top = anchor.y + offset;
            }
            (pointer.x - width * 0.5, top)
        } else {
            let mut left = anchor.x + offset;
            if left + width > plot.right() {
                left = anchor.x - offset - width;
            }
            (left, pointer.y - height * 0.5)
        };
        let max_left = (plot.right() - width).max(plot.left);
        let max_top = (plot.bottom() - height).max(plot.top);
        Rect::new(
            left.clamp(plot.left, max_left),
            top.clamp(plot.top, max_top),
            width,
            height,
        )
    }

    fn generate_axis_labels(
        &self,
        area: &ChartArea,
        points: &[SeriesPointInfo],
    ) -> Vec<AxisLabelInfo> {
        let plot = area.plot_bounds();
        let style = self.config.axis_label_style;
        let mut labels: Vec<AxisLabelInfo> = Vec::new();
        let mut previous_axis: Option<&str> = None;

        for point in points {
            if previous_axis == Some(point.x_axis.as_str()) {
                continue;
            }
            previous_axis = Some(point.x_axis.as_str());
            let Some(axis) = area.axis(&point.x_axis) else {
                continue;
            };

            let text = format_axis_value(axis, point.x_value);
            let (width, height) = style.measure(&text);
            let rect = if axis.is_vertical() {
                Rect::new(plot.left - width, point.y - height * 0.5, width, height)
            } else {
                Rect::new(point.x - width * 0.5, plot.bottom(), width, height)
            };
            labels.push(AxisLabelInfo {
                axis: axis.name().to_owned(),
                text,
                rect,
                custom_template: axis.uses_label_template(),
            });
        }
        labels
    }

    fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        id
    }

    fn remove_view(&mut self, id: Option<ViewId>) {
        if let Some(id) = id {
            self.layer.apply(ViewInstruction::Remove { id });
        }
    }

    /// Updates a reused view, adds a missing one or removes one no longer wanted.
    fn sync_view(
        &mut self,
        existing: Option<ViewId>,
        view: Option<TrackballView>,
    ) -> Option<ViewId> {
        match (existing, view) {
            (Some(id), Some(view)) => {
                self.layer.apply(ViewInstruction::Update { id, view });
                Some(id)
            }
            (None, Some(view)) => {
                let id = self.allocate_view_id();
                self.layer.apply(ViewInstruction::Add { id, view });
                Some(id)
            }
            (Some(id), None) => {
                self.layer.apply(ViewInstruction::Remove { id });
                None
            }
            (None, None) => None,
        }
    }

    fn reconcile_point_views(&mut self) {
        let mut previous = std::mem::take(&mut self.point_views);
        let mut current = IndexMap::with_capacity(self.points.len());
        let grouped = self.config.display_mode == TrackballDisplayMode::GroupAllPoints;

        for index in 0..self.points.len() {
            let (key, marker, label) = {
                let point = &self.points[index];
                let marker = self.config.show_markers.then(|| TrackballView::Marker {
                    series: point.series,
                    center: point.pixel(),
                    style: point.marker_style.unwrap_or(self.config.marker_style),
                });
                let label = (!grouped).then(|| TrackballView::PointLabel {
                    series: point.series,
                    rect: point.target_rect,
                    text: point.label.clone(),
                    style: point.label_style.unwrap_or(self.config.label_style),
                });
                ((point.series, point.data_index), marker, label)
            };
            if current.contains_key(&key) {
                continue;
            }
            let existing = previous.shift_remove(&key).unwrap_or_default();
            let views = PointViews {
                marker: self.sync_view(existing.marker, marker),
                label: self.sync_view(existing.label, label),
            };
            current.insert(key, views);
        }

        for (_, views) in previous {
            self.remove_view(views.marker);
            self.remove_view(views.label);
        }
        self.point_views = current;
    }

    fn reconcile_group_view(&mut self) {
        let view = self.group_rect.map(|rect| TrackballView::GroupLabel {
            rect,
            lines: group_lines(&self.points),
            style: self.config.label_style,
        });
        let existing = self.group_view;
        self.group_view = self.sync_view(existing, view);
    }

    fn reconcile_axis_label_views(&mut self) {
        let mut previous = std::mem::take(&mut self.axis_label_views);
        let mut current = IndexMap::with_capacity(self.axis_labels.len());

        for index in 0..self.axis_labels.len() {
            let label = &self.axis_labels[index];
            let key = (label.axis.clone(), label.text.clone());
            if current.contains_key(&key) {
                continue;
            }
            let view = TrackballView::AxisLabel {
                axis: label.axis.clone(),
                rect: label.rect,
                text: label.text.clone(),
                custom_template: label.custom_template,
                style: self.config.axis_label_style,
            };
            let existing = previous.shift_remove(&key);
            if let Some(id) = self.sync_view(existing, Some(view)) {
                current.insert(key, id);
            }
        }

        for (_, id) in previous {
            self.layer.apply(ViewInstruction::Remove { id });
        }
        self.axis_label_views = current;
    }
}

fn group_lines(points: &[SeriesPointInfo]) -> Vec<String> {
    points.iter().map(|point| point.label.clone()).collect()
}

impl<L: InteractionLayer> PointerInteractive for TrackballEngine<L> {
    fn on_touch_down(&mut self, area: &mut ChartArea, point: Point) {
        if self.config.activation_mode == TrackballActivationMode::TouchMove {
            self.show(area, point);
        }
    }

    fn on_touch_move(&mut self, area: &mut ChartArea, point: Point) {
        match self.config.activation_mode {
            TrackballActivationMode::TouchMove => self.show(area, point),
            TrackballActivationMode::LongPress if self.is_activated => self.show(area, point),
            TrackballActivationMode::LongPress => {}
        }
    }

    fn on_touch_up(&mut self, _area: &mut ChartArea, _point: Point) {
        self.is_activated = false;
        self.hide();
    }

    fn on_long_press(&mut self, area: &mut ChartArea, point: Point) {
        if self.config.activation_mode == TrackballActivationMode::LongPress {
            self.is_activated = true;
            self.show(area, point);
        }
    }
}
