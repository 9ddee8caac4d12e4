use approx::{assert_abs_diff_eq, assert_relative_eq};
use case_chart::ChartError;
use case_chart::api::{
    AnimatedChartView, AreaChartView, AxisTick, AxisTransition, BrushChartView, BrushLayout,
    ChartViewConfig, MarkersChartView, PieChartView, bottom_axis_tick_count, default_wave_markers,
    ease_cubic_in_out,
};
use case_chart::core::primitives::date_to_unix_seconds;
use case_chart::core::{CategoryDatapoint, DataPoint, Margin, SelectionRange, Viewport};
use case_chart::render::{LineStrokeStyle, NullRenderer, Renderer};
use chrono::{Days, NaiveDate};

fn daily(days: u64, start: (i32, u32, u32)) -> Vec<DataPoint> {
    let first = NaiveDate::from_ymd_opt(start.0, start.1, start.2).expect("valid date");
    (0..days)
        .filter_map(|offset| first.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(index, date)| DataPoint::new(date_to_unix_seconds(date), (index as f64 + 1.0) * 10.0))
        .collect()
}

fn tick(value: f64, position_px: f64) -> AxisTick {
    AxisTick {
        value,
        label: format!("{value}"),
        position_px,
    }
}

fn area_config() -> ChartViewConfig {
    ChartViewConfig::new(Viewport::new(600, 300)).with_margin(Margin::new(20.0, 20.0, 30.0, 50.0))
}

#[test]
fn bottom_axis_density_depends_on_view_width() {
    assert_eq!(bottom_axis_tick_count(520.0), 5);
    assert_eq!(bottom_axis_tick_count(521.0), 10);
}

#[test]
fn area_view_draws_closed_area_against_zero() {
    let view = AreaChartView::new(area_config()).expect("view");
    let frame = view.render_frame(&daily(10, (2020, 3, 1))).expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.polygons.len(), 1);
    let polygon = &frame.polygons[0];
    assert_eq!(polygon.points.len(), 13);
    assert_relative_eq!(polygon.points[0].0, 50.0);
    assert_relative_eq!(polygon.points[0].1, 270.0);
    assert!(!frame.texts.is_empty());
}

#[test]
fn hidden_axes_leave_only_background_and_area() {
    let view = AreaChartView::new(area_config())
        .expect("view")
        .hide_bottom_axis()
        .hide_left_axis();
    let frame = view.render_frame(&daily(10, (2020, 3, 1))).expect("frame");
    assert!(frame.lines.is_empty());
    assert!(frame.texts.is_empty());
    assert_eq!(frame.polygons.len(), 1);
}

#[test]
fn empty_dataset_renders_background_only() {
    let view = AreaChartView::new(area_config()).expect("view");
    let frame = view.render_frame(&[]).expect("frame");
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.polygons.is_empty());
    assert!(frame.lines.is_empty());
}

#[test]
fn margins_larger_than_viewport_are_rejected() {
    let config = ChartViewConfig::new(Viewport::new(100, 100))
        .with_margin(Margin::new(60.0, 0.0, 60.0, 0.0));
    let err = AreaChartView::new(config).expect_err("no plot area");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn easing_is_symmetric_cubic() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert_abs_diff_eq!(ease_cubic_in_out(0.5), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(ease_cubic_in_out(0.25), 0.0625, epsilon = 1e-12);
    assert_abs_diff_eq!(ease_cubic_in_out(0.75), 0.9375, epsilon = 1e-12);
    assert_eq!(ease_cubic_in_out(2.0), 1.0);
}

#[test]
fn ticks_enter_and_leave_through_axis_center() {
    let previous = [tick(1.0, 10.0), tick(2.0, 20.0)];
    let next = [tick(2.0, 40.0), tick(3.0, 60.0)];
    let transition = AxisTransition::between(&previous, &next, 100.0);
    assert_eq!(transition.len(), 3);

    let start = transition.at(0.0);
    assert_relative_eq!(start[0].position_px, 20.0);
    assert_relative_eq!(start[1].position_px, 50.0);
    assert_eq!(start[1].opacity, 0.0);
    assert_relative_eq!(start[2].position_px, 10.0);
    assert_eq!(start[2].opacity, 1.0);

    let end = transition.at(1.0);
    assert_relative_eq!(end[0].position_px, 40.0);
    assert_relative_eq!(end[1].position_px, 60.0);
    assert_eq!(end[1].opacity, 1.0);
    assert_relative_eq!(end[2].position_px, 50.0);
    assert_eq!(end[2].opacity, 0.0);

    let middle = transition.at(0.5);
    assert_abs_diff_eq!(middle[0].position_px, 30.0, epsilon = 1e-9);
}

#[test]
fn settled_transition_does_not_move() {
    let ticks = [tick(1.0, 10.0), tick(2.0, 20.0)];
    let transition = AxisTransition::settled(&ticks);
    for progress in [0.0, 0.3, 1.0] {
        let frames = transition.at(progress);
        assert_eq!(frames.len(), 2);
        assert_relative_eq!(frames[0].position_px, 10.0);
        assert_eq!(frames[1].opacity, 1.0);
    }
}

#[test]
fn animated_view_transitions_between_datasets() {
    let config =
        ChartViewConfig::new(Viewport::new(800, 800)).with_margin(Margin::new(40.0, 150.0, 20.0, 50.0));
    let mut view = AnimatedChartView::new(config).expect("view");
    assert!(view.axis_transition().is_empty());

    view.set_data(daily(60, (2020, 3, 1))).expect("first dataset");
    let first_len = view.axis_transition().len();
    assert!(first_len > 0);

    view.set_data(daily(400, (2020, 3, 1))).expect("second dataset");
    assert!(!view.axis_transition().is_empty());

    let mut renderer = NullRenderer::default();
    for progress in [0.0, 0.5, 1.0] {
        let frame = view.render_frame(progress).expect("frame");
        renderer.render(&frame).expect("valid frame");
        assert_eq!(frame.polygons.len(), 1);
        assert!(frame.texts.iter().any(|text| text.text == "time"));
    }
}

#[test]
fn brush_view_sorts_input_and_filters_by_selection() {
    let mut points = daily(20, (2020, 3, 1));
    points.reverse();
    let mut view = BrushChartView::new(BrushLayout::default()).expect("view");
    view.set_data(points);

    let raw = view.raw_data();
    assert!(raw.windows(2).all(|pair| pair[0].time <= pair[1].time));
    assert_eq!(view.filtered_data(), raw);

    let frame = view.render_frame().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.polygons.len(), 2);

    let range = SelectionRange::new(raw[4].time, raw[10].time, 0.0, 1_000.0);
    view.apply_selection(Some(range)).expect("selection");
    assert_eq!(view.filtered_data().len(), 5);
    assert_eq!(view.filtered_data()[0], view.raw_data()[5]);

    let frame = view.render_frame().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.polygons.len(), 3);

    view.clear_selection().expect("clear");
    assert_eq!(view.filtered_data().len(), 20);
}

#[test]
fn brush_selection_relocates_visible_tooltip() {
    let mut view = BrushChartView::new(BrushLayout::default()).expect("view");
    view.set_data(daily(20, (2020, 3, 1)));
    let left = view.layout().margin.left;

    let tooltip = view
        .pointer_move(left, 100.0)
        .expect("move")
        .expect("inside plot");
    assert_eq!(tooltip.anchor, view.raw_data()[0]);

    let raw = view.raw_data();
    let range = SelectionRange::new(raw[9].time, raw[19].time + 1.0, 0.0, 1_000.0);
    view.apply_selection(Some(range)).expect("selection");

    let tooltip = view.interaction().tooltip().expect("tooltip kept");
    assert_eq!(tooltip.anchor, view.filtered_data()[0]);
    assert_eq!(tooltip.anchor, view.raw_data()[10]);
    let scales = view.focus_scales().expect("focus scales");
    assert_relative_eq!(
        tooltip.y_px,
        scales.y.value_to_pixel(tooltip.anchor.value).expect("y")
    );

    view.pointer_leave();
    view.clear_selection().expect("clear");
    assert!(view.interaction().tooltip().is_none());
}

#[test]
fn animated_rows_stay_inside_short_plot() {
    let config =
        ChartViewConfig::new(Viewport::new(400, 60)).with_margin(Margin::new(2.0, 20.0, 30.0, 50.0));
    let mut view = AnimatedChartView::new(config).expect("view");
    view.set_data(daily(10, (2020, 3, 1))).expect("first dataset");
    view.set_data(daily(400, (2020, 3, 1))).expect("second dataset");

    for progress in [0.0, 0.5, 1.0] {
        let frame = view.render_frame(progress).expect("frame");
        assert!(
            frame
                .lines
                .iter()
                .all(|line| line.y1 >= 0.0 && line.y2 >= 0.0)
        );
    }
}

#[test]
fn brush_layout_defaults_split_focus_and_overview() {
    let layout = BrushLayout::default();
    assert_relative_eq!(layout.focus_width(), 1_215.0);
    assert_relative_eq!(layout.focus_height(), 408.0);
    assert_relative_eq!(layout.overview_width(), 1_230.0);
    assert_relative_eq!(layout.overview_height(), 97.0);
    assert_eq!(layout.overview_origin(), (50.0, 468.0));

    let cramped = layout.with_viewport(Viewport::new(100, 60));
    assert!(cramped.validate().is_err());
}

#[test]
fn pie_view_skips_empty_and_unusable_wedges() {
    let mut view = PieChartView::new(ChartViewConfig::new(Viewport::new(800, 600))).expect("view");
    assert_relative_eq!(view.radius(), 300.0);

    let empty = view.render_frame().expect("frame");
    assert_eq!(empty.rects.len(), 1);
    assert!(empty.arcs.is_empty());

    view.set_categories(vec![
        CategoryDatapoint::new("a", 1.0),
        CategoryDatapoint::new("b", 1.0),
        CategoryDatapoint::new("c", f64::NAN),
        CategoryDatapoint::new("d", 0.0),
    ]);
    let frame = view.render_frame().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.arcs.len(), 2);
    assert_eq!(frame.texts.len(), 2);
    assert_abs_diff_eq!(frame.texts[0].rotation_deg, 0.0, epsilon = 1e-9);
    assert_eq!(view.layout().skipped, vec!["c".to_owned()]);
}

#[test]
fn markers_view_draws_dashed_wave_lines() {
    let config =
        ChartViewConfig::new(Viewport::new(1300, 600)).with_margin(Margin::new(40.0, 20.0, 40.0, 65.0));
    let mut view = MarkersChartView::new(config, default_wave_markers()).expect("view");
    assert!(view.placed_markers().expect("markers").is_empty());

    view.set_data(daily(731, (2020, 1, 1)));
    let placed = view.placed_markers().expect("markers");
    assert_eq!(placed.len(), 6);

    let frame = view.render_frame().expect("frame");
    frame.validate().expect("valid frame");
    let dashed = frame
        .lines
        .iter()
        .filter(|line| {
            matches!(
                line.stroke_style,
                LineStrokeStyle::Dashed {
                    on_px,
                    off_px
                } if on_px == 8.0 && off_px == 8.0
            )
        })
        .count();
    assert_eq!(dashed, 6);
    assert!(frame.texts.iter().any(|text| text.text == "6th wave"));
}

#[test]
fn markers_view_tooltip_reports_anchor() {
    let config =
        ChartViewConfig::new(Viewport::new(1300, 600)).with_margin(Margin::new(40.0, 20.0, 40.0, 65.0));
    let mut view = MarkersChartView::new(config, Vec::new()).expect("view");
    view.set_data(daily(10, (2020, 3, 1)));

    let tooltip = view
        .pointer_move(65.0, 200.0)
        .expect("move")
        .expect("inside plot");
    assert_eq!(tooltip.anchor, view.data()[0]);

    let frame = view.render_frame().expect("frame");
    assert_eq!(frame.circles.len(), 2);
    assert!(frame.texts.iter().any(|text| text.text == "Date: 1/3/2020"));
    assert!(frame.texts.iter().any(|text| text.text == "Cases: 10"));

    view.pointer_leave();
    assert!(view.interaction().tooltip().is_none());
    assert!(view.render_frame().expect("frame").circles.is_empty());
}
