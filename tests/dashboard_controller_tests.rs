use std::cell::RefCell;
use std::rc::Rc;

use case_chart::api::{DashboardConfig, DashboardController, DashboardView, LoadStatus};
use case_chart::extensions::{DashboardContext, DashboardEvent, DashboardObserver};
use case_chart::interaction::BrushRelease;
use case_chart::render::NullRenderer;
use case_chart::source::{HistoryPayload, SnapshotPayload};
use case_chart::{ChartError, ChartResult};

type EventLog = Rc<RefCell<Vec<(DashboardEvent, DashboardContext)>>>;

struct RecordingObserver {
    id: String,
    log: EventLog,
}

impl RecordingObserver {
    fn boxed(id: &str, log: &EventLog) -> Box<dyn DashboardObserver> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl DashboardObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: DashboardEvent, context: DashboardContext) {
        self.log.borrow_mut().push((event, context));
    }
}

fn history_json(days: u32) -> String {
    let dates: Vec<String> = (1..=days)
        .map(|day| format!("\"1/{day}/2020\": {}", day * 10))
        .collect();
    format!(r#"{{"All":{{"dates":{{{}}}}}}}"#, dates.join(","))
}

fn history(days: u32) -> ChartResult<HistoryPayload> {
    HistoryPayload::from_json_str(&history_json(days))
}

fn snapshot() -> ChartResult<SnapshotPayload> {
    SnapshotPayload::from_json_str(
        r#"{
            "Spain": { "All": { "confirmed": 500, "population": 1000 } },
            "France": { "All": { "confirmed": 100, "population": 1000 } },
            "Atlantis": { "All": { "confirmed": 1, "population": 0 } }
        }"#,
    )
}

fn controller_with_log() -> (DashboardController, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut dashboard = DashboardController::new(DashboardConfig::default()).expect("controller");
    dashboard
        .register_observer(RecordingObserver::boxed("recorder", &log))
        .expect("register");
    (dashboard, log)
}

fn events(log: &EventLog) -> Vec<DashboardEvent> {
    log.borrow().iter().map(|(event, _)| *event).collect()
}

#[test]
fn starts_pending_on_default_view() {
    let (mut dashboard, log) = controller_with_log();
    assert_eq!(dashboard.active_view(), DashboardView::Animated);
    assert!(dashboard.is_mounted());
    assert_eq!(dashboard.history().status(), LoadStatus::Pending);
    assert!(dashboard.active_frame().expect("frame").is_none());

    let mut renderer = NullRenderer::default();
    assert!(!dashboard.render_active(&mut renderer).expect("render"));
    assert_eq!(renderer.frames_rendered, 0);
    assert!(events(&log).is_empty());
}

#[test]
fn history_load_populates_every_time_view() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(history(30));

    assert_eq!(dashboard.history().status(), LoadStatus::Ready);
    assert_eq!(dashboard.brush_view().raw_data().len(), 30);
    assert_eq!(dashboard.markers_view().data().len(), 30);
    assert_eq!(dashboard.animated_view().data().len(), 30);
    assert_eq!(events(&log), vec![DashboardEvent::HistoryLoaded { points_len: 30 }]);

    let mut renderer = NullRenderer::default();
    assert!(dashboard.render_active(&mut renderer).expect("render"));
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_polygon_count >= 1);
    assert_eq!(events(&log).last(), Some(&DashboardEvent::Rendered));
}

#[test]
fn failed_fetch_renders_nothing() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(Err(ChartError::Fetch("offline".to_owned())));
    dashboard.on_snapshot_loaded(Err(ChartError::Fetch("offline".to_owned())));

    assert_eq!(dashboard.history().status(), LoadStatus::Unavailable);
    assert_eq!(dashboard.snapshot().status(), LoadStatus::Unavailable);
    for view in DashboardView::ALL {
        assert!(dashboard.frame_for(view).expect("frame").is_none());
    }
    let mut renderer = NullRenderer::default();
    assert!(!dashboard.render_active(&mut renderer).expect("render"));
    assert_eq!(
        events(&log),
        vec![
            DashboardEvent::HistoryUnavailable,
            DashboardEvent::SnapshotUnavailable
        ]
    );
}

#[test]
fn undecodable_history_is_unavailable() {
    let (mut dashboard, _log) = controller_with_log();
    let payload =
        HistoryPayload::from_json_str(r#"{"All":{"dates":{"yesterday":1}}}"#).expect("payload");
    dashboard.on_history_loaded(Ok(payload));
    assert_eq!(dashboard.history().status(), LoadStatus::Unavailable);
}

#[test]
fn results_after_teardown_are_dropped() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.teardown();
    dashboard.teardown();
    dashboard.on_history_loaded(history(5));
    dashboard.on_snapshot_loaded(snapshot());

    assert!(!dashboard.is_mounted());
    assert_eq!(dashboard.history().status(), LoadStatus::Pending);
    assert_eq!(dashboard.snapshot().status(), LoadStatus::Pending);
    assert_eq!(events(&log), vec![DashboardEvent::TornDown]);
}

#[test]
fn pie_view_draws_one_arc_per_finite_region() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_snapshot_loaded(snapshot());
    dashboard.select_view(DashboardView::Pie);
    dashboard.select_view(DashboardView::Pie);

    let mut renderer = NullRenderer::default();
    assert!(dashboard.render_active(&mut renderer).expect("render"));
    assert_eq!(renderer.last_arc_count, 2);

    let recorded = events(&log);
    assert_eq!(
        recorded[..2],
        [
            DashboardEvent::SnapshotLoaded { categories_len: 3 },
            DashboardEvent::ViewSelected {
                view: DashboardView::Pie
            },
        ]
    );
}

#[test]
fn brush_drag_narrows_and_click_restores() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(history(30));
    dashboard.select_view(DashboardView::Brush);

    let (origin_x, origin_y) = dashboard.brush_view().layout().overview_origin();
    assert!(dashboard.drag_start(origin_x + 100.0, origin_y + 10.0));
    let range = dashboard
        .drag_move(origin_x + 600.0, origin_y + 50.0)
        .expect("drag move");
    assert!(range.is_some());
    let release = dashboard
        .drag_end(origin_x + 600.0, origin_y + 50.0)
        .expect("drag end");
    assert!(matches!(release, BrushRelease::Selected(_)));
    assert_eq!(dashboard.brush_view().filtered_data().len(), 12);
    assert_eq!(
        events(&log).last(),
        Some(&DashboardEvent::SelectionChanged { visible_len: 12 })
    );

    assert!(dashboard.drag_start(origin_x + 200.0, origin_y + 20.0));
    let release = dashboard
        .drag_end(origin_x + 200.0, origin_y + 20.0)
        .expect("click");
    assert_eq!(release, BrushRelease::Click);
    assert_eq!(dashboard.brush_view().filtered_data().len(), 30);
    assert!(dashboard.brush_view().selection().is_none());
    assert_eq!(events(&log).last(), Some(&DashboardEvent::SelectionCleared));
}

#[test]
fn brush_drag_within_click_tolerance_keeps_data() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(history(30));
    dashboard.select_view(DashboardView::Brush);
    let before = events(&log).len();

    let (origin_x, origin_y) = dashboard.brush_view().layout().overview_origin();
    assert!(dashboard.drag_start(origin_x + 100.0, origin_y + 10.0));
    for offset in [0.0, 0.5] {
        let range = dashboard
            .drag_move(origin_x + 100.0 + offset, origin_y + 10.0)
            .expect("drag move");
        assert!(range.is_none());
        assert_eq!(dashboard.brush_view().filtered_data().len(), 30);
    }
    assert_eq!(events(&log).len(), before);

    let range = dashboard
        .drag_move(origin_x + 600.0, origin_y + 50.0)
        .expect("drag move");
    assert!(range.is_some());
    assert_eq!(dashboard.brush_view().filtered_data().len(), 12);
}

#[test]
fn drag_outside_overview_or_on_other_views_is_ignored() {
    let (mut dashboard, _log) = controller_with_log();
    dashboard.on_history_loaded(history(10));

    assert!(!dashboard.drag_start(100.0, 100.0));
    dashboard.select_view(DashboardView::Brush);
    assert!(!dashboard.drag_start(5.0, 5.0));
    assert_eq!(
        dashboard.drag_end(5.0, 5.0).expect("release"),
        BrushRelease::Ignored
    );
}

#[test]
fn tooltip_follows_pointer_and_hides_on_leave() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(history(10));
    assert!(dashboard.pointer_move(200.0, 100.0).expect("move").is_none());

    dashboard.select_view(DashboardView::Brush);
    let left = dashboard.brush_view().layout().margin.left;
    let tooltip = dashboard
        .pointer_move(left + 1.0, 100.0)
        .expect("move")
        .expect("tooltip inside plot");
    assert_eq!(tooltip.anchor, dashboard.brush_view().raw_data()[0]);
    assert_eq!(dashboard.dashboard_context().tooltip, Some(tooltip));

    dashboard.pointer_leave();
    let (last_event, last_context) = *log.borrow().last().expect("event");
    assert_eq!(last_event, DashboardEvent::TooltipHidden);
    assert_eq!(last_context.tooltip, None);
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let (mut dashboard, log) = controller_with_log();
    assert!(
        dashboard
            .register_observer(RecordingObserver::boxed("recorder", &log))
            .is_err()
    );
    assert!(
        dashboard
            .register_observer(RecordingObserver::boxed("", &log))
            .is_err()
    );
    assert_eq!(dashboard.observer_count(), 1);

    assert!(dashboard.unregister_observer("recorder"));
    assert!(!dashboard.unregister_observer("recorder"));
    assert!(!dashboard.has_observer("recorder"));

    dashboard.select_view(DashboardView::Markers);
    assert!(events(&log).is_empty());
}

#[test]
fn context_reports_dataset_sizes() {
    let (mut dashboard, log) = controller_with_log();
    dashboard.on_history_loaded(history(7));
    dashboard.on_snapshot_loaded(snapshot());

    let (_, context) = *log.borrow().last().expect("event");
    assert_eq!(context.history_status, LoadStatus::Ready);
    assert_eq!(context.snapshot_status, LoadStatus::Ready);
    assert_eq!(context.history_len, 7);
    assert_eq!(context.visible_len, 7);
    assert_eq!(context.categories_len, 3);
    assert!(context.mounted);
}
