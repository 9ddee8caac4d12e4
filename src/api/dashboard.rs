use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{CategoryDatapoint, DataPoint, SelectionRange, TooltipState};
use crate::error::ChartResult;
use crate::extensions::{DashboardEvent, DashboardObserver};
use crate::interaction::BrushRelease;
use crate::render::{RenderFrame, Renderer};
use crate::source::{HistoryPayload, SnapshotPayload};

use super::{
    AnimatedChartView, BrushChartView, DashboardConfig, MarkersChartView, PieChartView,
};

/// Lifecycle of one fetched dataset.
///
/// "Still loading" and "failed" render the same way: nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    Unavailable,
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match self {
            Self::Pending => LoadStatus::Pending,
            Self::Ready(_) => LoadStatus::Ready,
            Self::Unavailable => LoadStatus::Unavailable,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending | Self::Unavailable => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    Pending,
    Ready,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardView {
    #[default]
    Animated,
    Brush,
    Markers,
    Pie,
}

impl DashboardView {
    pub const ALL: [Self; 4] = [Self::Animated, Self::Brush, Self::Markers, Self::Pie];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Animated => "animated",
            Self::Brush => "brush",
            Self::Markers => "markers",
            Self::Pie => "pie",
        }
    }
}

/// Owner of the fetched datasets, the active view and the view states.
///
/// All mutation goes through `&mut self`; hosts serialize their events
/// (fetch completions, pointer input) onto the controller.
pub struct DashboardController {
    pub(super) config: DashboardConfig,
    pub(super) active: DashboardView,
    pub(super) mounted: bool,
    pub(super) history: LoadState<Vec<DataPoint>>,
    pub(super) snapshot: LoadState<Vec<CategoryDatapoint>>,
    pub(super) animated: AnimatedChartView,
    pub(super) brush: BrushChartView,
    pub(super) markers: MarkersChartView,
    pub(super) pie: PieChartView,
    pub(super) animation_progress: f64,
    pub(super) observers: Vec<Box<dyn DashboardObserver>>,
}

impl DashboardController {
    pub fn new(config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let markers = MarkersChartView::new(config.markers, config.wave_markers.clone())?
            .with_placement(config.marker_placement)?;
        Ok(Self {
            animated: AnimatedChartView::new(config.animated)?,
            brush: BrushChartView::new(config.brush)?,
            markers,
            pie: PieChartView::new(config.pie)?.with_style(config.pie_style),
            config,
            active: DashboardView::default(),
            mounted: true,
            history: LoadState::Pending,
            snapshot: LoadState::Pending,
            animation_progress: 1.0,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn active_view(&self) -> DashboardView {
        self.active
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn history(&self) -> &LoadState<Vec<DataPoint>> {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> &LoadState<Vec<CategoryDatapoint>> {
        &self.snapshot
    }

    #[must_use]
    pub fn animated_view(&self) -> &AnimatedChartView {
        &self.animated
    }

    #[must_use]
    pub fn brush_view(&self) -> &BrushChartView {
        &self.brush
    }

    #[must_use]
    pub fn markers_view(&self) -> &MarkersChartView {
        &self.markers
    }

    #[must_use]
    pub fn pie_view(&self) -> &PieChartView {
        &self.pie
    }

    pub fn select_view(&mut self, view: DashboardView) {
        if self.active == view {
            return;
        }
        debug!(from = self.active.name(), to = view.name(), "select view");
        self.active = view;
        self.emit_dashboard_event(DashboardEvent::ViewSelected { view });
    }

    /// Delivers the history fetch result. Ignored after `teardown`.
    pub fn on_history_loaded(&mut self, result: ChartResult<HistoryPayload>) {
        if !self.mounted {
            debug!("ignoring history result after teardown");
            return;
        }
        match result.and_then(|payload| payload.to_points()) {
            Ok(points) => {
                info!(count = points.len(), "history loaded");
                if let Err(err) = self.animated.set_data(points.clone()) {
                    warn!(error = %err, "animated view rejected history");
                }
                self.brush.set_data(points.clone());
                self.markers.set_data(points.clone());
                self.animation_progress = 0.0;
                let points_len = points.len();
                self.history = LoadState::Ready(points);
                self.emit_dashboard_event(DashboardEvent::HistoryLoaded { points_len });
            }
            Err(err) => {
                warn!(error = %err, "history unavailable");
                self.history = LoadState::Unavailable;
                self.emit_dashboard_event(DashboardEvent::HistoryUnavailable);
            }
        }
    }

    /// Delivers the snapshot fetch result. Ignored after `teardown`.
    pub fn on_snapshot_loaded(&mut self, result: ChartResult<SnapshotPayload>) {
        if !self.mounted {
            debug!("ignoring snapshot result after teardown");
            return;
        }
        match result {
            Ok(payload) => {
                let categories = payload.to_categories();
                info!(count = categories.len(), "snapshot loaded");
                self.pie.set_categories(categories.clone());
                let categories_len = categories.len();
                self.snapshot = LoadState::Ready(categories);
                self.emit_dashboard_event(DashboardEvent::SnapshotLoaded { categories_len });
            }
            Err(err) => {
                warn!(error = %err, "snapshot unavailable");
                self.snapshot = LoadState::Unavailable;
                self.emit_dashboard_event(DashboardEvent::SnapshotUnavailable);
            }
        }
    }

    /// Unmounts the dashboard; later fetch results are dropped.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        debug!("dashboard torn down");
        self.emit_dashboard_event(DashboardEvent::TornDown);
    }

    /// Progress of the animated view's tick transition, in `[0, 1]`.
    pub fn set_animation_progress(&mut self, progress: f64) {
        self.animation_progress = if progress.is_nan() {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Frame of the active view, or `None` while its dataset is not ready.
    pub fn active_frame(&self) -> ChartResult<Option<RenderFrame>> {
        self.frame_for(self.active)
    }

    pub fn frame_for(&self, view: DashboardView) -> ChartResult<Option<RenderFrame>> {
        let ready = match view {
            DashboardView::Pie => self.snapshot.is_ready(),
            _ => self.history.is_ready(),
        };
        if !ready {
            return Ok(None);
        }
        let frame = match view {
            DashboardView::Animated => self.animated.render_frame(self.animation_progress)?,
            DashboardView::Brush => self.brush.render_frame()?,
            DashboardView::Markers => self.markers.render_frame()?,
            DashboardView::Pie => self.pie.render_frame()?,
        };
        Ok(Some(frame))
    }

    /// Renders the active view. Returns `false` when there was nothing to draw.
    pub fn render_active<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<bool> {
        let Some(frame) = self.active_frame()? else {
            debug!(view = self.active.name(), "no data yet, nothing rendered");
            return Ok(false);
        };
        renderer.render(&frame)?;
        self.emit_dashboard_event(DashboardEvent::Rendered);
        Ok(true)
    }

    /// Pointer move in view coordinates; drives the tooltip of hoverable views.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<TooltipState>> {
        let tooltip = match self.active {
            DashboardView::Brush => self.brush.pointer_move(x, y)?,
            DashboardView::Markers => self.markers.pointer_move(x, y)?,
            DashboardView::Animated | DashboardView::Pie => return Ok(None),
        };
        let event = match tooltip {
            Some(state) => DashboardEvent::TooltipMoved {
                x_px: state.x_px,
                y_px: state.y_px,
            },
            None => DashboardEvent::TooltipHidden,
        };
        self.emit_dashboard_event(event);
        Ok(tooltip)
    }

    pub fn pointer_leave(&mut self) {
        match self.active {
            DashboardView::Brush => self.brush.pointer_leave(),
            DashboardView::Markers => self.markers.pointer_leave(),
            DashboardView::Animated | DashboardView::Pie => return,
        }
        self.emit_dashboard_event(DashboardEvent::TooltipHidden);
    }

    /// Starts a brush gesture when the brush view is active.
    pub fn drag_start(&mut self, x: f64, y: f64) -> bool {
        self.active == DashboardView::Brush && self.brush.drag_start(x, y)
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> ChartResult<Option<SelectionRange>> {
        if self.active != DashboardView::Brush {
            return Ok(None);
        }
        let range = self.brush.drag_move(x, y)?;
        if range.is_some() {
            self.emit_dashboard_event(DashboardEvent::SelectionChanged {
                visible_len: self.brush.filtered_data().len(),
            });
        }
        Ok(range)
    }

    pub fn drag_end(&mut self, x: f64, y: f64) -> ChartResult<BrushRelease> {
        if self.active != DashboardView::Brush {
            return Ok(BrushRelease::Ignored);
        }
        let release = self.brush.drag_end(x, y)?;
        match release {
            BrushRelease::Click => self.emit_dashboard_event(DashboardEvent::SelectionCleared),
            BrushRelease::Selected(_) => {
                self.emit_dashboard_event(DashboardEvent::SelectionChanged {
                    visible_len: self.brush.filtered_data().len(),
                });
            }
            BrushRelease::Ignored => {}
        }
        Ok(release)
    }
}
