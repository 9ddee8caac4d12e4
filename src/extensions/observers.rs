use serde::{Deserialize, Serialize};

use crate::api::{DashboardView, LoadStatus};
use crate::core::TooltipState;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardContext {
    pub active_view: DashboardView,
    pub mounted: bool,
    pub history_status: LoadStatus,
    pub snapshot_status: LoadStatus,
    pub history_len: usize,
    pub visible_len: usize,
    pub categories_len: usize,
    pub interaction_mode: InteractionMode,
    pub tooltip: Option<TooltipState>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    ViewSelected { view: DashboardView },
    HistoryLoaded { points_len: usize },
    HistoryUnavailable,
    SnapshotLoaded { categories_len: usize },
    SnapshotUnavailable,
    SelectionChanged { visible_len: usize },
    SelectionCleared,
    TooltipMoved { x_px: f64, y_px: f64 },
    TooltipHidden,
    Rendered,
    TornDown,
}

/// Hook interface for code that follows dashboard state without owning it.
pub trait DashboardObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: DashboardEvent, context: DashboardContext);
}
