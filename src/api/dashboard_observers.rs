use crate::error::{ChartError, ChartResult};
use crate::extensions::{DashboardContext, DashboardEvent, DashboardObserver};
use crate::interaction::InteractionMode;

use super::{DashboardController, DashboardView};

impl DashboardController {
    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn DashboardObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn dashboard_context(&self) -> DashboardContext {
        let interaction = match self.active {
            DashboardView::Brush => Some(self.brush.interaction()),
            DashboardView::Markers => Some(self.markers.interaction()),
            DashboardView::Animated | DashboardView::Pie => None,
        };
        DashboardContext {
            active_view: self.active,
            mounted: self.mounted,
            history_status: self.history.status(),
            snapshot_status: self.snapshot.status(),
            history_len: self.history.ready().map_or(0, Vec::len),
            visible_len: self.brush.filtered_data().len(),
            categories_len: self.snapshot.ready().map_or(0, Vec::len),
            interaction_mode: interaction.map_or(InteractionMode::Idle, |state| state.mode()),
            tooltip: interaction.and_then(|state| state.tooltip()),
        }
    }

    pub(super) fn emit_dashboard_event(&mut self, event: DashboardEvent) {
        let context = self.dashboard_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
