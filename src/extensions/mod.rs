//! Annotation layout and observer hooks built on top of the core geometry.

pub mod markers;
pub mod observers;

pub use markers::{
    DateMarker, MarkerLabelGeometry, MarkerPlacementConfig, PlacedMarker, place_markers,
};
pub use observers::{DashboardContext, DashboardEvent, DashboardObserver};
