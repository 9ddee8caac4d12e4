//! case-chart: chart geometry and render frames for a confirmed-cases dashboard.
//!
//! The crate keeps a strict split: `core` holds pure scale, locator, brush
//! and pie math; `api` composes it into views and a dashboard controller;
//! `render` turns frames into pixels; `source` decodes the statistics
//! payloads.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod source;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardController, DashboardView};
pub use error::{ChartError, ChartResult};
