//! Tracing setup for hosts embedding the dashboard charts.
//!
//! Setup is opt-in. Hosts either call `init_default_tracing` or install
//! their own subscriber; the library only emits `tracing` events.

/// Environment variable consulted before falling back to `info`.
pub const LOG_FILTER_ENV: &str = "CASE_CHART_LOG";

/// Installs a compact fmt subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `CASE_CHART_LOG`, then `RUST_LOG`, then defaults
/// to `info`. Returns `false` when the feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
