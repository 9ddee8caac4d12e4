use std::time::Duration;

use tracing::{debug, warn};

use crate::api::DashboardConfig;
use crate::error::{ChartError, ChartResult};

use super::{HistoryPayload, SnapshotPayload};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Blocking client for the two statistics endpoints.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::blocking::Client,
    history_url: String,
    snapshot_url: String,
}

impl StatsClient {
    pub fn new(config: &DashboardConfig) -> ChartResult<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: &DashboardConfig, timeout: Duration) -> ChartResult<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChartError::Fetch(format!("http client: {e}")))?;
        Ok(Self {
            client,
            history_url: config.history_url.clone(),
            snapshot_url: config.snapshot_url.clone(),
        })
    }

    pub fn fetch_history(&self) -> ChartResult<HistoryPayload> {
        let body = self.get_text(&self.history_url)?;
        HistoryPayload::from_json_str(&body)
    }

    pub fn fetch_snapshot(&self) -> ChartResult<SnapshotPayload> {
        let body = self.get_text(&self.snapshot_url)?;
        SnapshotPayload::from_json_str(&body)
    }

    /// Fetches both payloads concurrently; each result stands on its own.
    pub fn fetch_all(&self) -> (ChartResult<HistoryPayload>, ChartResult<SnapshotPayload>) {
        rayon::join(|| self.fetch_history(), || self.fetch_snapshot())
    }

    fn get_text(&self, url: &str) -> ChartResult<String> {
        debug!(url, "fetching payload");
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                warn!(url, error = %e, "fetch failed");
                ChartError::Fetch(format!("`{url}`: {e}"))
            })
    }
}
