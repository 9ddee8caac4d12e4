use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::date_to_unix_seconds;
use crate::core::{DataPoint, sort_by_time};
use crate::error::{ChartError, ChartResult};

/// Date keys of the history payload, e.g. `3/14/2020`.
pub const HISTORY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Cumulative history for one country: `{ "All": { "dates": { .. } } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(rename = "All")]
    pub all: HistoryRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub dates: IndexMap<String, f64>,
}

impl HistoryPayload {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Decode(format!("history payload: {e}")))
    }

    /// Samples sorted ascending by time.
    pub fn to_points(&self) -> ChartResult<Vec<DataPoint>> {
        let mut points = Vec::with_capacity(self.all.dates.len());
        for (date, value) in &self.all.dates {
            points.push(DataPoint::new(parse_history_date(date)?, *value));
        }
        sort_by_time(&mut points);
        debug!(count = points.len(), "decoded history points");
        Ok(points)
    }
}

/// Unix seconds at UTC midnight for a `M/D/YYYY` key.
pub fn parse_history_date(date: &str) -> ChartResult<f64> {
    NaiveDate::parse_from_str(date.trim(), HISTORY_DATE_FORMAT)
        .map(date_to_unix_seconds)
        .map_err(|e| ChartError::Decode(format!("history date `{date}`: {e}")))
}
