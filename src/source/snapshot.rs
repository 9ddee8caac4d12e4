use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CategoryDatapoint, RegionTotals, derive_categories};
use crate::error::{ChartError, ChartResult};

/// Current totals per region: `{ "<region>": { "All": { .. } } }`.
///
/// Region order is the payload order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotPayload {
    pub regions: IndexMap<String, RegionEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    #[serde(rename = "All", default)]
    pub all: Option<RegionTotals>,
}

impl SnapshotPayload {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Decode(format!("snapshot payload: {e}")))
    }

    /// Regions that carry an `All` aggregate, in payload order.
    #[must_use]
    pub fn region_totals(&self) -> IndexMap<String, RegionTotals> {
        let totals: IndexMap<String, RegionTotals> = self
            .regions
            .iter()
            .filter_map(|(region, entry)| entry.all.map(|all| (region.clone(), all)))
            .collect();
        if totals.len() != self.regions.len() {
            debug!(
                regions = self.regions.len(),
                with_totals = totals.len(),
                "snapshot regions without aggregate skipped"
            );
        }
        totals
    }

    #[must_use]
    pub fn to_categories(&self) -> Vec<CategoryDatapoint> {
        derive_categories(&self.region_totals())
    }
}
