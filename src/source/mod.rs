//! Payload decoding for the statistics endpoints, plus an optional HTTP client.

pub mod history;
pub mod snapshot;

pub use history::{HISTORY_DATE_FORMAT, HistoryPayload, HistoryRecord, parse_history_date};
pub use snapshot::{RegionEntry, SnapshotPayload};

#[cfg(feature = "remote-fetch")]
mod client;
#[cfg(feature = "remote-fetch")]
pub use client::StatsClient;
