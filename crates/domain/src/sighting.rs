use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One observation of a device. Sightings are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: i64,
    pub alias: Arc<str>,
    pub last_activity_timestamp: i64,
    /// Epoch seconds at which the row was written.
    pub current_timestamp: i64,
}

/// Time range for sighting queries, in epoch seconds. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SightingWindow {
    pub from: i64,
    pub to: Option<i64>,
}

impl SightingWindow {
    pub fn open(from: i64) -> Self {
        Self { from, to: None }
    }

    pub fn closed(from: i64, to: i64) -> Self {
        Self { from, to: Some(to) }
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.from && self.to.map_or(true, |to| timestamp <= to)
    }

    pub fn is_closed(&self) -> bool {
        self.to.is_some()
    }
}

/// A distinct `(alias, last_activity_timestamp)` pair as returned by window queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingSummary {
    pub alias: Arc<str>,
    pub last_activity_timestamp: i64,
}
