use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Devices seen within this many seconds count as active.
pub const DEFAULT_ACTIVE_THRESHOLD_SECS: i64 = 3600;

/// Liveness of one owner: the most recent activity across all of their devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knock {
    pub owner: Arc<str>,
    pub active: bool,
    pub last_activity_timestamp: i64,
}

impl Knock {
    pub fn evaluate(
        owner: Arc<str>,
        last_activity_timestamp: i64,
        now: i64,
        threshold_secs: i64,
    ) -> Self {
        Self {
            owner,
            active: Self::is_active(last_activity_timestamp, now, threshold_secs),
            last_activity_timestamp,
        }
    }

    pub fn is_active(last_activity_timestamp: i64, now: i64, threshold_secs: i64) -> bool {
        now - last_activity_timestamp < threshold_secs
    }

    /// Local-time rendering of the last activity, e.g. `Sun Jul  8 00:34:59 2001`.
    pub fn last_activity_time(&self) -> String {
        Local
            .timestamp_opt(self.last_activity_timestamp, 0)
            .single()
            .map(|dt| dt.format("%c").to_string())
            .unwrap_or_default()
    }
}

/// Most recent sighting across all devices of one owner, before liveness is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerActivity {
    pub owner: Arc<str>,
    pub last_activity_timestamp: i64,
}
