use knockknock_domain::DeviceActivity;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Most recent activity per device over one batch of query-log rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastSeen {
    by_device: BTreeMap<Arc<str>, i64>,
    rows: usize,
    parse_failures: usize,
}

impl LastSeen {
    pub fn observe(&mut self, activity: DeviceActivity) {
        self.rows += 1;
        self.by_device
            .entry(activity.device_key)
            .and_modify(|ts| *ts = (*ts).max(activity.observed_at))
            .or_insert(activity.observed_at);
    }

    fn skip(&mut self) {
        self.rows += 1;
        self.parse_failures += 1;
    }

    pub fn get(&self, device_key: &str) -> Option<i64> {
        self.by_device.get(device_key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, i64)> {
        self.by_device.iter().map(|(k, ts)| (k, *ts))
    }

    pub fn len(&self) -> usize {
        self.by_device.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_device.is_empty()
    }

    /// Total rows folded, including skipped ones.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn parse_failures(&self) -> usize {
        self.parse_failures
    }
}

/// Max-by-key fold over raw query-log rows. Malformed rows are counted and skipped.
pub struct LastSeenReducer;

impl LastSeenReducer {
    pub fn reduce<'a, I>(rows: I) -> LastSeen
    where
        I: IntoIterator<Item = &'a Value>,
    {
        rows.into_iter()
            .fold(LastSeen::default(), |mut acc, row| {
                match DeviceActivity::from_row(row) {
                    Ok(activity) => acc.observe(activity),
                    Err(e) => {
                        debug!(error = %e, row = %row, "Skipping malformed query log row");
                        acc.skip();
                    }
                }
                acc
            })
    }
}
