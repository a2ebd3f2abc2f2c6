use super::report_sightings::{ReportSightingsUseCase, SightingReport};
use crate::ports::QueryLogSource;
use crate::services::LastSeenReducer;
use knockknock_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const DEFAULT_WINDOW_SECS: i64 = 3600;

#[derive(Debug, Clone)]
pub struct PollSummary {
    pub from: i64,
    pub to: i64,
    pub rows: usize,
    pub parse_failures: usize,
    pub devices: usize,
    pub report: SightingReport,
}

/// Use case: one poll cycle. Fetch the query log for the trailing window,
/// reduce it to the last activity per device, and report the result.
pub struct PollQueryLogUseCase {
    source: Arc<dyn QueryLogSource>,
    reporter: Arc<ReportSightingsUseCase>,
    window_secs: i64,
}

impl PollQueryLogUseCase {
    pub fn new(source: Arc<dyn QueryLogSource>, reporter: Arc<ReportSightingsUseCase>) -> Self {
        Self {
            source,
            reporter,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }

    pub fn with_window(mut self, window_secs: i64) -> Self {
        self.window_secs = window_secs;
        self
    }

    pub async fn execute(&self) -> Result<PollSummary, DomainError> {
        self.execute_at(chrono::Utc::now().timestamp()).await
    }

    /// A fetch failure aborts the cycle; per-device failures end up in the report.
    #[instrument(skip(self))]
    pub async fn execute_at(&self, now: i64) -> Result<PollSummary, DomainError> {
        let from = now - self.window_secs;
        let rows = self.source.fetch(from, now).await?;

        let last_seen = LastSeenReducer::reduce(&rows);
        if last_seen.parse_failures() > 0 {
            warn!(
                parse_failures = last_seen.parse_failures(),
                rows = last_seen.rows(),
                "Skipped malformed query log rows"
            );
        }
        info!(
            rows = last_seen.rows(),
            devices = last_seen.len(),
            "Received DNS queries"
        );

        let report = self.reporter.execute(&last_seen).await;

        Ok(PollSummary {
            from,
            to: now,
            rows: last_seen.rows(),
            parse_failures: last_seen.parse_failures(),
            devices: last_seen.len(),
            report,
        })
    }
}
