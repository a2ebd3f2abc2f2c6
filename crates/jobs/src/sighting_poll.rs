use knockknock_application::use_cases::{PollQueryLogUseCase, PollSummary};
use knockknock_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Runs a poll cycle every `interval`, starting immediately.
pub struct SightingPollJob {
    poll: Arc<PollQueryLogUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl SightingPollJob {
    pub fn new(poll: Arc<PollQueryLogUseCase>, interval: Duration) -> Self {
        Self {
            poll,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// One cycle with its outcome logged. A failed cycle never stops the job.
    pub async fn run_once(&self) -> Result<PollSummary, DomainError> {
        match self.poll.execute().await {
            Ok(summary) => {
                for failure in &summary.report.failures {
                    warn!(alias = %failure.alias, error = %failure.error, "Device report failed");
                }
                info!(
                    from = summary.from,
                    to = summary.to,
                    devices = summary.devices,
                    recorded = summary.report.recorded.len(),
                    failed = summary.report.failures.len(),
                    "Poll cycle complete"
                );
                Ok(summary)
            }
            Err(e) => {
                error!(error = %e, "Poll cycle failed");
                Err(e)
            }
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting sighting poll job"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("SightingPollJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let _ = self.run_once().await;
                }
            }
        }
    }
}
