use crate::ports::SightingRepository;
use knockknock_domain::{DomainError, Knock, DEFAULT_ACTIVE_THRESHOLD_SECS};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: per-owner liveness derived from the latest sighting of their devices.
pub struct GetKnocksUseCase {
    repo: Arc<dyn SightingRepository>,
    active_threshold_secs: i64,
}

impl GetKnocksUseCase {
    pub fn new(repo: Arc<dyn SightingRepository>) -> Self {
        Self {
            repo,
            active_threshold_secs: DEFAULT_ACTIVE_THRESHOLD_SECS,
        }
    }

    pub fn with_active_threshold(mut self, secs: i64) -> Self {
        self.active_threshold_secs = secs;
        self
    }

    pub async fn execute(&self) -> Result<Vec<Knock>, DomainError> {
        self.execute_at(chrono::Utc::now().timestamp()).await
    }

    #[instrument(skip(self))]
    pub async fn execute_at(&self, now: i64) -> Result<Vec<Knock>, DomainError> {
        let knocks: Vec<Knock> = self
            .repo
            .last_activity_by_owner()
            .await?
            .into_iter()
            .map(|a| {
                Knock::evaluate(
                    a.owner,
                    a.last_activity_timestamp,
                    now,
                    self.active_threshold_secs,
                )
            })
            .collect();

        debug!(
            owners = knocks.len(),
            active = knocks.iter().filter(|k| k.active).count(),
            "Knocks evaluated"
        );

        Ok(knocks)
    }
}
