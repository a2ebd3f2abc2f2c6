use crate::ports::SightingRepository;
use knockknock_domain::{Device, DomainError, Sighting};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: append one sighting for an already registered device.
pub struct RecordSightingUseCase {
    repo: Arc<dyn SightingRepository>,
}

impl RecordSightingUseCase {
    pub fn new(repo: Arc<dyn SightingRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        alias: &str,
        last_activity_timestamp: i64,
    ) -> Result<Sighting, DomainError> {
        Device::validate_alias(alias).map_err(DomainError::Validation)?;

        let sighting = self.repo.create(alias, last_activity_timestamp).await?;
        debug!(
            id = sighting.id,
            alias = %sighting.alias,
            last_activity_timestamp,
            "Sighting recorded"
        );

        Ok(sighting)
    }
}
