use crate::ports::SightingRepository;
use knockknock_domain::{DomainError, SightingSummary, SightingWindow};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetSightingsUseCase {
    repo: Arc<dyn SightingRepository>,
}

impl GetSightingsUseCase {
    pub fn new(repo: Arc<dyn SightingRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        window: SightingWindow,
    ) -> Result<Vec<SightingSummary>, DomainError> {
        let sightings = self.repo.find_in_window(window).await?;
        debug!(count = sightings.len(), "Sightings retrieved");
        Ok(sightings)
    }
}
