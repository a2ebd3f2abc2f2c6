use async_trait::async_trait;
use knockknock_domain::{DomainError, OwnerActivity, Sighting, SightingSummary, SightingWindow};

#[async_trait]
pub trait SightingRepository: Send + Sync {
    /// Append a sighting. Fails with `UnregisteredDevice` when the alias is unknown.
    async fn create(
        &self,
        alias: &str,
        last_activity_timestamp: i64,
    ) -> Result<Sighting, DomainError>;

    /// Distinct `(alias, timestamp)` pairs whose timestamp falls inside the window.
    async fn find_in_window(
        &self,
        window: SightingWindow,
    ) -> Result<Vec<SightingSummary>, DomainError>;

    /// Latest sighting per owner, over devices that have an owner.
    async fn last_activity_by_owner(&self) -> Result<Vec<OwnerActivity>, DomainError>;
}
