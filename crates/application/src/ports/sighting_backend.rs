use async_trait::async_trait;
use knockknock_domain::{Device, DomainError, Sighting};

/// The backend the poller reports to.
#[async_trait]
pub trait SightingBackend: Send + Sync {
    /// Idempotent: returns the existing device unchanged if already registered.
    async fn register_device(&self, alias: &str) -> Result<Device, DomainError>;

    /// Not idempotent: every call appends a new sighting.
    async fn record_sighting(&self, alias: &str, timestamp: i64) -> Result<Sighting, DomainError>;
}
