use async_trait::async_trait;
use knockknock_domain::{Device, DomainError};

#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Get the device with this alias, creating it with empty details if unseen.
    /// Never overwrites an existing record.
    async fn get_or_create(&self, alias: &str) -> Result<Device, DomainError>;

    async fn get_by_alias(&self, alias: &str) -> Result<Option<Device>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Device>, DomainError>;

    /// Replace the IP address and owner of an existing device.
    async fn update(
        &self,
        alias: &str,
        ip_address: Option<String>,
        owner: Option<String>,
    ) -> Result<Device, DomainError>;
}
