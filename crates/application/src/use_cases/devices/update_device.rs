use crate::ports::DeviceRepository;
use knockknock_domain::{Device, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UpdateDeviceUseCase {
    repo: Arc<dyn DeviceRepository>,
}

impl UpdateDeviceUseCase {
    pub fn new(repo: Arc<dyn DeviceRepository>) -> Self {
        Self { repo }
    }

    /// Both fields are replaced; `None` clears the stored value.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        alias: &str,
        ip_address: Option<String>,
        owner: Option<String>,
    ) -> Result<Device, DomainError> {
        Device::validate_alias(alias).map_err(DomainError::Validation)?;

        let device = self.repo.update(alias, ip_address, owner).await?;

        info!(
            alias = %device.alias,
            ip_address = ?device.ip_address,
            owner = ?device.owner,
            "Device updated"
        );

        Ok(device)
    }
}
