use crate::ports::DeviceRepository;
use knockknock_domain::{Device, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: register a device alias, returning the stored record.
/// Registering an alias that already exists returns it unchanged.
pub struct RegisterDeviceUseCase {
    repo: Arc<dyn DeviceRepository>,
}

impl RegisterDeviceUseCase {
    pub fn new(repo: Arc<dyn DeviceRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, alias: &str) -> Result<Device, DomainError> {
        Device::validate_alias(alias).map_err(DomainError::Validation)?;

        let device = self.repo.get_or_create(alias).await?;
        debug!(alias = %device.alias, "Device registered");

        Ok(device)
    }
}
