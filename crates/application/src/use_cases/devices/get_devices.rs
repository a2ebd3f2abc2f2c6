use crate::ports::DeviceRepository;
use knockknock_domain::{Device, DomainError};
use std::sync::Arc;

pub struct GetDevicesUseCase {
    repo: Arc<dyn DeviceRepository>,
}

impl GetDevicesUseCase {
    pub fn new(repo: Arc<dyn DeviceRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Device>, DomainError> {
        self.repo.get_all().await
    }
}
