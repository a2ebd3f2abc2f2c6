use knockknock_api::AppState;
use knockknock_infrastructure::repositories::{SqlDeviceRepository, SqlSightingRepository};
use sqlx::AnyPool;
use std::sync::Arc;

pub struct Repositories {
    pub device: Arc<SqlDeviceRepository>,
    pub sighting: Arc<SqlSightingRepository>,
}

impl Repositories {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            device: Arc::new(SqlDeviceRepository::new(pool.clone())),
            sighting: Arc::new(SqlSightingRepository::new(pool)),
        }
    }

    pub fn app_state(&self, knock_active_secs: i64) -> AppState {
        AppState::from_repositories(
            self.device.clone(),
            self.sighting.clone(),
            knock_active_secs,
        )
    }
}
