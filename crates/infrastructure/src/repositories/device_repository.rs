use super::map_read_error;
use async_trait::async_trait;
use knockknock_application::ports::DeviceRepository;
use knockknock_domain::{Device, DomainError};
use sqlx::AnyPool;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

type DeviceRow = (String, Option<String>, Option<String>);

pub struct SqlDeviceRepository {
    pool: AnyPool,
}

impl SqlDeviceRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    fn row_to_device(row: DeviceRow) -> Device {
        let (alias, ip_address, owner) = row;
        Device::with_details(
            Arc::from(alias.as_str()),
            ip_address.map(|s| Arc::from(s.as_str())),
            owner.map(|s| Arc::from(s.as_str())),
        )
    }

    async fn fetch(&self, alias: &str) -> Result<Option<Device>, DomainError> {
        let row = sqlx::query_as::<_, DeviceRow>(
            "SELECT alias, ip_address, owner FROM device WHERE alias = $1",
        )
        .bind(alias)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, alias = %alias, "Failed to query device");
            map_read_error(e)
        })?;

        Ok(row.map(Self::row_to_device))
    }
}

#[async_trait]
impl DeviceRepository for SqlDeviceRepository {
    #[instrument(skip(self))]
    async fn get_or_create(&self, alias: &str) -> Result<Device, DomainError> {
        let result = sqlx::query("INSERT INTO device (alias) VALUES ($1) ON CONFLICT (alias) DO NOTHING")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, alias = %alias, "Failed to insert device");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() > 0 {
            info!(alias = %alias, "Registered new device");
        } else {
            debug!(alias = %alias, "Device already registered");
        }

        self.fetch(alias).await?.ok_or_else(|| {
            DomainError::Integrity(format!("device '{}' vanished after registration", alias))
        })
    }

    #[instrument(skip(self))]
    async fn get_by_alias(&self, alias: &str) -> Result<Option<Device>, DomainError> {
        self.fetch(alias).await
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Device>, DomainError> {
        let rows = sqlx::query_as::<_, DeviceRow>(
            "SELECT alias, ip_address, owner FROM device ORDER BY alias ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all devices");
            map_read_error(e)
        })?;

        Ok(rows.into_iter().map(Self::row_to_device).collect())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        alias: &str,
        ip_address: Option<String>,
        owner: Option<String>,
    ) -> Result<Device, DomainError> {
        let result = sqlx::query("UPDATE device SET ip_address = $1, owner = $2 WHERE alias = $3")
            .bind(ip_address)
            .bind(owner)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, alias = %alias, "Failed to update device");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DeviceNotFound(alias.to_string()));
        }

        self.fetch(alias)
            .await?
            .ok_or_else(|| DomainError::DeviceNotFound(alias.to_string()))
    }
}
