use super::{base_url, build_client};
use async_trait::async_trait;
use knockknock_application::ports::SightingBackend;
use knockknock_domain::{Device, DomainError, Sighting};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct RegisterDeviceBody<'a> {
    alias: &'a str,
}

#[derive(Serialize)]
struct RecordSightingBody<'a> {
    alias: &'a str,
    timestamp: i64,
}

/// Reports sightings to the KnockKnock REST backend.
pub struct HttpSightingBackend {
    client: reqwest::Client,
    devices_url: String,
    sightings_url: String,
}

impl HttpSightingBackend {
    pub fn new(host: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = build_client(timeout)?;
        let base = base_url(host);
        Ok(Self {
            client,
            devices_url: format!("{}/devices", base),
            sightings_url: format!("{}/sightings", base),
        })
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, String>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request error: {}", e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {} from {}", status.as_u16(), url));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("unexpected response body: {}", e.without_url()))
    }
}

#[async_trait]
impl SightingBackend for HttpSightingBackend {
    #[instrument(skip(self))]
    async fn register_device(&self, alias: &str) -> Result<Device, DomainError> {
        let device: Device = self
            .post(&self.devices_url, &RegisterDeviceBody { alias })
            .await
            .map_err(|reason| DomainError::Registration {
                alias: alias.to_string(),
                reason,
            })?;
        debug!(alias = %device.alias, "Device registered");
        Ok(device)
    }

    #[instrument(skip(self))]
    async fn record_sighting(&self, alias: &str, timestamp: i64) -> Result<Sighting, DomainError> {
        let sighting: Sighting = self
            .post(&self.sightings_url, &RecordSightingBody { alias, timestamp })
            .await
            .map_err(|reason| DomainError::SightingWrite {
                alias: alias.to_string(),
                reason,
            })?;
        debug!(alias = %sighting.alias, id = sighting.id, "Sighting recorded");
        Ok(sighting)
    }
}
