use super::{base_url, build_client};
use async_trait::async_trait;
use knockknock_application::ports::QueryLogSource;
use knockknock_domain::DomainError;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Deserialize)]
struct QueryLogEnvelope {
    data: Vec<Value>,
}

/// Reads the query log of a Pi-hole through its legacy `api.php` endpoint.
pub struct PiholeQueryLogSource {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PiholeQueryLogSource {
    pub fn new(host: &str, token: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = build_client(timeout)?;
        Ok(Self {
            client,
            endpoint: format!("{}/admin/api.php", base_url(host)),
            token: token.into(),
        })
    }
}

#[async_trait]
impl QueryLogSource for PiholeQueryLogSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, from: i64, to: i64) -> Result<Vec<Value>, DomainError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("getAllQueries", String::new())])
            .query(&[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("auth", self.token.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Query log request failed");
                DomainError::Fetch(format!("request error: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Fetch(format!("HTTP {}", status.as_u16())));
        }

        let envelope: QueryLogEnvelope = response
            .json()
            .await
            .map_err(|e| DomainError::Fetch(format!("unexpected response body: {}", e.without_url())))?;

        debug!(rows = envelope.data.len(), "Fetched query log");
        Ok(envelope.data)
    }
}
