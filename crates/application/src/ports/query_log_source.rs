use async_trait::async_trait;
use knockknock_domain::DomainError;
use serde_json::Value;

/// Upstream DNS query log, e.g. a Pi-hole appliance.
#[async_trait]
pub trait QueryLogSource: Send + Sync {
    /// Raw rows logged between `from` and `to` (epoch seconds). Rows are left
    /// unparsed so malformed ones can be counted downstream.
    async fn fetch(&self, from: i64, to: i64) -> Result<Vec<Value>, DomainError>;
}
