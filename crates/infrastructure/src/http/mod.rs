pub mod backend_client;
pub mod pihole;

pub use backend_client::HttpSightingBackend;
pub use pihole::PiholeQueryLogSource;

use knockknock_domain::DomainError;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("knockknock/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainError::HttpClient(e.to_string()))
}

/// Hosts are configured bare (`pi.hole`, `10.0.0.2:9090`); prefix a scheme when missing.
pub(crate) fn base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}
