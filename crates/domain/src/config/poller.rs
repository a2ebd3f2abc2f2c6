use super::env::{optional_parsed, required, required_parsed};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use std::time::Duration;

/// One week.
const MAX_FREQUENCY_MINUTES: u64 = 7 * 24 * 60;

/// Configuration of the Pi-hole poller (`knockknock poll`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    pub pihole_host: String,
    pub pihole_token: String,
    pub backend_host: String,
    pub frequency_minutes: u64,
    /// Length of the query-log window fetched each cycle.
    pub window_secs: i64,
    pub request_timeout_secs: u64,
    pub report_concurrency: usize,
    pub logging: LoggingConfig,
}

impl PollerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            pihole_host: required(&lookup, "PIHOLE_HOST")?,
            pihole_token: required(&lookup, "PIHOLE_TOKEN")?,
            backend_host: required(&lookup, "BACKEND_HOST")?,
            frequency_minutes: required_parsed(&lookup, "FREQUENCY_MINUTES")?,
            window_secs: optional_parsed(&lookup, "POLL_WINDOW_SECS", default_window_secs())?,
            request_timeout_secs: optional_parsed(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                default_request_timeout_secs(),
            )?,
            report_concurrency: optional_parsed(
                &lookup,
                "REPORT_CONCURRENCY",
                default_report_concurrency(),
            )?,
            logging: LoggingConfig::from_lookup(&lookup),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frequency_minutes == 0 {
            return Err(ConfigError::Validation(
                "FREQUENCY_MINUTES must be at least 1".to_string(),
            ));
        }
        if self.frequency_minutes > MAX_FREQUENCY_MINUTES {
            return Err(ConfigError::Validation(format!(
                "FREQUENCY_MINUTES must be at most {}",
                MAX_FREQUENCY_MINUTES
            )));
        }
        if self.window_secs <= 0 {
            return Err(ConfigError::Validation(
                "POLL_WINDOW_SECS must be positive".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        if self.report_concurrency == 0 {
            return Err(ConfigError::Validation(
                "REPORT_CONCURRENCY must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.frequency_minutes.saturating_mul(60))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_window_secs() -> i64 {
    3600
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_report_concurrency() -> usize {
    4
}
