use super::database::DatabaseConfig;
use super::env::{lookup_var, optional_parsed};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::knock::DEFAULT_ACTIVE_THRESHOLD_SECS;
use std::net::SocketAddr;

/// Configuration of the REST backend (`knockknock serve`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub bind_address: SocketAddr,
    pub database: DatabaseConfig,
    /// Seconds since last activity under which an owner counts as active.
    pub knock_active_secs: i64,
    pub logging: LoggingConfig,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup_var(&lookup, "BIND_ADDRESS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("BIND_ADDRESS", raw))?,
            None => default_bind_address(),
        };

        let config = Self {
            bind_address,
            database: DatabaseConfig::from_lookup(&lookup)?,
            knock_active_secs: optional_parsed(
                &lookup,
                "KNOCK_ACTIVE_SECS",
                DEFAULT_ACTIVE_THRESHOLD_SECS,
            )?,
            logging: LoggingConfig::from_lookup(&lookup),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.knock_active_secs <= 0 {
            return Err(ConfigError::Validation(
                "KNOCK_ACTIVE_SECS must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 9090))
}
