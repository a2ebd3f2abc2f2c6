//! KnockKnock Domain Layer
pub mod activity;
pub mod config;
pub mod device;
pub mod errors;
pub mod knock;
pub mod sighting;

pub use activity::{DeviceActivity, RowParseError};
pub use config::{BackendConfig, ConfigError, DatabaseConfig, LoggingConfig, PollerConfig};
pub use device::Device;
pub use errors::DomainError;
pub use knock::{Knock, OwnerActivity, DEFAULT_ACTIVE_THRESHOLD_SECS};
pub use sighting::{Sighting, SightingSummary, SightingWindow};
