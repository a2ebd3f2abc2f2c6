mod backend;
mod database;
mod env;
mod errors;
mod logging;
mod poller;

pub use backend::BackendConfig;
pub use database::{DatabaseConfig, DatabaseConnection};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use poller::PollerConfig;
