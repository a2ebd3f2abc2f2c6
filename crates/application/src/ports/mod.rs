mod device_repository;
mod query_log_source;
mod sighting_backend;
mod sighting_repository;

pub use device_repository::DeviceRepository;
pub use query_log_source::QueryLogSource;
pub use sighting_backend::SightingBackend;
pub use sighting_repository::SightingRepository;
