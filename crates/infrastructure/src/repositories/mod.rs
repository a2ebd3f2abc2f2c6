pub mod device_repository;
pub mod sighting_repository;

pub use device_repository::SqlDeviceRepository;
pub use sighting_repository::SqlSightingRepository;

use knockknock_domain::DomainError;

/// Rows that exist but cannot be decoded are an integrity problem, not an outage.
pub(crate) fn map_read_error(e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => DomainError::Integrity(e.to_string()),
        other => DomainError::DatabaseError(other.to_string()),
    }
}
