use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("Query log fetch failed: {0}")]
    Fetch(String),

    #[error("Malformed query log row: {0}")]
    RowParse(#[from] crate::activity::RowParseError),

    #[error("Failed to register device {alias}: {reason}")]
    Registration { alias: String, reason: String },

    #[error("Failed to record sighting for {alias}: {reason}")]
    SightingWrite { alias: String, reason: String },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Device is not registered: {0}")]
    UnregisteredDevice(String),

    #[error("Stored record is malformed: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
