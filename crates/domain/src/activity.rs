use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

const TIMESTAMP_COLUMN: usize = 0;
const CLIENT_COLUMN: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    #[error("row is not an array")]
    NotAnArray,

    #[error("row has {0} columns, expected at least 4")]
    TooShort(usize),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid device key: {0}")]
    InvalidDeviceKey(String),
}

/// A single parsed query-log row: a device was active at `observed_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceActivity {
    pub observed_at: i64,
    pub device_key: Arc<str>,
}

impl DeviceActivity {
    pub fn new(observed_at: i64, device_key: impl Into<Arc<str>>) -> Self {
        Self {
            observed_at,
            device_key: device_key.into(),
        }
    }

    /// Parses a Pi-hole `getAllQueries` row: `[timestamp, type, domain, client, ...]`.
    ///
    /// The timestamp is accepted as a JSON integer or as a string of digits,
    /// which is what the appliance actually sends.
    pub fn from_row(row: &Value) -> Result<Self, RowParseError> {
        let columns = row.as_array().ok_or(RowParseError::NotAnArray)?;
        if columns.len() <= CLIENT_COLUMN {
            return Err(RowParseError::TooShort(columns.len()));
        }

        let observed_at = parse_timestamp(&columns[TIMESTAMP_COLUMN])?;

        let device_key = match &columns[CLIENT_COLUMN] {
            Value::String(s) if !s.trim().is_empty() => s.trim(),
            other => return Err(RowParseError::InvalidDeviceKey(other.to_string())),
        };

        Ok(Self::new(observed_at, device_key))
    }
}

fn parse_timestamp(value: &Value) -> Result<i64, RowParseError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| RowParseError::InvalidTimestamp(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| RowParseError::InvalidTimestamp(s.clone())),
        other => Err(RowParseError::InvalidTimestamp(other.to_string())),
    }
}
