use knockknock_domain::{DomainError, Sighting, SightingSummary, SightingWindow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Epoch seconds as sent by clients: a JSON integer or a string of digits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EpochParam {
    Integer(i64),
    Text(String),
}

impl EpochParam {
    pub fn to_epoch(&self, name: &str) -> Result<i64, DomainError> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<i64>().map_err(|_| {
                DomainError::Validation(format!("'{}' must be an integer, got '{}'", name, text))
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SightingWindowRequest {
    #[serde(default)]
    pub from: Option<EpochParam>,
    #[serde(default)]
    pub to: Option<EpochParam>,
}

impl SightingWindowRequest {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self {
            from: params.get("from").cloned().map(EpochParam::Text),
            to: params.get("to").cloned().map(EpochParam::Text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn into_window(self) -> Result<SightingWindow, DomainError> {
        let from = self
            .from
            .ok_or_else(|| DomainError::Validation("'from' is required".to_string()))?
            .to_epoch("from")?;
        match self.to {
            Some(to) => Ok(SightingWindow::closed(from, to.to_epoch("to")?)),
            None => Ok(SightingWindow::open(from)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordSightingRequest {
    pub alias: String,
    pub timestamp: EpochParam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SightingResponse {
    pub id: i64,
    pub alias: String,
    pub last_activity_timestamp: i64,
    pub current_timestamp: i64,
}

impl SightingResponse {
    pub fn from_sighting(s: Sighting) -> Self {
        Self {
            id: s.id,
            alias: s.alias.to_string(),
            last_activity_timestamp: s.last_activity_timestamp,
            current_timestamp: s.current_timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SightingSummaryResponse {
    pub alias: String,
    pub last_activity_timestamp: i64,
}

impl From<SightingSummary> for SightingSummaryResponse {
    fn from(s: SightingSummary) -> Self {
        Self {
            alias: s.alias.to_string(),
            last_activity_timestamp: s.last_activity_timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SightingsResponse {
    pub sightings: Vec<SightingSummaryResponse>,
}
