use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_ALIAS_LEN: usize = 255;

/// A device on the home network, keyed by its human-assigned alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub alias: Arc<str>,
    pub ip_address: Option<Arc<str>>,
    pub owner: Option<Arc<str>>,
}

impl Device {
    pub fn new(alias: Arc<str>) -> Self {
        Self {
            alias,
            ip_address: None,
            owner: None,
        }
    }

    pub fn with_details(
        alias: Arc<str>,
        ip_address: Option<Arc<str>>,
        owner: Option<Arc<str>>,
    ) -> Self {
        Self {
            alias,
            ip_address,
            owner,
        }
    }

    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    pub fn validate_alias(alias: &str) -> Result<(), String> {
        if alias.trim().is_empty() {
            return Err("Device alias cannot be empty".to_string());
        }
        if alias.len() > MAX_ALIAS_LEN {
            return Err(format!(
                "Device alias cannot exceed {} characters",
                MAX_ALIAS_LEN
            ));
        }
        Ok(())
    }
}
