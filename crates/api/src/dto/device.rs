use knockknock_domain::Device;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    pub alias: String,
    pub ip_address: Option<String>,
    pub owner: Option<String>,
}

impl DeviceResponse {
    pub fn from_device(d: Device) -> Self {
        Self {
            alias: d.alias.to_string(),
            ip_address: d.ip_address.as_ref().map(|s| s.to_string()),
            owner: d.owner.as_ref().map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<DeviceResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDeviceRequest {
    pub alias: String,
}

/// Replace semantics: a field left out of the body is stored as null.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeviceRequest {
    pub alias: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}
