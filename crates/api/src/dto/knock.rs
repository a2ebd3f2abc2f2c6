use knockknock_domain::Knock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockResponse {
    pub owner: String,
    pub active: bool,
    pub last_activity_timestamp: i64,
    pub last_activity_time: String,
}

impl KnockResponse {
    pub fn from_knock(k: Knock) -> Self {
        Self {
            last_activity_time: k.last_activity_time(),
            owner: k.owner.to_string(),
            active: k.active,
            last_activity_timestamp: k.last_activity_timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnocksResponse {
    pub knocks: Vec<KnockResponse>,
}
