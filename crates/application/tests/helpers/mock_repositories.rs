#![allow(dead_code)]

use async_trait::async_trait;
use knockknock_application::ports::{
    DeviceRepository, QueryLogSource, SightingBackend, SightingRepository,
};
use knockknock_domain::{
    Device, DomainError, OwnerActivity, Sighting, SightingSummary, SightingWindow,
};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

type DeviceTable = Arc<RwLock<BTreeMap<String, Device>>>;

#[derive(Clone)]
pub struct MockDeviceRepository {
    devices: DeviceTable,
    inserts: Arc<RwLock<u64>>,
}

impl MockDeviceRepository {
    pub fn new() -> Self {
        Self {
            devices: Arc::new(RwLock::new(BTreeMap::new())),
            inserts: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn with_devices(devices: Vec<Device>) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.devices.write().await;
            for device in devices {
                table.insert(device.alias.to_string(), device);
            }
        }
        repo
    }

    /// Shared handle so a sighting repository can enforce the alias reference.
    pub fn table(&self) -> DeviceTable {
        Arc::clone(&self.devices)
    }

    pub async fn count(&self) -> usize {
        self.devices.read().await.len()
    }

    pub async fn insert_count(&self) -> u64 {
        *self.inserts.read().await
    }
}

impl Default for MockDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceRepository for MockDeviceRepository {
    async fn get_or_create(&self, alias: &str) -> Result<Device, DomainError> {
        let mut devices = self.devices.write().await;
        if let Some(existing) = devices.get(alias) {
            return Ok(existing.clone());
        }
        let device = Device::new(Arc::from(alias));
        devices.insert(alias.to_string(), device.clone());
        *self.inserts.write().await += 1;
        Ok(device)
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<Device>, DomainError> {
        Ok(self.devices.read().await.get(alias).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Device>, DomainError> {
        Ok(self.devices.read().await.values().cloned().collect())
    }

    async fn update(
        &self,
        alias: &str,
        ip_address: Option<String>,
        owner: Option<String>,
    ) -> Result<Device, DomainError> {
        let mut devices = self.devices.write().await;
        let device = devices
            .get_mut(alias)
            .ok_or_else(|| DomainError::DeviceNotFound(alias.to_string()))?;
        device.ip_address = ip_address.map(Arc::from);
        device.owner = owner.map(Arc::from);
        Ok(device.clone())
    }
}

#[derive(Clone)]
pub struct MockSightingRepository {
    devices: DeviceTable,
    sightings: Arc<RwLock<Vec<Sighting>>>,
    now: i64,
}

impl MockSightingRepository {
    pub fn new(devices: DeviceTable) -> Self {
        Self {
            devices,
            sightings: Arc::new(RwLock::new(Vec::new())),
            now: 1_700_000_000,
        }
    }

    pub async fn count(&self) -> usize {
        self.sightings.read().await.len()
    }

    pub async fn all(&self) -> Vec<Sighting> {
        self.sightings.read().await.clone()
    }
}

#[async_trait]
impl SightingRepository for MockSightingRepository {
    async fn create(
        &self,
        alias: &str,
        last_activity_timestamp: i64,
    ) -> Result<Sighting, DomainError> {
        if !self.devices.read().await.contains_key(alias) {
            return Err(DomainError::UnregisteredDevice(alias.to_string()));
        }
        let mut sightings = self.sightings.write().await;
        let sighting = Sighting {
            id: sightings.len() as i64 + 1,
            alias: Arc::from(alias),
            last_activity_timestamp,
            current_timestamp: self.now,
        };
        sightings.push(sighting.clone());
        Ok(sighting)
    }

    async fn find_in_window(
        &self,
        window: SightingWindow,
    ) -> Result<Vec<SightingSummary>, DomainError> {
        let distinct: BTreeSet<(i64, Arc<str>)> = self
            .sightings
            .read()
            .await
            .iter()
            .filter(|s| window.contains(s.last_activity_timestamp))
            .map(|s| (s.last_activity_timestamp, Arc::clone(&s.alias)))
            .collect();
        Ok(distinct
            .into_iter()
            .map(|(ts, alias)| SightingSummary {
                alias,
                last_activity_timestamp: ts,
            })
            .collect())
    }

    async fn last_activity_by_owner(&self) -> Result<Vec<OwnerActivity>, DomainError> {
        let devices = self.devices.read().await;
        let mut latest: BTreeMap<Arc<str>, i64> = BTreeMap::new();
        for sighting in self.sightings.read().await.iter() {
            let Some(owner) = devices
                .get(sighting.alias.as_ref())
                .and_then(|d| d.owner.clone())
            else {
                continue;
            };
            let entry = latest.entry(owner).or_insert(sighting.last_activity_timestamp);
            *entry = (*entry).max(sighting.last_activity_timestamp);
        }
        Ok(latest
            .into_iter()
            .map(|(owner, ts)| OwnerActivity {
                owner,
                last_activity_timestamp: ts,
            })
            .collect())
    }
}

#[derive(Clone)]
pub struct MockQueryLogSource {
    rows: Arc<RwLock<Vec<Value>>>,
    should_fail: Arc<RwLock<bool>>,
    requests: Arc<RwLock<Vec<(i64, i64)>>>,
}

impl MockQueryLogSource {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            should_fail: Arc::new(RwLock::new(false)),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn requests(&self) -> Vec<(i64, i64)> {
        self.requests.read().await.clone()
    }
}

impl Default for MockQueryLogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryLogSource for MockQueryLogSource {
    async fn fetch(&self, from: i64, to: i64) -> Result<Vec<Value>, DomainError> {
        self.requests.write().await.push((from, to));
        if *self.should_fail.read().await {
            return Err(DomainError::Fetch("HTTP 502 for mock".to_string()));
        }
        Ok(self.rows.read().await.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Register(String),
    Record(String, i64),
}

/// Backend double that logs every call and can be told to fail per alias.
#[derive(Clone)]
pub struct MockSightingBackend {
    calls: Arc<RwLock<Vec<BackendCall>>>,
    registered: Arc<RwLock<HashSet<String>>>,
    fail_registration: Arc<RwLock<HashSet<String>>>,
    fail_sighting: Arc<RwLock<HashSet<String>>>,
}

impl MockSightingBackend {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            registered: Arc::new(RwLock::new(HashSet::new())),
            fail_registration: Arc::new(RwLock::new(HashSet::new())),
            fail_sighting: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn fail_registration_for(&self, alias: &str) {
        self.fail_registration.write().await.insert(alias.to_string());
    }

    pub async fn fail_sighting_for(&self, alias: &str) {
        self.fail_sighting.write().await.insert(alias.to_string());
    }

    pub async fn calls(&self) -> Vec<BackendCall> {
        self.calls.read().await.clone()
    }

    pub async fn recorded(&self) -> Vec<(String, i64)> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                BackendCall::Record(alias, ts) => Some((alias.clone(), *ts)),
                BackendCall::Register(_) => None,
            })
            .collect()
    }
}

impl Default for MockSightingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SightingBackend for MockSightingBackend {
    async fn register_device(&self, alias: &str) -> Result<Device, DomainError> {
        self.calls
            .write()
            .await
            .push(BackendCall::Register(alias.to_string()));
        if self.fail_registration.read().await.contains(alias) {
            return Err(DomainError::DatabaseError("backend unavailable".to_string()));
        }
        self.registered.write().await.insert(alias.to_string());
        Ok(Device::new(Arc::from(alias)))
    }

    async fn record_sighting(&self, alias: &str, timestamp: i64) -> Result<Sighting, DomainError> {
        self.calls
            .write()
            .await
            .push(BackendCall::Record(alias.to_string(), timestamp));
        if !self.registered.read().await.contains(alias) {
            return Err(DomainError::UnregisteredDevice(alias.to_string()));
        }
        if self.fail_sighting.read().await.contains(alias) {
            return Err(DomainError::SightingWrite {
                alias: alias.to_string(),
                reason: "HTTP 500".to_string(),
            });
        }
        let id = self.calls.read().await.len() as i64;
        Ok(Sighting {
            id,
            alias: Arc::from(alias),
            last_activity_timestamp: timestamp,
            current_timestamp: timestamp,
        })
    }
}
