#![allow(dead_code)]

use async_trait::async_trait;
use knockknock_application::ports::{QueryLogSource, SightingBackend};
use knockknock_application::use_cases::{PollQueryLogUseCase, ReportSightingsUseCase};
use knockknock_domain::{Device, DomainError, Sighting};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockQueryLogSource {
    rows: Vec<Value>,
    fail: AtomicBool,
    fetches: AtomicUsize,
}

impl MockQueryLogSource {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            rows,
            fail: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let source = Self::with_rows(Vec::new());
        source.fail.store(true, Ordering::SeqCst);
        source
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryLogSource for MockQueryLogSource {
    async fn fetch(&self, _from: i64, _to: i64) -> Result<Vec<Value>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Fetch("connection refused".to_string()));
        }
        Ok(self.rows.clone())
    }
}

#[derive(Default)]
pub struct RecordingBackend {
    recorded: Mutex<Vec<(String, i64)>>,
}

impl RecordingBackend {
    pub fn recorded(&self) -> Vec<(String, i64)> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl SightingBackend for RecordingBackend {
    async fn register_device(&self, alias: &str) -> Result<Device, DomainError> {
        Ok(Device::new(Arc::from(alias)))
    }

    async fn record_sighting(&self, alias: &str, timestamp: i64) -> Result<Sighting, DomainError> {
        let mut recorded = self.recorded.lock().unwrap();
        recorded.push((alias.to_string(), timestamp));
        Ok(Sighting {
            id: recorded.len() as i64,
            alias: Arc::from(alias),
            last_activity_timestamp: timestamp,
            current_timestamp: timestamp,
        })
    }
}

pub fn make_poll(
    source: Arc<MockQueryLogSource>,
    backend: Arc<RecordingBackend>,
) -> Arc<PollQueryLogUseCase> {
    let reporter = Arc::new(ReportSightingsUseCase::new(backend));
    Arc::new(PollQueryLogUseCase::new(source, reporter))
}
