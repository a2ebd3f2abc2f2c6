use crate::ports::SightingBackend;
use crate::services::LastSeen;
use futures::stream::{self, StreamExt};
use knockknock_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone)]
pub struct DeviceFailure {
    pub alias: Arc<str>,
    pub error: DomainError,
}

/// Outcome of reporting one batch. Devices are independent: one failure never
/// prevents the others from being reported.
#[derive(Debug, Clone, Default)]
pub struct SightingReport {
    pub recorded: Vec<Arc<str>>,
    pub failures: Vec<DeviceFailure>,
}

impl SightingReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.recorded.len() + self.failures.len()
    }
}

/// Use case: push a reduced batch to the backend, registering each device
/// before recording its sighting.
pub struct ReportSightingsUseCase {
    backend: Arc<dyn SightingBackend>,
    concurrency: usize,
}

impl ReportSightingsUseCase {
    pub fn new(backend: Arc<dyn SightingBackend>) -> Self {
        Self {
            backend,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[instrument(skip_all, fields(devices = last_seen.len()))]
    pub async fn execute(&self, last_seen: &LastSeen) -> SightingReport {
        let batch: Vec<(Arc<str>, i64)> = last_seen
            .iter()
            .map(|(alias, timestamp)| (Arc::clone(alias), timestamp))
            .collect();

        let backend = Arc::clone(&self.backend);
        let outcomes: Vec<(Arc<str>, Result<(), DomainError>)> = stream::iter(batch)
            .map(move |(alias, timestamp)| {
                let backend = Arc::clone(&backend);
                async move {
                    let result = report_device(backend, &alias, timestamp).await;
                    (alias, result)
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut report = SightingReport::default();
        for (alias, result) in outcomes {
            match result {
                Ok(()) => report.recorded.push(alias),
                Err(error) => {
                    warn!(alias = %alias, error = %error, "Failed to report device");
                    report.failures.push(DeviceFailure { alias, error });
                }
            }
        }
        report.recorded.sort();
        report.failures.sort_by(|a, b| a.alias.cmp(&b.alias));

        info!(
            recorded = report.recorded.len(),
            failed = report.failures.len(),
            "Sightings reported"
        );

        report
    }
}

async fn report_device(
    backend: Arc<dyn SightingBackend>,
    alias: &str,
    timestamp: i64,
) -> Result<(), DomainError> {
    backend
        .register_device(alias)
        .await
        .map_err(|e| match e {
            DomainError::Registration { .. } => e,
            other => DomainError::Registration {
                alias: alias.to_string(),
                reason: other.to_string(),
            },
        })?;

    let sighting = backend
        .record_sighting(alias, timestamp)
        .await
        .map_err(|e| match e {
            DomainError::SightingWrite { .. } => e,
            other => DomainError::SightingWrite {
                alias: alias.to_string(),
                reason: other.to_string(),
            },
        })?;

    debug!(alias, id = sighting.id, timestamp, "Device reported");
    Ok(())
}
