//! Poll cycle against a fake Pi-hole and a real backend on loopback.

use axum::routing::get;
use axum::{Json, Router};
use knockknock_api::{create_api_routes, AppState};
use knockknock_application::ports::{DeviceRepository, SightingRepository};
use knockknock_application::use_cases::{PollQueryLogUseCase, ReportSightingsUseCase};
use knockknock_domain::SightingWindow;
use knockknock_infrastructure::database::create_pool;
use knockknock_infrastructure::http::{HttpSightingBackend, PiholeQueryLogSource};
use knockknock_infrastructure::repositories::{SqlDeviceRepository, SqlSightingRepository};
use knockknock_jobs::{JobRunner, SightingPollJob};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const TIMEOUT: Duration = Duration::from_secs(5);

struct Backend {
    addr: SocketAddr,
    devices: Arc<SqlDeviceRepository>,
    sightings: Arc<SqlSightingRepository>,
    _dir: tempfile::TempDir,
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn start_backend() -> Backend {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("knock.db").display());
    let pool = create_pool(&url, 1).await.unwrap();

    let devices = Arc::new(SqlDeviceRepository::new(pool.clone()));
    let sightings = Arc::new(SqlSightingRepository::new(pool));
    let state = AppState::from_repositories(devices.clone(), sightings.clone(), 3600);
    let addr = serve(create_api_routes(state)).await;

    Backend {
        addr,
        devices,
        sightings,
        _dir: dir,
    }
}

async fn start_pihole(rows: Vec<Value>) -> SocketAddr {
    let body = json!({ "data": rows });
    let router = Router::new().route(
        "/admin/api.php",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    serve(router).await
}

fn poll_use_case(pihole: SocketAddr, backend: SocketAddr) -> Arc<PollQueryLogUseCase> {
    let source = PiholeQueryLogSource::new(&pihole.to_string(), "token", TIMEOUT).unwrap();
    let client = HttpSightingBackend::new(&backend.to_string(), TIMEOUT).unwrap();
    let reporter = Arc::new(ReportSightingsUseCase::new(Arc::new(client)));
    Arc::new(PollQueryLogUseCase::new(Arc::new(source), reporter))
}

#[tokio::test]
async fn test_poll_cycle_registers_devices_and_records_latest_sighting() {
    let backend = start_backend().await;
    let pihole = start_pihole(vec![
        json!(["1700000100", "A", "a.com", "phone"]),
        json!([1700000300, "AAAA", "b.com", "phone"]),
        json!([1700000200, "A", "c.com", "tv"]),
        json!(["bad", "x"]),
    ])
    .await;

    let summary = poll_use_case(pihole, backend.addr).execute().await.unwrap();

    assert_eq!(summary.rows, 4);
    assert_eq!(summary.parse_failures, 1);
    assert!(summary.report.is_clean());

    let aliases: Vec<String> = backend
        .devices
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.alias.to_string())
        .collect();
    assert_eq!(aliases, vec!["phone", "tv"]);

    let stored: Vec<(String, i64)> = backend
        .sightings
        .find_in_window(SightingWindow::open(0))
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.alias.to_string(), s.last_activity_timestamp))
        .collect();
    assert_eq!(
        stored,
        vec![("tv".into(), 1700000200), ("phone".into(), 1700000300)]
    );
}

#[tokio::test]
async fn test_repeated_cycles_keep_one_device_per_alias() {
    let backend = start_backend().await;
    let pihole = start_pihole(vec![json!([1700000000, "A", "a.com", "phone"])]).await;
    let poll = poll_use_case(pihole, backend.addr);

    poll.execute().await.unwrap();
    poll.execute().await.unwrap();

    assert_eq!(backend.devices.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_fails_every_device_but_not_the_cycle() {
    let pihole = start_pihole(vec![
        json!([1, "A", "a.com", "phone"]),
        json!([2, "A", "b.com", "tv"]),
    ])
    .await;
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_backend = closed.local_addr().unwrap();
    drop(closed);

    let summary = poll_use_case(pihole, dead_backend).execute().await.unwrap();

    assert_eq!(summary.report.failures.len(), 2);
    assert!(summary.report.recorded.is_empty());
}

#[tokio::test]
async fn test_job_runner_drives_a_cycle_until_shutdown() {
    let backend = start_backend().await;
    let pihole = start_pihole(vec![json!([1700000000, "A", "a.com", "console"])]).await;
    let token = CancellationToken::new();

    let job = SightingPollJob::new(poll_use_case(pihole, backend.addr), Duration::from_secs(3600));
    let handles = JobRunner::new()
        .with_sighting_poll(job)
        .with_shutdown_token(token.clone())
        .start()
        .await;

    let mut registered = false;
    for _ in 0..50 {
        if backend.devices.get_by_alias("console").await.unwrap().is_some() {
            registered = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(registered);

    token.cancel();
    for handle in handles {
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
