#![allow(dead_code)]

use axum::Router;
use knockknock_infrastructure::database::create_pool;
use sqlx::AnyPool;
use std::net::SocketAddr;
use tempfile::TempDir;

/// File-backed SQLite database; the directory is removed when dropped.
pub struct TestDb {
    pub pool: AnyPool,
    _dir: TempDir,
}

pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("knock.db").display());
    let pool = create_pool(&url, 1).await.unwrap();
    TestDb { pool, _dir: dir }
}

/// Serves `router` on an ephemeral local port and returns its address.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
