use knockknock_domain::DatabaseConfig;
use knockknock_infrastructure::database::create_pool;
use sqlx::AnyPool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<AnyPool> {
    info!(database = %cfg.redacted(), "Initializing database");

    let pool = create_pool(&cfg.url(), cfg.max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to initialize database pool");
            anyhow::anyhow!(e)
        })?;

    info!(
        max_connections = cfg.max_connections,
        "Database initialized successfully"
    );

    Ok(pool)
}
