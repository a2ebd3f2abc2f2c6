mod schema;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tracing::info;

pub use schema::init_schema;

/// SQL dialect behind an `AnyPool`, picked from the connection URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    pub fn from_url(database_url: &str) -> Result<Self, sqlx::Error> {
        let scheme = database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(sqlx::Error::Configuration(
                format!("unsupported database scheme '{}'", other).into(),
            )),
        }
    }
}

/// Opens a pool for `database_url` and makes sure the schema exists.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();
    let backend = DatabaseBackend::from_url(database_url)?;

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    init_schema(&pool, backend).await?;
    info!(backend = ?backend, max_connections, "Database pool ready");

    Ok(pool)
}
