use super::DatabaseBackend;
use sqlx::AnyPool;

const SQLITE_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS device (
        alias TEXT PRIMARY KEY NOT NULL,
        ip_address TEXT,
        owner TEXT
    )",
    "CREATE TABLE IF NOT EXISTS sighting (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        alias TEXT NOT NULL REFERENCES device(alias),
        last_activity_timestamp INTEGER NOT NULL,
        recorded_at INTEGER NOT NULL
    )",
];

const POSTGRES_SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS device (
        alias TEXT PRIMARY KEY,
        ip_address TEXT,
        owner TEXT
    )",
    "CREATE TABLE IF NOT EXISTS sighting (
        id BIGSERIAL PRIMARY KEY,
        alias TEXT NOT NULL REFERENCES device(alias),
        last_activity_timestamp BIGINT NOT NULL,
        recorded_at BIGINT NOT NULL
    )",
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_sighting_last_activity ON sighting(last_activity_timestamp)",
    "CREATE INDEX IF NOT EXISTS idx_sighting_alias ON sighting(alias)",
    "CREATE INDEX IF NOT EXISTS idx_device_owner ON device(owner)",
];

/// Creates the `device` and `sighting` tables if they do not exist yet.
pub async fn init_schema(pool: &AnyPool, backend: DatabaseBackend) -> Result<(), sqlx::Error> {
    let tables = match backend {
        DatabaseBackend::Postgres => POSTGRES_SCHEMA,
        DatabaseBackend::Sqlite => SQLITE_SCHEMA,
    };

    for statement in tables.iter().chain(INDEXES) {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
