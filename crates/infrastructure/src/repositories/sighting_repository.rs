use super::map_read_error;
use async_trait::async_trait;
use knockknock_application::ports::SightingRepository;
use knockknock_domain::{DomainError, OwnerActivity, Sighting, SightingSummary, SightingWindow};
use sqlx::AnyPool;
use std::sync::Arc;
use tracing::{error, instrument};

type SightingRow = (i64, String, i64, i64);
type SummaryRow = (String, i64);

pub struct SqlSightingRepository {
    pool: AnyPool,
}

impl SqlSightingRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    fn row_to_sighting(row: SightingRow) -> Sighting {
        let (id, alias, last_activity_timestamp, recorded_at) = row;
        Sighting {
            id,
            alias: Arc::from(alias.as_str()),
            last_activity_timestamp,
            current_timestamp: recorded_at,
        }
    }

    fn row_to_summary(row: SummaryRow) -> SightingSummary {
        SightingSummary {
            alias: Arc::from(row.0.as_str()),
            last_activity_timestamp: row.1,
        }
    }
}

#[async_trait]
impl SightingRepository for SqlSightingRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        alias: &str,
        last_activity_timestamp: i64,
    ) -> Result<Sighting, DomainError> {
        let now = chrono::Utc::now().timestamp();

        let row = sqlx::query_as::<_, SightingRow>(
            "INSERT INTO sighting (alias, last_activity_timestamp, recorded_at)
             VALUES ($1, $2, $3)
             RETURNING id, alias, last_activity_timestamp, recorded_at",
        )
        .bind(alias)
        .bind(last_activity_timestamp)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let foreign_key = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if foreign_key {
                DomainError::UnregisteredDevice(alias.to_string())
            } else {
                error!(error = %e, alias = %alias, "Failed to insert sighting");
                map_read_error(e)
            }
        })?;

        Ok(Self::row_to_sighting(row))
    }

    #[instrument(skip(self))]
    async fn find_in_window(
        &self,
        window: SightingWindow,
    ) -> Result<Vec<SightingSummary>, DomainError> {
        let query = match window.to {
            Some(to) => sqlx::query_as::<_, SummaryRow>(
                "SELECT DISTINCT alias, last_activity_timestamp FROM sighting
                 WHERE last_activity_timestamp >= $1 AND last_activity_timestamp <= $2
                 ORDER BY last_activity_timestamp ASC, alias ASC",
            )
            .bind(window.from)
            .bind(to),
            None => sqlx::query_as::<_, SummaryRow>(
                "SELECT DISTINCT alias, last_activity_timestamp FROM sighting
                 WHERE last_activity_timestamp >= $1
                 ORDER BY last_activity_timestamp ASC, alias ASC",
            )
            .bind(window.from),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query sightings in window");
            map_read_error(e)
        })?;

        Ok(rows.into_iter().map(Self::row_to_summary).collect())
    }

    #[instrument(skip(self))]
    async fn last_activity_by_owner(&self) -> Result<Vec<OwnerActivity>, DomainError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT d.owner, MAX(s.last_activity_timestamp)
             FROM device d
             JOIN sighting s ON s.alias = d.alias
             WHERE d.owner IS NOT NULL
             GROUP BY d.owner
             ORDER BY d.owner ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to aggregate activity by owner");
            map_read_error(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(owner, ts)| OwnerActivity {
                owner: Arc::from(owner.as_str()),
                last_activity_timestamp: ts,
            })
            .collect())
    }
}
