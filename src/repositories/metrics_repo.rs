use chrono::Utc;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{BodyMetrics, CreateBodyMetrics, FromSqliteRow};

/// Append-only store of body-circumference measurements.
#[derive(Clone)]
pub struct MetricsRepository {
    pool: DbPool,
}

impl MetricsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateBodyMetrics) -> Result<BodyMetrics> {
        let pool = self.pool.clone();
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO body_metrics (shoulder, waist, chest, created_at)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![payload.shoulder, payload.waist, payload.chest, now],
            )?;

            Ok(BodyMetrics {
                id: conn.last_insert_rowid(),
                shoulder: payload.shoulder,
                waist: payload.waist,
                chest: payload.chest,
                created_at: now,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All measurements, oldest first, for charting.
    pub async fn find_all(&self) -> Result<Vec<BodyMetrics>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM body_metrics ORDER BY created_at, id")?;
            let metrics = stmt
                .query_map([], BodyMetrics::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(metrics)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
