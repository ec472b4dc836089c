use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateWorkout, FromSqliteRow, Workout};

/// Append-only store of logged sets. No update or delete: entries are
/// immutable once written.
#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateWorkout) -> Result<Workout> {
        let pool = self.pool.clone();
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workouts
                     (exercise, reps, weight, rpe, tempo, muscle_group, equipment, is_failure, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    payload.exercise,
                    payload.reps,
                    payload.weight,
                    payload.rpe,
                    payload.tempo,
                    payload.muscle_group,
                    payload.equipment,
                    payload.is_failure,
                    now,
                ],
            )?;

            Ok(Workout {
                id: conn.last_insert_rowid(),
                exercise: payload.exercise,
                reps: payload.reps,
                weight: payload.weight,
                rpe: payload.rpe,
                tempo: payload.tempo,
                muscle_group: payload.muscle_group,
                equipment: payload.equipment,
                is_failure: payload.is_failure,
                created_at: now,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Latest entry for an exercise, exact case-sensitive match. Ties on
    /// created_at fall back to insertion order via the rowid.
    pub async fn find_most_recent(&self, exercise: &str) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        let exercise = exercise.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM workouts WHERE exercise = ?
                 ORDER BY created_at DESC, id DESC LIMIT 1",
            )?;
            let result = stmt.query_row([&exercise], Workout::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All entries, most recent first.
    pub async fn find_all(&self) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM workouts ORDER BY created_at DESC, id DESC")?;
            let workouts = stmt
                .query_map([], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
