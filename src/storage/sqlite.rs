// ABOUTME: SQLite-backed WorkoutStore using sqlx with documents stored as JSON text
// ABOUTME: Bootstraps its own schema on connect, one table per collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! SQLite store
//!
//! Each collection is one table holding the document as JSON text plus the
//! columns needed for ordered queries. Timestamps are stored as RFC 3339
//! strings so `ORDER BY` matches chronological order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{history_entries_from_log, WorkoutStore};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ExerciseHistoryEntry, SavedWorkout, WorkoutLog, WorkoutLogRecord, WorkoutPlan,
};

/// SQLite document store
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and bootstrap the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// statements fail.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        // In-memory databases exist per connection; a pool larger than one
        // would see different databases.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.bootstrap_schema().await?;
        Ok(store)
    }

    async fn bootstrap_schema(&self) -> AppResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS workout_logs (
                id TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS saved_workouts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                workout TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_logs_timestamp
                ON workout_logs (timestamp)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| AppError::database(format!("Corrupt timestamp column: {e}")))
    }

    fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<WorkoutLogRecord> {
        let document: String = row.get("document");
        let log: WorkoutLog = serde_json::from_str(&document)
            .map_err(|e| AppError::database(format!("Corrupt log document: {e}")))?;

        Ok(WorkoutLogRecord {
            id: row.get("id"),
            log,
            created_at: Self::parse_timestamp(&row.get::<String, _>("created_at"))?,
        })
    }
}

#[async_trait]
impl WorkoutStore for SqliteStore {
    async fn insert_log(&self, log: &WorkoutLog) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let document = serde_json::to_string(log)?;

        sqlx::query(
            "INSERT INTO workout_logs (id, timestamp, document, created_at)
                VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(log.timestamp.to_rfc3339())
        .bind(&document)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_logs(&self, limit: u32, offset: u32) -> AppResult<Vec<WorkoutLogRecord>> {
        let rows = sqlx::query(
            "SELECT id, document, created_at FROM workout_logs
                ORDER BY timestamp DESC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn exercise_history(&self, exercise: &str) -> AppResult<Vec<ExerciseHistoryEntry>> {
        let rows = sqlx::query(
            "SELECT document FROM workout_logs ORDER BY timestamp ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut history = Vec::new();
        for row in &rows {
            let document: String = row.get("document");
            let log: WorkoutLog = serde_json::from_str(&document)
                .map_err(|e| AppError::database(format!("Corrupt log document: {e}")))?;
            history.extend(history_entries_from_log(&log, exercise));
        }
        Ok(history)
    }

    async fn list_saved(&self) -> AppResult<Vec<SavedWorkout>> {
        let rows = sqlx::query(
            "SELECT id, name, workout, created_at, updated_at FROM saved_workouts
                ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let workout: WorkoutPlan =
                    serde_json::from_str(&row.get::<String, _>("workout")).map_err(|e| {
                        AppError::database(format!("Corrupt saved workout document: {e}"))
                    })?;
                Ok(SavedWorkout {
                    id: row.get("id"),
                    name: row.get("name"),
                    workout,
                    created_at: Self::parse_timestamp(&row.get::<String, _>("created_at"))?,
                    updated_at: Self::parse_timestamp(&row.get::<String, _>("updated_at"))?,
                })
            })
            .collect()
    }

    async fn insert_saved(&self, name: &str, workout: &WorkoutPlan) -> AppResult<SavedWorkout> {
        let now = Utc::now();
        let saved = SavedWorkout {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            workout: workout.clone(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO saved_workouts (id, name, workout, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&saved.id)
        .bind(&saved.name)
        .bind(serde_json::to_string(&saved.workout)?)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete_saved(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM saved_workouts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Saved workout {id}")));
        }
        Ok(())
    }
}
