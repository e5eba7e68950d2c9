// ABOUTME: In-memory WorkoutStore backed by concurrent maps
// ABOUTME: Used by tests and by deployments that opt out of persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! In-memory store
//!
//! Contents are lost on restart. Ordering contracts match the SQLite store:
//! logs sort by session timestamp, saved workouts by creation time.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{history_entries_from_log, WorkoutStore};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ExerciseHistoryEntry, SavedWorkout, WorkoutLog, WorkoutLogRecord, WorkoutPlan,
};

/// In-memory document store
#[derive(Default)]
pub struct MemoryStore {
    logs: DashMap<String, WorkoutLogRecord>,
    saved: DashMap<String, SavedWorkout>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn logs_sorted(&self, ascending: bool) -> Vec<WorkoutLogRecord> {
        let mut records: Vec<WorkoutLogRecord> =
            self.logs.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by_key(|record| record.log.timestamp);
        if !ascending {
            records.reverse();
        }
        records
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn insert_log(&self, log: &WorkoutLog) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let record = WorkoutLogRecord {
            id: id.clone(),
            log: log.clone(),
            created_at: Utc::now(),
        };
        self.logs.insert(id.clone(), record);
        Ok(id)
    }

    async fn list_logs(&self, limit: u32, offset: u32) -> AppResult<Vec<WorkoutLogRecord>> {
        Ok(self
            .logs_sorted(false)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn exercise_history(&self, exercise: &str) -> AppResult<Vec<ExerciseHistoryEntry>> {
        Ok(self
            .logs_sorted(true)
            .iter()
            .flat_map(|record| history_entries_from_log(&record.log, exercise))
            .collect())
    }

    async fn list_saved(&self) -> AppResult<Vec<SavedWorkout>> {
        let mut workouts: Vec<SavedWorkout> =
            self.saved.iter().map(|entry| entry.value().clone()).collect();
        workouts.sort_by_key(|workout| std::cmp::Reverse(workout.created_at));
        Ok(workouts)
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
        self.saved.insert(saved.id.clone(), saved.clone());
        Ok(saved)
    }

    async fn delete_saved(&self, id: &str) -> AppResult<()> {
        self.saved
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Saved workout {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, ExerciseActual, WorkoutRound};
    use chrono::{DateTime, TimeZone, Utc};

    fn log_at(timestamp: DateTime<Utc>, exercise: &str, reps: Option<i64>) -> WorkoutLog {
        WorkoutLog {
            timestamp,
            plan: WorkoutPlan(vec![WorkoutRound {
                rounds: 1,
                exercises: vec![Exercise::named(exercise)],
            }]),
            actuals: vec![ExerciseActual {
                name: exercise.to_owned(),
                round: 1,
                reps,
                weight: None,
            }],
            duration: None,
            workout_name: None,
        }
    }

    #[tokio::test]
    async fn test_list_logs_newest_first_with_pagination() {
        let store = MemoryStore::new();
        for day in 1..=3 {
            let timestamp = Utc.with_ymd_and_hms(2025, 6, day, 8, 0, 0).unwrap();
            store.insert_log(&log_at(timestamp, "Row", None)).await.unwrap();
        }

        let page = store.list_logs(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page[0].log.timestamp > page[1].log.timestamp);

        let rest = store.list_logs(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
    }

    #[tokio::test]
    async fn test_history_oldest_first_case_insensitive() {
        let store = MemoryStore::new();
        let earlier = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        store.insert_log(&log_at(later, "Squats", Some(12))).await.unwrap();
        store.insert_log(&log_at(earlier, "squats", Some(10))).await.unwrap();

        let history = store.exercise_history("SQUATS").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].reps, Some(10));
        assert_eq!(history[1].reps, Some(12));
    }

    #[tokio::test]
    async fn test_saved_crud() {
        let store = MemoryStore::new();
        let plan = WorkoutPlan(vec![WorkoutRound {
            rounds: 2,
            exercises: vec![Exercise::named("Burpees")],
        }]);

        let saved = store.insert_saved("Monday", &plan).await.unwrap();
        assert_eq!(saved.name, "Monday");
        assert_eq!(saved.workout, plan);

        let listed = store.list_saved().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);

        store.delete_saved(&saved.id).await.unwrap();
        assert!(store.list_saved().await.unwrap().is_empty());

        let error = store.delete_saved(&saved.id).await.unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
    }
}
