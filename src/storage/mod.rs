// ABOUTME: Document-store boundary for workout logs and saved workouts
// ABOUTME: Defines the WorkoutStore trait implemented by the SQLite and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Storage Boundary
//!
//! Collection-based document CRUD over two collections (`workout_logs` and
//! `saved_workouts`), with ordered queries by timestamp and no cross-collection
//! joins. Everything above this trait is storage-agnostic; the server picks a
//! backend at startup.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{
    ExerciseHistoryEntry, SavedWorkout, WorkoutLog, WorkoutLogRecord, WorkoutPlan,
};

/// Document store for workout logs and saved workouts
///
/// Every operation is a single read or write against one collection; failures
/// are terminal, there is no retry.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Persist a completed workout session, returning the new document id
    async fn insert_log(&self, log: &WorkoutLog) -> AppResult<String>;

    /// List logs ordered by session timestamp, newest first
    async fn list_logs(&self, limit: u32, offset: u32) -> AppResult<Vec<WorkoutLogRecord>>;

    /// All logged observations of one exercise, oldest first (for charting)
    ///
    /// Matching against actual names is case-insensitive.
    async fn exercise_history(&self, exercise: &str) -> AppResult<Vec<ExerciseHistoryEntry>>;

    /// List saved workouts, newest first
    async fn list_saved(&self) -> AppResult<Vec<SavedWorkout>>;

    /// Save a named workout plan, returning the created document
    async fn insert_saved(&self, name: &str, workout: &WorkoutPlan) -> AppResult<SavedWorkout>;

    /// Delete a saved workout by id
    ///
    /// Unknown ids are an error (`ResourceNotFound`).
    async fn delete_saved(&self, id: &str) -> AppResult<()>;
}

/// Collect history entries for one exercise from a log's actuals
///
/// Shared by both store implementations so the name-matching and field
/// projection stay identical.
pub(crate) fn history_entries_from_log(
    log: &WorkoutLog,
    exercise: &str,
) -> Vec<ExerciseHistoryEntry> {
    log.actuals
        .iter()
        .filter(|actual| actual.name.eq_ignore_ascii_case(exercise))
        .map(|actual| ExerciseHistoryEntry {
            date: log.timestamp,
            reps: actual.reps,
            weight: actual.weight,
            round: actual.round,
        })
        .collect()
}
