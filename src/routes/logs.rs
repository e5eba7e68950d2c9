// ABOUTME: Route handlers for recording and listing completed workout sessions
// ABOUTME: Listing enriches each log with exercise counts and names for the history UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Workout log routes
//!
//! `POST /api/log-workout` persists a completed session document as-is.
//! `GET /api/workout-logs` pages through past sessions newest-first and
//! decorates each entry with `totalExercises` and `exerciseNames` so list
//! views need no second request.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::models::{WorkoutLog, WorkoutLogRecord};
use crate::server::ServerResources;

/// Default page size for log listing
const DEFAULT_LOG_LIMIT: u32 = 50;

/// Response for a recorded workout
#[derive(Debug, Serialize)]
pub struct LogWorkoutResponse {
    /// Always `"ok"` on success
    pub status: &'static str,
    /// Id of the stored log document
    pub id: String,
}

/// Query parameters for listing workout logs
#[derive(Debug, Deserialize, Default)]
pub struct ListLogsQuery {
    /// Maximum number of logs to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Offset for pagination
    #[serde(default)]
    pub offset: u32,
}

const fn default_limit() -> u32 {
    DEFAULT_LOG_LIMIT
}

/// One log entry in a listing, decorated with derived exercise fields
#[derive(Debug, Serialize)]
pub struct WorkoutLogSummary {
    /// The stored log document
    #[serde(flatten)]
    pub record: WorkoutLogRecord,
    /// Number of exercise observations actually completed
    #[serde(rename = "totalExercises")]
    pub total_exercises: usize,
    /// Unique exercise names in plan order
    #[serde(rename = "exerciseNames")]
    pub exercise_names: Vec<String>,
}

impl From<WorkoutLogRecord> for WorkoutLogSummary {
    fn from(record: WorkoutLogRecord) -> Self {
        let total_exercises = record.log.actuals.len();
        let exercise_names = record.log.plan.exercise_names();
        Self {
            record,
            total_exercises,
            exercise_names,
        }
    }
}

/// Response for listing workout logs
#[derive(Debug, Serialize)]
pub struct ListLogsResponse {
    /// The requested page, newest first
    pub logs: Vec<WorkoutLogSummary>,
    /// Whether another page may exist
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Workout log routes handler
pub struct LogRoutes;

impl LogRoutes {
    /// Create all workout log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/log-workout", post(Self::log_workout))
            .route("/api/workout-logs", get(Self::list_logs))
            .with_state(resources)
    }

    /// Record a completed workout session
    async fn log_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let log: WorkoutLog = serde_json::from_value(body).map_err(|e| {
            AppError::invalid_input("Request body is not a valid workout log")
                .with_details(serde_json::json!({ "parse_error": e.to_string() }))
        })?;

        if log.plan.iter().any(|round| round.rounds == 0) {
            return Err(AppError::invalid_input(
                "Field 'rounds' must be a positive integer",
            ));
        }
        if log.actuals.iter().any(|actual| actual.round == 0) {
            return Err(AppError::invalid_input(
                "Field 'round' must be a positive integer",
            ));
        }

        let id = resources.store.insert_log(&log).await?;
        info!(log_id = %id, actuals = log.actuals.len(), "Recorded workout log");

        Ok(Json(LogWorkoutResponse { status: "ok", id }))
    }

    /// List recorded workouts, newest first
    async fn list_logs(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListLogsQuery>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        // A zero limit coerces to the default, like the original API did
        let limit = if query.limit == 0 {
            DEFAULT_LOG_LIMIT
        } else {
            query.limit
        };

        let records = resources.store.list_logs(limit, query.offset).await?;
        // A full page means the next offset may hold more rows
        let has_more = records.len() as u32 == limit;

        Ok(Json(ListLogsResponse {
            logs: records.into_iter().map(WorkoutLogSummary::from).collect(),
            has_more,
        }))
    }
}
