// ABOUTME: Route handlers for saved workout templates
// ABOUTME: List, save, and delete named workout plans for reuse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Saved workout routes
//!
//! A saved workout is a named plan kept for reuse. Listing returns the bare
//! array newest-first; saving returns the created document with its id and
//! timestamps; deletion takes the id as a query parameter.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::models::WorkoutPlan;
use crate::server::ServerResources;

/// Request to save a named workout plan
#[derive(Debug, Deserialize)]
pub struct SaveWorkoutRequest {
    /// Display name for the template
    pub name: String,
    /// The plan to save
    pub workout: WorkoutPlan,
}

/// Query parameters for deleting a saved workout
#[derive(Debug, Deserialize, Default)]
pub struct DeleteWorkoutQuery {
    /// Id of the saved workout to delete
    #[serde(default)]
    pub id: Option<String>,
}

/// Saved workout routes handler
pub struct SavedWorkoutRoutes;

impl SavedWorkoutRoutes {
    /// Create all saved workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/saved-workouts", get(Self::list_saved))
            .route("/api/saved-workouts", post(Self::save_workout))
            .route("/api/saved-workouts", delete(Self::delete_saved))
            .with_state(resources)
    }

    /// List saved workouts, newest first
    async fn list_saved(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let saved = resources.store.list_saved().await?;
        Ok(Json(saved))
    }

    /// Save a named workout plan
    async fn save_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let request: SaveWorkoutRequest = serde_json::from_value(body).map_err(|e| {
            AppError::invalid_input("Request must include 'name' and 'workout'")
                .with_details(serde_json::json!({ "parse_error": e.to_string() }))
        })?;

        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Field 'name' must not be empty"));
        }

        let saved = resources
            .store
            .insert_saved(request.name.trim(), &request.workout)
            .await?;
        info!(workout_id = %saved.id, name = %saved.name, "Saved workout template");

        Ok((StatusCode::CREATED, Json(saved)))
    }

    /// Delete a saved workout by id
    async fn delete_saved(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<DeleteWorkoutQuery>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let id = query
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::invalid_input("Query parameter 'id' is required"))?;

        resources.store.delete_saved(id).await?;
        info!(workout_id = %id, "Deleted saved workout");

        Ok(StatusCode::NO_CONTENT)
    }
}
