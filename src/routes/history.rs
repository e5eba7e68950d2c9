// ABOUTME: Route handler for per-exercise progress history
// ABOUTME: Returns every logged observation of one exercise, oldest first, for charting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Exercise history route
//!
//! `GET /api/history?exercise=` flattens every stored log into the
//! observations of the named exercise. Matching is case-insensitive and
//! results come back oldest first, ready to chart.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::AppError;
use crate::server::ServerResources;

/// Query parameters for the history lookup
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    /// Name of the exercise to chart
    #[serde(default)]
    pub exercise: Option<String>,
}

/// History routes handler
pub struct HistoryRoutes;

impl HistoryRoutes {
    /// Create all history routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/history", get(Self::exercise_history))
            .with_state(resources)
    }

    /// All observations of one exercise, oldest first
    async fn exercise_history(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<HistoryQuery>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let exercise = query
            .exercise
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                AppError::invalid_input("Query parameter 'exercise' is required")
            })?;

        let history = resources.store.exercise_history(exercise).await?;
        Ok(Json(history))
    }
}
