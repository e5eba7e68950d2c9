// ABOUTME: Route handler for natural-language workout parsing
// ABOUTME: Accepts free text and returns the structured workout plan as a bare JSON array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Workout parsing route
//!
//! `POST /api/parse-workout` hands the message text to the parsing service
//! and returns the validated plan. The response body is the plan itself (a
//! JSON array), not a wrapper object.

use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::server::ServerResources;

/// Request to parse a free-text workout description
#[derive(Debug, Deserialize)]
pub struct ParseWorkoutRequest {
    /// The trainer's message, verbatim
    pub text: String,
}

/// Parse routes handler
pub struct ParseRoutes;

impl ParseRoutes {
    /// Create all parse routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/parse-workout", post(Self::parse_workout))
            .with_state(resources)
    }

    /// Parse a workout description into a structured plan
    async fn parse_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let request: ParseWorkoutRequest = serde_json::from_value(body)
            .map_err(|_| AppError::invalid_input("Field 'text' is required"))?;

        if request.text.trim().is_empty() {
            return Err(AppError::invalid_input("Field 'text' must not be empty"));
        }

        let plan = resources.parser.parse(&request.text).await?;

        info!(
            text_len = request.text.len(),
            rounds = plan.len(),
            "Parsed workout request"
        );

        Ok(Json(plan))
    }
}
