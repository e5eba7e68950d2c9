// ABOUTME: Route handler for LLM-written workout analysis
// ABOUTME: Summarizes a workout document into type, muscle groups, calories, and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Workout info route
//!
//! `POST /api/workout-info` embeds the submitted workout document in an
//! analysis prompt and returns the model's JSON answer as-is (workout type,
//! muscle groups, estimated calories, difficulty, tips, modifications,
//! recovery time). Unlike the exercise-description fallback, an unreadable
//! answer here is an error carrying the raw text: there is no sensible
//! canned analysis for an arbitrary workout.

use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::AppError;
use crate::llm::{workout_info_prompt, ChatMessage, ChatRequest};
use crate::parser::extract_json_object;
use crate::server::ServerResources;

/// Request to analyze a workout document
#[derive(Debug, Deserialize)]
pub struct WorkoutInfoRequest {
    /// The workout to analyze, passed through to the prompt verbatim
    pub workout: serde_json::Value,
}

/// Workout info routes handler
pub struct WorkoutInfoRoutes;

impl WorkoutInfoRoutes {
    /// Create all workout info routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout-info", post(Self::workout_info))
            .with_state(resources)
    }

    /// Analyze a workout document
    async fn workout_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let request: WorkoutInfoRequest = serde_json::from_value(body)
            .map_err(|_| AppError::invalid_input("Field 'workout' is required"))?;

        if request.workout.is_null() {
            return Err(AppError::invalid_input("Field 'workout' must not be null"));
        }

        let workout_json = serde_json::to_string_pretty(&request.workout)?;
        let chat = ChatRequest::new(vec![ChatMessage::user(workout_info_prompt(&workout_json))])
            .with_temperature(0.7);

        let response = resources.llm.complete(&chat).await?;

        let analysis = extract_json_object(&response.content).map_err(|_| {
            AppError::llm_output_invalid("Failed to parse workout analysis", &response.content)
        })?;

        Ok(Json(analysis))
    }
}
