// ABOUTME: Route handler for structured exercise coaching descriptions
// ABOUTME: Asks the model for form cues, common mistakes, muscles, and a tutorial search query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Exercise description route
//!
//! `POST /api/exercise-description` returns structured coaching guidance for
//! one exercise. When the model answer cannot be read as JSON the handler
//! falls back to generic guidance rather than failing: the client shows this
//! next to an exercise the user is about to perform, and a canned cue beats
//! an error banner there.

use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::errors::AppError;
use crate::llm::{
    exercise_description_prompt, ChatMessage, ChatRequest, EXERCISE_DESCRIPTION_SYSTEM_PROMPT,
};
use crate::parser::extract_json_object;
use crate::server::ServerResources;

/// Request for a structured exercise description
#[derive(Debug, Deserialize)]
pub struct ExerciseDescriptionRequest {
    /// Name of the exercise to describe
    #[serde(rename = "exerciseName")]
    pub exercise_name: String,
}

/// Structured coaching guidance for one exercise
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseDescription {
    /// Form and technique cues
    pub form: String,
    /// Common mistakes to avoid
    pub mistakes: String,
    /// Muscles the exercise targets
    pub muscles: String,
    /// Suggested YouTube search for a tutorial video
    #[serde(rename = "youtubeQuery")]
    pub youtube_query: String,
}

impl ExerciseDescription {
    /// Generic guidance used when the model answer is unusable
    fn fallback(exercise_name: &str) -> Self {
        Self {
            form: "Focus on controlled movement and proper breathing throughout the exercise."
                .to_owned(),
            mistakes: "Avoid rushing through the movement.".to_owned(),
            muscles: "Various muscle groups".to_owned(),
            youtube_query: format!("{exercise_name} exercise tutorial form"),
        }
    }
}

/// Response wrapper around the description
#[derive(Debug, Serialize)]
pub struct ExerciseDescriptionResponse {
    /// The structured guidance
    pub description: ExerciseDescription,
}

/// Exercise description routes handler
pub struct ExerciseDescriptionRoutes;

impl ExerciseDescriptionRoutes {
    /// Create all exercise description routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercise-description", post(Self::describe_exercise))
            .with_state(resources)
    }

    /// Structured coaching guidance for one exercise
    async fn describe_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let request: ExerciseDescriptionRequest = serde_json::from_value(body)
            .map_err(|_| AppError::invalid_input("Field 'exerciseName' is required"))?;

        let name = request.exercise_name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input(
                "Field 'exerciseName' must not be empty",
            ));
        }

        let chat = ChatRequest::new(vec![
            ChatMessage::system(EXERCISE_DESCRIPTION_SYSTEM_PROMPT),
            ChatMessage::user(exercise_description_prompt(name)),
        ])
        .with_temperature(0.7);

        let response = resources.llm.complete(&chat).await?;

        let description = extract_json_object(&response.content)
            .ok()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_else(|| {
                warn!(
                    exercise = name,
                    "Model description was not valid JSON, using fallback guidance"
                );
                ExerciseDescription::fallback(name)
            });

        Ok(Json(ExerciseDescriptionResponse { description }))
    }
}
