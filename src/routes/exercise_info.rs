// ABOUTME: Route handler for short LLM-written exercise descriptions
// ABOUTME: Answers form and muscle-group questions for the exercise detail view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Exercise info route
//!
//! `GET /api/exercise-info?name=` asks the model for a short plain-text
//! description of the exercise. Unlike workout parsing this runs at a mild
//! temperature; the output is prose, not structured data.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::AppError;
use crate::llm::{exercise_info_prompt, ChatMessage, ChatRequest};
use crate::server::ServerResources;

/// Longest description we will return, in characters
const MAX_DESCRIPTION_CHARS: usize = 300;

/// Query parameters for the exercise info lookup
#[derive(Debug, Deserialize, Default)]
pub struct ExerciseInfoQuery {
    /// Name of the exercise to describe
    #[serde(default)]
    pub name: Option<String>,
}

/// Response with the exercise description
#[derive(Debug, Serialize)]
pub struct ExerciseInfoResponse {
    /// Short plain-text description of the exercise
    pub description: String,
    /// Reserved for a curated demonstration video link
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
}

/// Exercise info routes handler
pub struct ExerciseInfoRoutes;

impl ExerciseInfoRoutes {
    /// Create all exercise info routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercise-info", get(Self::exercise_info))
            .with_state(resources)
    }

    /// Describe an exercise in a couple of sentences
    async fn exercise_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ExerciseInfoQuery>,
    ) -> Result<impl IntoResponse, AppError> {
        resources.auth.authenticate(&headers).await?;

        let name = query
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::invalid_input("Query parameter 'name' is required"))?;

        let request = ChatRequest::new(vec![ChatMessage::user(exercise_info_prompt(name))])
            .with_temperature(0.7)
            .with_max_tokens(150);

        let response = resources.llm.complete(&request).await?;

        let mut description = response.content.trim().to_owned();
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            description = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        }

        Ok(Json(ExerciseInfoResponse {
            description,
            video_url: None,
        }))
    }
}
