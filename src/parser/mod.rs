// ABOUTME: The natural-language-to-workout parsing pipeline
// ABOUTME: Prompts the LLM, extracts JSON from the response, validates, and deserializes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Workout Parsing Service
//!
//! `parse(text) -> WorkoutPlan` over an injected [`LlmProvider`]. One request
//! per call at temperature 0; no retry on malformed output, no state across
//! calls. A failure anywhere in the pipeline (provider error, no JSON in the
//! response, schema violation) surfaces as a single terminal error, carrying
//! the raw model output when the output itself was the problem.

pub mod extract;
pub mod validate;

pub use extract::{extract_json, extract_json_object};
pub use validate::{validate_plan, ValidationIssue};

use std::sync::Arc;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{workout_parser_system_prompt, ChatMessage, ChatRequest, LlmProvider};
use crate::models::WorkoutPlan;

/// Parses free-text trainer messages into structured workout plans
///
/// The LLM behind it is a replaceable black box: anything implementing
/// [`LlmProvider`] works, which is also how tests script the model's answers.
pub struct WorkoutParser {
    provider: Arc<dyn LlmProvider>,
}

impl WorkoutParser {
    /// Create a parser over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Parse a free-text workout description into a [`WorkoutPlan`]
    ///
    /// # Errors
    ///
    /// Fails when the provider call fails, when the response contains no
    /// JSON-shaped substring, or when the extracted value violates the
    /// workout schema.
    pub async fn parse(&self, text: &str) -> AppResult<WorkoutPlan> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(workout_parser_system_prompt()),
            ChatMessage::user(text),
        ])
        .with_temperature(0.0);

        let response = self.provider.complete(&request).await?;

        debug!(
            provider = self.provider.name(),
            response_len = response.content.len(),
            "Parsing model response"
        );

        let value = extract_json(&response.content)?;

        if let Err(issues) = validate_plan(&value) {
            return Err(AppError::new(
                ErrorCode::LlmOutputInvalid,
                format!(
                    "Model output failed schema validation ({} issue{})",
                    issues.len(),
                    if issues.len() == 1 { "" } else { "s" }
                ),
            )
            .with_details(serde_json::json!({
                "issues": ValidationIssue::to_json(&issues),
                "raw_response": response.content,
            })));
        }

        let plan: WorkoutPlan = serde_json::from_value(value).map_err(|e| {
            AppError::llm_output_invalid(
                format!("Validated output failed deserialization: {e}"),
                &response.content,
            )
        })?;

        info!(
            rounds = plan.len(),
            exercises = plan.iter().map(|r| r.exercises.len()).sum::<usize>(),
            "Parsed workout plan"
        );

        Ok(plan)
    }
}
