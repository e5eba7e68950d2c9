// ABOUTME: OpenAI-compatible chat-completions client for cloud and local endpoints
// ABOUTME: Speaks the OpenAI wire format against api.openai.com, Ollama, or vLLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # `OpenAI`-Compatible Provider
//!
//! One client covers every backend this server talks to: the `OpenAI` cloud
//! API and local servers (Ollama, vLLM) expose the same chat-completions wire
//! format and differ only in base URL, model, and whether an API key is
//! required.
//!
//! ## Configuration
//!
//! Cloud (default):
//! - `OPENAI_API_KEY`: API key (required)
//! - `OPENAI_BASE_URL`: Base URL (default: <https://api.openai.com/v1>)
//! - `OPENAI_MODEL`: Model (default: `gpt-4o-mini`)
//!
//! Local:
//! - `LOCAL_LLM_BASE_URL`: Base URL (default: <http://localhost:11434/v1> for Ollama)
//! - `LOCAL_LLM_MODEL`: Model (default: `qwen2.5:14b-instruct`)
//! - `LOCAL_LLM_API_KEY`: API key (optional, empty for local servers)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, error, info};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::errors::{AppError, ErrorCode};

/// Environment variable for the OpenAI API key
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable for the OpenAI base URL
const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable for the OpenAI model
const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Environment variable for the local LLM base URL
const LOCAL_LLM_BASE_URL_ENV: &str = "LOCAL_LLM_BASE_URL";

/// Environment variable for the local LLM model
const LOCAL_LLM_MODEL_ENV: &str = "LOCAL_LLM_MODEL";

/// Environment variable for the local LLM API key (optional)
const LOCAL_LLM_API_KEY_ENV: &str = "LOCAL_LLM_API_KEY";

/// Default OpenAI base URL
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI model, matching the original deployment
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default local base URL (Ollama)
const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model for local inference
const DEFAULT_LOCAL_MODEL: &str = "qwen2.5:14b-instruct";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Request timeout (local inference can be slow)
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// API Request/Response Types (OpenAI wire format)
// ============================================================================

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Message structure on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error response body
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for display/logging
    pub provider_name: &'static str,
    /// Provider display name
    pub display_name: String,
}

impl OpenAiCompatibleConfig {
    /// Configuration for the `OpenAI` cloud API
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not set.
    pub fn openai_from_env() -> Result<Self, AppError> {
        let api_key = env::var(OPENAI_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::config(format!("{OPENAI_API_KEY_ENV} environment variable is not set"))
            })?;

        Ok(Self {
            base_url: env::var(OPENAI_BASE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_owned()),
            api_key: Some(api_key),
            default_model: env::var(OPENAI_MODEL_ENV)
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_owned()),
            provider_name: "openai",
            display_name: "OpenAI".to_owned(),
        })
    }

    /// Configuration for a local `OpenAI`-compatible server
    #[must_use]
    pub fn local_from_env() -> Self {
        let base_url =
            env::var(LOCAL_LLM_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_LOCAL_BASE_URL.to_owned());

        // Nicer display names for the common local servers
        let (provider_name, display_name) = if base_url.contains(":11434") {
            ("ollama", "Ollama (Local)")
        } else if base_url.contains(":8000") {
            ("vllm", "vLLM (Local)")
        } else {
            ("local", "Local LLM")
        };

        Self {
            base_url,
            api_key: env::var(LOCAL_LLM_API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            default_model: env::var(LOCAL_LLM_MODEL_ENV)
                .unwrap_or_else(|_| DEFAULT_LOCAL_MODEL.to_owned()),
            provider_name,
            display_name: display_name.to_owned(),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {} provider: base_url={}, model={}",
            config.display_name, config.base_url, config.default_model
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Add authorization header if an API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    /// Map an API error body to an `AppError`
    fn parse_error_response(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        let service = self.config.display_name.clone();
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::auth_invalid(format!(
                    "API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("LLM rate limit reached: {}", error_response.error.message),
                ),
                400 => AppError::invalid_input(format!(
                    "API validation error: {}",
                    error_response.error.message
                )),
                404 => AppError::not_found(format!(
                    "Model or endpoint ({})",
                    error_response.error.message
                )),
                _ => AppError::external_service(
                    service,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            match status.as_u16() {
                502..=504 => AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{service} endpoint is not responding"),
                ),
                _ => AppError::external_service(
                    service,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        self.config.provider_name
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            provider = self.config.provider_name,
            model,
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self.add_auth_header(http_request).send().await.map_err(|e| {
            error!(
                "Failed to send request to {}: {}",
                self.config.provider_name, e
            );
            if e.is_connect() {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!(
                        "Cannot connect to {}. Is the server reachable at {}?",
                        self.config.display_name, self.config.base_url
                    ),
                )
            } else {
                AppError::external_service(
                    self.config.display_name.clone(),
                    format!("Failed to connect: {e}"),
                )
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(
                self.config.display_name.clone(),
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            return Err(self.parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(
                self.config.display_name.clone(),
                format!("Malformed API response: {e}"),
            )
        })?;

        let choice = openai_response.choices.into_iter().next().ok_or_else(|| {
            AppError::external_service(
                self.config.display_name.clone(),
                "API response contained no choices",
            )
        })?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            provider = self.config.provider_name,
            content_len = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion response"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        let http_request = self.client.get(self.api_url("models"));
        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{} health check failed: {e}", self.config.display_name),
                )
            })?;

        Ok(response.status().is_success())
    }
}
