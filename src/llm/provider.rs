// ABOUTME: Runtime LLM provider selection based on environment configuration
// ABOUTME: Resolves REPROVER_LLM_PROVIDER to a concrete OpenAI-compatible endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # LLM Provider Selection
//!
//! Both supported backends (the `OpenAI` cloud API and local Ollama/vLLM
//! servers) speak the same chat-completions wire format, so selection just
//! picks a configuration for [`OpenAiCompatibleProvider`].
//!
//! Set `REPROVER_LLM_PROVIDER`:
//! - `openai` (default): requires `OPENAI_API_KEY`
//! - `local`: uses `LOCAL_LLM_BASE_URL` (default: Ollama at localhost:11434)

use std::sync::Arc;
use tracing::info;

use super::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use crate::config::LlmProviderType;
use crate::errors::AppError;

/// Create the configured LLM provider from environment variables
///
/// # Errors
///
/// Returns an error if the required API key is missing (for the cloud
/// provider) or the HTTP client cannot be created.
pub fn provider_from_env() -> Result<Arc<dyn LlmProvider>, AppError> {
    let provider_type = LlmProviderType::from_env();

    info!(
        "Initializing LLM provider: {} (set {} to change)",
        provider_type,
        LlmProviderType::ENV_VAR
    );

    let config = match provider_type {
        LlmProviderType::OpenAi => OpenAiCompatibleConfig::openai_from_env()?,
        LlmProviderType::Local => OpenAiCompatibleConfig::local_from_env(),
    };

    let provider = OpenAiCompatibleProvider::new(config)?;
    Ok(Arc::new(provider))
}
