// ABOUTME: Scripted LLM providers for integration tests
// ABOUTME: Replay canned responses or fail on demand, no network involved

use async_trait::async_trait;
use reprover::errors::AppError;
use reprover::llm::{ChatRequest, ChatResponse, LlmProvider};
use std::sync::Arc;

/// Provider that answers every completion with the same canned content
pub struct ScriptedProvider {
    content: String,
}

impl ScriptedProvider {
    pub fn new(content: &str) -> Arc<dyn LlmProvider> {
        Arc::new(Self {
            content: content.to_owned(),
        })
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &str {
        "Scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Ok(ChatResponse {
            content: self.content.clone(),
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Provider whose completions always fail, for upstream-error paths
pub struct FailingProvider;

impl FailingProvider {
    #[allow(dead_code)]
    pub fn new() -> Arc<dyn LlmProvider> {
        Arc::new(Self)
    }
}

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn display_name(&self) -> &str {
        "Failing"
    }

    fn default_model(&self) -> &str {
        "failing-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service(
            "failing",
            "Simulated upstream failure",
        ))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(false)
    }
}
