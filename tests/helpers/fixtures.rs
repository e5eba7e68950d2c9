// ABOUTME: Fixture builders for route integration tests
// ABOUTME: Assembles an app router over an in-memory store and a scripted provider

use reprover::auth::AuthService;
use reprover::config::{LlmProviderType, ServerConfig, StoreBackend};
use reprover::llm::LlmProvider;
use reprover::server::{build_router, ServerResources};
use reprover::storage::MemoryStore;
use std::sync::Arc;

/// Configuration for tests, independent of the process environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        api_token: None,
        llm_provider: LlmProviderType::OpenAi,
        store_backend: StoreBackend::Memory,
    }
}

/// Resources over an in-memory store with authentication disabled
pub fn test_resources(llm: Arc<dyn LlmProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        llm,
        Arc::new(MemoryStore::new()),
        AuthService::disabled(),
        test_config(),
    ))
}

/// The full application router over test resources
pub fn test_app(llm: Arc<dyn LlmProvider>) -> axum::Router {
    build_router(test_resources(llm))
}

/// A model response covering one round group with two exercises
pub const PLAN_RESPONSE: &str = r#"[{"rounds": 3, "exercises": [
    {"name": "Push-ups", "reps": 10, "weight": null, "weight_range": null, "weight_unit": null, "duration": null, "distance": null, "distance_unit": null, "note": null},
    {"name": "Squats", "reps": 15, "weight": 135, "weight_range": null, "weight_unit": "lbs", "duration": null, "distance": null, "distance_unit": null, "note": null}
]}]"#;

/// A workout log document in wire format, ready to POST
pub fn log_document(timestamp: &str, exercise: &str, reps: i64) -> serde_json::Value {
    serde_json::json!({
        "timestamp": timestamp,
        "plan": [{
            "rounds": 1,
            "exercises": [{"name": exercise}],
        }],
        "actuals": [{
            "name": exercise,
            "round": 1,
            "reps": reps,
            "weight": null,
        }],
        "duration": 1_200_000,
        "workoutName": null,
    })
}
