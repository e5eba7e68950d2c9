// ABOUTME: Integration tests for health and readiness endpoints
// ABOUTME: Verifies both endpoints answer without touching the store or the LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

mod helpers;

use helpers::fixtures::{test_app, PLAN_RESPONSE};
use helpers::http::TestClient;
use helpers::scripted_llm::ScriptedProvider;

#[tokio::test]
async fn test_health_endpoint() {
    let client = TestClient::new(test_app(ScriptedProvider::new(PLAN_RESPONSE)));

    let response = client.get("/health").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "healthy");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_reports_provider() {
    let client = TestClient::new(test_app(ScriptedProvider::new(PLAN_RESPONSE)));

    let response = client.get("/ready").await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "ready");
    assert_eq!(response.body["llm_provider"], "scripted");
}
