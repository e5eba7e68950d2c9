// ABOUTME: Integration tests for the exercise info endpoint
// ABOUTME: Covers the description payload, truncation, and parameter validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

mod helpers;

use helpers::fixtures::test_app;
use helpers::http::TestClient;
use helpers::scripted_llm::ScriptedProvider;
use serde_json::Value;

#[tokio::test]
async fn test_exercise_info_returns_description() {
    let client = TestClient::new(test_app(ScriptedProvider::new(
        "The Romanian deadlift is a hip-hinge movement targeting the hamstrings and glutes.",
    )));

    let response = client.get("/api/exercise-info?name=Romanian%20Deadlift").await;
    assert_eq!(response.status, 200);

    assert!(response.body["description"]
        .as_str()
        .unwrap()
        .starts_with("The Romanian deadlift"));
    assert_eq!(response.body["videoUrl"], Value::Null);
}

#[tokio::test]
async fn test_exercise_info_truncates_long_descriptions() {
    let long = "word ".repeat(200);
    let client = TestClient::new(test_app(ScriptedProvider::new(&long)));

    let response = client.get("/api/exercise-info?name=Squat").await;
    assert_eq!(response.status, 200);
    assert!(response.body["description"].as_str().unwrap().chars().count() <= 300);
}

#[tokio::test]
async fn test_exercise_info_requires_name() {
    let client = TestClient::new(test_app(ScriptedProvider::new("irrelevant")));

    let response = client.get("/api/exercise-info").await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"]["code"], "INVALID_INPUT");
}
