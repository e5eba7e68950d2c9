// ABOUTME: Integration tests for the workout analysis endpoint
// ABOUTME: Covers the analysis payload, unreadable model output, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

mod helpers;

use helpers::fixtures::test_app;
use helpers::http::TestClient;
use helpers::scripted_llm::ScriptedProvider;
use serde_json::{json, Value};

const ANALYSIS_RESPONSE: &str = r#"{
    "workoutType": "Strength",
    "muscleGroups": ["Chest", "Quads"],
    "estimatedCalories": 250,
    "difficulty": "Intermediate",
    "tips": ["Warm up first", "Rest 90s between rounds"],
    "modifications": {"easier": ["Reduce weight"], "harder": ["Add a round"]},
    "recoveryTime": "48 hours"
}"#;

fn sample_workout() -> Value {
    json!([{
        "rounds": 3,
        "exercises": [
            {"name": "Push-ups", "reps": 10},
            {"name": "Squats", "reps": 15, "weight": 135, "weight_unit": "lbs"},
        ],
    }])
}

#[tokio::test]
async fn test_workout_info_returns_analysis() {
    let client = TestClient::new(test_app(ScriptedProvider::new(ANALYSIS_RESPONSE)));

    let response = client
        .post("/api/workout-info", json!({"workout": sample_workout()}))
        .await;
    assert_eq!(response.status, 200);

    assert_eq!(response.body["workoutType"], "Strength");
    assert_eq!(response.body["muscleGroups"], json!(["Chest", "Quads"]));
    assert_eq!(
        response.body["modifications"]["harder"],
        json!(["Add a round"])
    );
}

#[tokio::test]
async fn test_workout_info_accepts_markdown_wrapped_json() {
    let wrapped = format!("```json\n{ANALYSIS_RESPONSE}\n```");
    let client = TestClient::new(test_app(ScriptedProvider::new(&wrapped)));

    let response = client
        .post("/api/workout-info", json!({"workout": sample_workout()}))
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["recoveryTime"], "48 hours");
}

#[tokio::test]
async fn test_workout_info_unreadable_answer_reports_raw_text() {
    let client = TestClient::new(test_app(ScriptedProvider::new(
        "That looks like a great workout!",
    )));

    let response = client
        .post("/api/workout-info", json!({"workout": sample_workout()}))
        .await;
    assert_eq!(response.status, 500);

    assert_eq!(response.body["error"]["code"], "LLM_OUTPUT_INVALID");
    assert_eq!(
        response.body["error"]["details"]["raw_response"],
        "That looks like a great workout!"
    );
}

#[tokio::test]
async fn test_workout_info_requires_workout_field() {
    let client = TestClient::new(test_app(ScriptedProvider::new(ANALYSIS_RESPONSE)));

    let response = client.post("/api/workout-info", json!({})).await;
    assert_eq!(response.status, 400);

    let response = client
        .post("/api/workout-info", json!({"workout": null}))
        .await;
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"]["code"], "INVALID_INPUT");
}
