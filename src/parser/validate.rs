// ABOUTME: Structural validation of extracted LLM output against the workout schema
// ABOUTME: Collects field-path issues instead of stopping at the first violation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Workout plan schema validation
//!
//! Checks the JSON value extracted from a model response before it is
//! deserialized into typed models. All violations are collected with their
//! field paths so a single failing response yields one complete diagnosis.
//!
//! Required: root array; per element an integer `rounds >= 1` and an array
//! `exercises`; per exercise a string `name`. Optional exercise fields must
//! be the right type or null; absent keys are treated as null.

use serde_json::Value;
use std::fmt;

/// A single schema violation with its field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the offending field, e.g. `[0].exercises[1].name`
    pub path: String,
    /// What was wrong
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Serialize issues for an error details payload
    #[must_use]
    pub fn to_json(issues: &[Self]) -> Value {
        Value::Array(
            issues
                .iter()
                .map(|issue| {
                    serde_json::json!({
                        "path": issue.path,
                        "message": issue.message,
                    })
                })
                .collect(),
        )
    }
}

/// Validate an extracted JSON value against the workout plan schema
///
/// # Errors
///
/// Returns every violation found, with field paths.
pub fn validate_plan(value: &Value) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let Some(rounds) = value.as_array() else {
        issues.push(ValidationIssue::new("$", "expected a JSON array of rounds"));
        return Err(issues);
    };

    for (i, round) in rounds.iter().enumerate() {
        validate_round(round, i, &mut issues);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn validate_round(round: &Value, index: usize, issues: &mut Vec<ValidationIssue>) {
    let path = format!("[{index}]");

    let Some(object) = round.as_object() else {
        issues.push(ValidationIssue::new(path, "expected a round object"));
        return;
    };

    match object.get("rounds") {
        None => issues.push(ValidationIssue::new(
            format!("{path}.rounds"),
            "missing required field",
        )),
        Some(v) => match v.as_u64() {
            Some(n) if n >= 1 => {}
            Some(_) => issues.push(ValidationIssue::new(
                format!("{path}.rounds"),
                "must be a positive integer",
            )),
            None => issues.push(ValidationIssue::new(
                format!("{path}.rounds"),
                "must be a positive integer",
            )),
        },
    }

    match object.get("exercises") {
        None => issues.push(ValidationIssue::new(
            format!("{path}.exercises"),
            "missing required field",
        )),
        Some(Value::Array(exercises)) => {
            for (j, exercise) in exercises.iter().enumerate() {
                validate_exercise(exercise, &format!("{path}.exercises[{j}]"), issues);
            }
        }
        Some(_) => issues.push(ValidationIssue::new(
            format!("{path}.exercises"),
            "must be an array",
        )),
    }
}

fn validate_exercise(exercise: &Value, path: &str, issues: &mut Vec<ValidationIssue>) {
    let Some(object) = exercise.as_object() else {
        issues.push(ValidationIssue::new(path, "expected an exercise object"));
        return;
    };

    match object.get("name") {
        Some(Value::String(_)) => {}
        Some(_) => issues.push(ValidationIssue::new(
            format!("{path}.name"),
            "must be a string",
        )),
        None => issues.push(ValidationIssue::new(
            format!("{path}.name"),
            "missing required field",
        )),
    }

    check_nullable(object, path, "reps", "an integer", issues, |v| {
        v.as_i64().is_some()
    });
    check_nullable(object, path, "weight", "a number", issues, |v| {
        v.as_f64().is_some()
    });
    check_nullable(object, path, "weight_range", "a string", issues, Value::is_string);
    check_nullable(object, path, "weight_unit", "a string", issues, Value::is_string);
    check_nullable(object, path, "duration", "a string", issues, Value::is_string);
    check_nullable(object, path, "distance", "a number", issues, |v| {
        v.as_f64().is_some()
    });
    check_nullable(object, path, "distance_unit", "a string", issues, Value::is_string);
    check_nullable(object, path, "note", "a string", issues, Value::is_string);
}

fn check_nullable(
    object: &serde_json::Map<String, Value>,
    path: &str,
    field: &str,
    expected: &str,
    issues: &mut Vec<ValidationIssue>,
    is_valid: impl Fn(&Value) -> bool,
) {
    // Absent keys count as null
    if let Some(value) = object.get(field) {
        if !value.is_null() && !is_valid(value) {
            issues.push(ValidationIssue::new(
                format!("{path}.{field}"),
                format!("must be {expected} or null"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_plan() {
        let value = json!([{
            "rounds": 3,
            "exercises": [
                {"name": "Push-ups", "reps": 10, "weight": null, "weight_range": null,
                 "weight_unit": null, "duration": null, "distance": null,
                 "distance_unit": null, "note": null},
            ],
        }]);
        assert!(validate_plan(&value).is_ok());
    }

    #[test]
    fn test_absent_optional_keys_are_accepted() {
        let value = json!([{"rounds": 1, "exercises": [{"name": "Burpees"}]}]);
        assert!(validate_plan(&value).is_ok());
    }

    #[test]
    fn test_root_must_be_array() {
        let issues = validate_plan(&json!({"rounds": 1})).unwrap_err();
        assert_eq!(issues[0].path, "$");
    }

    #[test]
    fn test_missing_rounds_rejected() {
        let issues = validate_plan(&json!([{"exercises": []}])).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "[0].rounds");
        assert_eq!(issues[0].message, "missing required field");
    }

    #[test]
    fn test_zero_and_fractional_rounds_rejected() {
        let issues = validate_plan(&json!([{"rounds": 0, "exercises": []}])).unwrap_err();
        assert_eq!(issues[0].path, "[0].rounds");

        let issues = validate_plan(&json!([{"rounds": 1.5, "exercises": []}])).unwrap_err();
        assert_eq!(issues[0].path, "[0].rounds");
    }

    #[test]
    fn test_non_array_exercises_rejected() {
        let issues =
            validate_plan(&json!([{"rounds": 2, "exercises": "push-ups"}])).unwrap_err();
        assert_eq!(issues[0].path, "[0].exercises");
        assert_eq!(issues[0].message, "must be an array");
    }

    #[test]
    fn test_missing_name_rejected_with_path() {
        let issues = validate_plan(&json!([{
            "rounds": 1,
            "exercises": [{"name": "Row"}, {"reps": 10}],
        }]))
        .unwrap_err();
        assert_eq!(issues[0].path, "[0].exercises[1].name");
    }

    #[test]
    fn test_wrong_field_types_collected_together() {
        let issues = validate_plan(&json!([{
            "rounds": 1,
            "exercises": [{"name": "Squats", "reps": "ten", "weight": "heavy"}],
        }]))
        .unwrap_err();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.path == "[0].exercises[0].reps"));
        assert!(issues.iter().any(|i| i.path == "[0].exercises[0].weight"));
    }

    #[test]
    fn test_issues_serialize_for_details_payload() {
        let issues = vec![ValidationIssue::new("[0].rounds", "missing required field")];
        let json = ValidationIssue::to_json(&issues);
        assert_eq!(json[0]["path"], "[0].rounds");
    }
}
