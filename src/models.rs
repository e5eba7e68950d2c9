// ABOUTME: Core data model for workout plans, logs, and saved workouts
// ABOUTME: Serde derives keep the wire format identical to the web and iOS clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Data Model
//!
//! Plain, transient, immutable-by-convention records. Field names follow the
//! JSON payloads the clients already speak: exercise fields are snake_case,
//! while document metadata (`workoutName`, `createdAt`, `updatedAt`) is
//! camelCase, so the handful of camelCase fields carry explicit renames.
//!
//! All optional exercise fields are independently nullable; the schema does
//! not enforce mutual exclusion between reps, duration, and distance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single exercise within a round
///
/// Absent keys deserialize as `None`, so a client may omit fields instead of
/// sending explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, properly capitalized and expanded (e.g. "Romanian Deadlift")
    pub name: String,
    /// Repetition count
    #[serde(default)]
    pub reps: Option<i64>,
    /// Working weight (lower bound when a range was given)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Full range string for ranges like "24-32kg"
    #[serde(default)]
    pub weight_range: Option<String>,
    /// Weight unit ("lbs", "kg", ...)
    #[serde(default)]
    pub weight_unit: Option<String>,
    /// Time-based prescription ("30 seconds", "2 minutes")
    #[serde(default)]
    pub duration: Option<String>,
    /// Distance-based prescription value
    #[serde(default)]
    pub distance: Option<f64>,
    /// Distance unit ("meters", "km", "miles")
    #[serde(default)]
    pub distance_unit: Option<String>,
    /// Modifier note ("each side", "each arm")
    #[serde(default)]
    pub note: Option<String>,
}

impl Exercise {
    /// Create an exercise with only a name, all optional fields null
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reps: None,
            weight: None,
            weight_range: None,
            weight_unit: None,
            duration: None,
            distance: None,
            distance_unit: None,
            note: None,
        }
    }
}

/// A set of rounds over an ordered list of exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRound {
    /// How many times the exercise block is repeated (>= 1)
    pub rounds: u32,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
}

/// An ordered sequence of workout rounds
///
/// Serializes as a bare JSON array, which is the wire format the clients and
/// the LLM prompt both use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlan(pub Vec<WorkoutRound>);

impl WorkoutPlan {
    /// Number of round blocks in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the plan has no rounds
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the round blocks
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutRound> {
        self.0.iter()
    }

    /// Unique exercise names across all rounds, in first-seen order
    #[must_use]
    pub fn exercise_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for round in &self.0 {
            for exercise in &round.exercises {
                if !names.iter().any(|n| n == &exercise.name) {
                    names.push(exercise.name.clone());
                }
            }
        }
        names
    }
}

/// A logged observation of one exercise in one round
///
/// Tied to the plan by name and round number, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseActual {
    /// Exercise name as it appears in the plan
    pub name: String,
    /// Which round this observation belongs to (1-based)
    pub round: u32,
    /// Repetitions actually performed
    #[serde(default)]
    pub reps: Option<i64>,
    /// Weight actually used
    #[serde(default)]
    pub weight: Option<f64>,
}

/// A completed workout session, immutable once written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Session timestamp (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    /// The prescribed plan
    pub plan: WorkoutPlan,
    /// What was actually performed
    pub actuals: Vec<ExerciseActual>,
    /// Session duration in milliseconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// Name of the saved workout this session came from, if any
    #[serde(default, rename = "workoutName")]
    pub workout_name: Option<String>,
}

/// A workout log as stored, with its document id and creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogRecord {
    /// Document id
    pub id: String,
    /// The logged session
    #[serde(flatten)]
    pub log: WorkoutLog,
    /// When the document was written
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A named, reusable workout plan owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWorkout {
    /// Document id
    pub id: String,
    /// Display name
    pub name: String,
    /// The plan itself
    pub workout: WorkoutPlan,
    /// Creation time
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update time
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// One data point in an exercise's history, derived from logged actuals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Session timestamp of the log the observation came from
    pub date: DateTime<Utc>,
    /// Repetitions performed
    pub reps: Option<i64>,
    /// Weight used
    pub weight: Option<f64>,
    /// Round number within the session
    pub round: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_plan() -> WorkoutPlan {
        WorkoutPlan(vec![WorkoutRound {
            rounds: 3,
            exercises: vec![
                Exercise {
                    reps: Some(10),
                    ..Exercise::named("Push-ups")
                },
                Exercise {
                    reps: Some(15),
                    weight: Some(135.0),
                    weight_unit: Some("lbs".to_owned()),
                    ..Exercise::named("Squats")
                },
            ],
        }])
    }

    #[test]
    fn test_plan_serializes_as_bare_array() {
        let json = serde_json::to_value(sample_plan()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["rounds"], 3);
        assert_eq!(json[0]["exercises"][1]["weight_unit"], "lbs");
    }

    #[test]
    fn test_plan_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: WorkoutPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }

    #[test]
    fn test_absent_optional_fields_read_as_null() {
        let exercise: Exercise = serde_json::from_str(r#"{"name": "Burpees"}"#).unwrap();
        assert_eq!(exercise, Exercise::named("Burpees"));
    }

    #[test]
    fn test_workout_log_wire_names() {
        let log = WorkoutLog {
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            plan: sample_plan(),
            actuals: vec![ExerciseActual {
                name: "Push-ups".to_owned(),
                round: 1,
                reps: None,
                weight: None,
            }],
            duration: Some(1_800_000),
            workout_name: Some("Monday".to_owned()),
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["workoutName"], "Monday");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2025-06-01T12:00:00"));

        let back: WorkoutLog = serde_json::from_value(json).unwrap();
        assert_eq!(log, back);
    }

    #[test]
    fn test_log_record_flattens_log_fields() {
        let record = WorkoutLogRecord {
            id: "abc".to_owned(),
            log: WorkoutLog {
                timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
                plan: sample_plan(),
                actuals: Vec::new(),
                duration: None,
                workout_name: None,
            },
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json.get("plan").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("log").is_none());
    }

    #[test]
    fn test_exercise_names_unique_first_seen_order() {
        let plan = WorkoutPlan(vec![
            WorkoutRound {
                rounds: 2,
                exercises: vec![Exercise::named("Row"), Exercise::named("Burpees")],
            },
            WorkoutRound {
                rounds: 1,
                exercises: vec![Exercise::named("Burpees"), Exercise::named("Plank")],
            },
        ]);
        assert_eq!(plan.exercise_names(), vec!["Row", "Burpees", "Plank"]);
    }
}
