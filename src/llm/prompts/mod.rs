// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the workout parsing and exercise description prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance. The parsing prompt pins the exact JSON shape the validator
//! expects, including few-shot examples and the abbreviation-expansion rules.

/// Workout parsing system prompt
///
/// Instructs the model to return a bare JSON array of round objects, expand
/// common abbreviations (SL, RDL, DB, ...), and place weights, durations,
/// distances, and modifier notes into the right fields.
pub const WORKOUT_PARSER_SYSTEM_PROMPT: &str = include_str!("workout_parser.md");

/// Exercise description prompt template with a `{name}` placeholder
const EXERCISE_INFO_PROMPT_TEMPLATE: &str = include_str!("exercise_info.md");

/// Structured exercise-description prompt template with a `{name}` placeholder
const EXERCISE_DESCRIPTION_PROMPT_TEMPLATE: &str = include_str!("exercise_description.md");

/// Workout analysis prompt template with a `{workout}` placeholder
const WORKOUT_INFO_PROMPT_TEMPLATE: &str = include_str!("workout_info.md");

/// System message for the structured exercise-description request
pub const EXERCISE_DESCRIPTION_SYSTEM_PROMPT: &str =
    "You are a professional fitness instructor providing clear, concise exercise guidance.";

/// Get the workout parsing system prompt
#[must_use]
pub const fn workout_parser_system_prompt() -> &'static str {
    WORKOUT_PARSER_SYSTEM_PROMPT
}

/// Build the exercise description prompt for a given exercise name
#[must_use]
pub fn exercise_info_prompt(name: &str) -> String {
    EXERCISE_INFO_PROMPT_TEMPLATE.replace("{name}", name)
}

/// Build the structured exercise-description prompt (form, mistakes, muscles)
#[must_use]
pub fn exercise_description_prompt(name: &str) -> String {
    EXERCISE_DESCRIPTION_PROMPT_TEMPLATE.replace("{name}", name)
}

/// Build the workout analysis prompt around a serialized workout document
#[must_use]
pub fn workout_info_prompt(workout_json: &str) -> String {
    WORKOUT_INFO_PROMPT_TEMPLATE.replace("{workout}", workout_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_prompt_pins_array_shape() {
        assert!(WORKOUT_PARSER_SYSTEM_PROMPT.contains("JSON array"));
        assert!(WORKOUT_PARSER_SYSTEM_PROMPT.contains("\"rounds\""));
        assert!(WORKOUT_PARSER_SYSTEM_PROMPT.contains("\"exercises\""));
    }

    #[test]
    fn test_exercise_info_prompt_substitutes_name() {
        let prompt = exercise_info_prompt("Goblet Squat");
        assert!(prompt.contains("Goblet Squat"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_exercise_description_prompt_pins_json_keys() {
        let prompt = exercise_description_prompt("Deadlift");
        assert!(prompt.contains("Deadlift"));
        assert!(prompt.contains("form, mistakes, muscles, youtubeQuery"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_workout_info_prompt_embeds_workout_json() {
        let prompt = workout_info_prompt(r#"[{"rounds": 2}]"#);
        assert!(prompt.contains(r#"[{"rounds": 2}]"#));
        assert!(prompt.contains("workoutType"));
        assert!(!prompt.contains("{workout}"));
    }
}
