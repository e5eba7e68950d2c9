// ABOUTME: JSON extraction heuristic for free-form LLM responses
// ABOUTME: Finds the first balanced array or object substring with a string-aware scan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! JSON extraction from free-form model output
//!
//! The model is instructed to return only a JSON array, but in practice
//! responses arrive wrapped in prose or markdown fences. The extractor
//! locates the first `[` and its matching `]` with a single-pass scan that
//! respects JSON string literals and escapes, falls back to the first
//! balanced `{`..`}`, and finally to parsing the whole trimmed response.

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Extract the first JSON value embedded in a model response
///
/// # Errors
///
/// Returns an error carrying the raw response when no JSON-shaped substring
/// can be parsed.
pub fn extract_json(content: &str) -> AppResult<Value> {
    let trimmed = content.trim();

    for (open, close) in [('[', ']'), ('{', '}')] {
        if let Some(candidate) = balanced_slice(trimmed, open, close) {
            if let Ok(value) = serde_json::from_str(candidate) {
                return Ok(value);
            }
        }
    }

    serde_json::from_str(trimmed).map_err(|e| {
        AppError::llm_output_invalid(
            format!("Response contains no parseable JSON: {e}"),
            content,
        )
    })
}

/// Extract the first JSON object embedded in a model response
///
/// Object-first counterpart of [`extract_json`] for prompts that request an
/// object rather than an array. Array-first scanning would pull a nested
/// array field out of the object, so the scan here only considers `{`..`}`.
///
/// # Errors
///
/// Returns an error carrying the raw response when no JSON object can be
/// parsed.
pub fn extract_json_object(content: &str) -> AppResult<Value> {
    let trimmed = content.trim();

    if let Some(candidate) = balanced_slice(trimmed, '{', '}') {
        if let Ok(value) = serde_json::from_str::<Value>(candidate) {
            if value.is_object() {
                return Ok(value);
            }
        }
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(AppError::llm_output_invalid(
            "Response contains no parseable JSON object",
            content,
        )),
    }
}

/// Slice from the first `open` bracket to its matching `close` bracket
///
/// The scan tracks JSON string literals so brackets inside strings do not
/// affect nesting depth. Returns `None` when `open` never appears or is never
/// balanced.
fn balanced_slice(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..=start + offset]);
            }
        }
    }

    None
}
