// ABOUTME: Route module organization for the Reprover HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers that delegate to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Route modules
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to the parser,
//! store, and LLM services carried in [`crate::server::ServerResources`].

/// Structured exercise coaching description routes
pub mod exercise_description;
/// Exercise description lookup routes
pub mod exercise_info;
/// Health check and system status routes
pub mod health;
/// Per-exercise history routes
pub mod history;
/// Workout log recording and listing routes
pub mod logs;
/// Natural-language workout parsing routes
pub mod parse;
/// Saved workout template routes
pub mod saved_workouts;
/// Workout analysis routes
pub mod workout_info;

pub use exercise_description::ExerciseDescriptionRoutes;
pub use exercise_info::ExerciseInfoRoutes;
pub use health::HealthRoutes;
pub use history::HistoryRoutes;
pub use logs::LogRoutes;
pub use parse::ParseRoutes;
pub use saved_workouts::SavedWorkoutRoutes;
pub use workout_info::WorkoutInfoRoutes;
