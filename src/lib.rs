// ABOUTME: Main library entry point for the Reprover workout tracking API
// ABOUTME: Provides LLM-backed workout parsing plus REST endpoints for logs and saved workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

#![deny(unsafe_code)]

//! # Reprover Server
//!
//! A workout tracking backend that turns free-text trainer messages into
//! structured workout plans via an external LLM, and persists workout logs
//! and saved workouts in a document-style store.
//!
//! ## Architecture
//!
//! - **llm**: Provider abstraction over OpenAI-compatible chat endpoints
//! - **parser**: The workout parsing pipeline (prompt, extract, validate)
//! - **models**: Wire-faithful data structures shared with the clients
//! - **storage**: Document-store seam with SQLite and in-memory backends
//! - **routes**: Thin axum handlers, one module per API domain
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reprover::config::ServerConfig;
//! use reprover::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env();
//!     println!("Reprover server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Injected identity-provider interface and bearer-token extraction
pub mod auth;

/// Environment-based server configuration
pub mod config;

/// Unified error handling with `AppError` and HTTP status mapping
pub mod errors;

/// LLM provider abstraction and `OpenAI`-compatible client
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Data model shared across the API surface
pub mod models;

/// Natural-language-to-workout parsing pipeline
pub mod parser;

/// HTTP route modules, one per API domain
pub mod routes;

/// Shared server state and router assembly
pub mod server;

/// Document-store boundary with SQLite and in-memory implementations
pub mod storage;
