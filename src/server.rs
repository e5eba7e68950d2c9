// ABOUTME: HTTP server assembly: shared resources, router composition, and serving
// ABOUTME: Wires the parser, LLM provider, store, and auth service into one axum app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Server assembly
//!
//! [`ServerResources`] is the dependency container handed to every route
//! module; [`build_router`] merges the domain routers and layers tracing and
//! CORS on top; [`serve`] binds the listener and runs until ctrl-c.

use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AuthService;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::LlmProvider;
use crate::parser::WorkoutParser;
use crate::routes::{
    ExerciseDescriptionRoutes, ExerciseInfoRoutes, HealthRoutes, HistoryRoutes, LogRoutes,
    ParseRoutes, SavedWorkoutRoutes, WorkoutInfoRoutes,
};
use crate::storage::WorkoutStore;

/// Shared dependencies for all route handlers
pub struct ServerResources {
    /// Natural-language workout parsing service
    pub parser: WorkoutParser,
    /// LLM provider for prose endpoints (exercise info)
    pub llm: Arc<dyn LlmProvider>,
    /// Document store backend
    pub store: Arc<dyn WorkoutStore>,
    /// Bearer-token authentication
    pub auth: AuthService,
    /// Resolved server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble resources around a provider and store
    #[must_use]
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        store: Arc<dyn WorkoutStore>,
        auth: AuthService,
        config: ServerConfig,
    ) -> Self {
        Self {
            parser: WorkoutParser::new(Arc::clone(&llm)),
            llm,
            store,
            auth,
            config,
        }
    }
}

/// Configure CORS for web client access
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (comma-separated); empty or `*`
/// allows any origin.
fn setup_cors() -> CorsLayer {
    let configured = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let allow_origin = if configured.is_empty() || configured == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = configured
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

/// Compose the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(ParseRoutes::routes(Arc::clone(&resources)))
        .merge(LogRoutes::routes(Arc::clone(&resources)))
        .merge(HistoryRoutes::routes(Arc::clone(&resources)))
        .merge(SavedWorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseInfoRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseDescriptionRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutInfoRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
}

/// Bind the configured port and serve until ctrl-c
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let port = resources.config.http_port;
    let router = build_router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| AppError::config(format!("Failed to bind port {port}: {e}")))?;

    info!(port, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server failed: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
        return;
    }
    info!("Shutdown signal received");
}
