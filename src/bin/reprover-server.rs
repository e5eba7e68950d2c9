// ABOUTME: Main server binary: loads config, opens the store, and serves the HTTP API
// ABOUTME: Provider and store backends are selected from the environment at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Reprover Server Binary
//!
//! Starts the workout-tracking HTTP API: natural-language workout parsing
//! backed by an LLM provider, plus logging, history, and saved workouts over
//! a document store.

use anyhow::Result;
use clap::Parser;
use reprover::{
    auth::{AuthService, StaticTokenVerifier},
    config::{ServerConfig, StoreBackend},
    llm::provider_from_env,
    logging::LoggingConfig,
    server::{self, ServerResources},
    storage::{MemoryStore, SqliteStore, WorkoutStore},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "reprover-server")]
#[command(about = "Reprover - natural-language workout tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env();
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    info!(
        port = config.http_port,
        provider = %config.llm_provider,
        "Starting Reprover server"
    );

    let store: Arc<dyn WorkoutStore> = match config.store_backend {
        StoreBackend::Sqlite => {
            info!(url = %config.database_url, "Opening SQLite store");
            Arc::new(SqliteStore::connect(&config.database_url).await?)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let llm = provider_from_env()?;
    info!(provider = llm.name(), model = llm.default_model(), "LLM provider ready");

    let auth = match &config.api_token {
        Some(token) => AuthService::new(Arc::new(StaticTokenVerifier::new(token.clone()))),
        None => {
            warn!("No API token configured; requests are unauthenticated");
            AuthService::disabled()
        }
    };

    let resources = Arc::new(ServerResources::new(llm, store, auth, config));
    server::serve(resources).await?;

    info!("Server stopped");
    Ok(())
}
