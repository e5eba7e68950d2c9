// ABOUTME: Environment-based server configuration loaded once at startup
// ABOUTME: Covers HTTP port, store backend, auth token, and LLM provider selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! Server configuration
//!
//! Configuration is environment-only: every knob has a documented env var and
//! a sane default, read once into [`ServerConfig`] at startup.

use std::env;
use std::fmt;

/// Environment variable for the HTTP listen port
pub const HTTP_PORT_ENV: &str = "REPROVER_HTTP_PORT";

/// Environment variable for the SQLite database URL
pub const DATABASE_URL_ENV: &str = "REPROVER_DATABASE_URL";

/// Environment variable for the static API bearer token (optional)
pub const API_TOKEN_ENV: &str = "REPROVER_API_TOKEN";

/// Environment variable for the store backend (`sqlite` or `memory`)
pub const STORE_BACKEND_ENV: &str = "REPROVER_STORE";

/// Default HTTP port, matching the original deployment
const DEFAULT_HTTP_PORT: u16 = 3001;

/// Default SQLite database URL
const DEFAULT_DATABASE_URL: &str = "sqlite:reprover.db?mode=rwc";

/// Which LLM provider endpoint to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderType {
    /// OpenAI cloud API (default)
    OpenAi,
    /// Local OpenAI-compatible server (Ollama, vLLM)
    Local,
}

impl LlmProviderType {
    /// Environment variable controlling provider selection
    pub const ENV_VAR: &'static str = "REPROVER_LLM_PROVIDER";

    /// Read the provider type from the environment
    ///
    /// Unrecognized values fall back to the default (`openai`).
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(Self::ENV_VAR).as_deref() {
            Ok("local") | Ok("ollama") | Ok("vllm") => Self::Local,
            _ => Self::OpenAi,
        }
    }
}

impl fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Which document-store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SQLite via sqlx (default)
    Sqlite,
    /// In-memory store, contents lost on restart
    Memory,
}

impl StoreBackend {
    /// Read the store backend from the environment
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(STORE_BACKEND_ENV).as_deref() {
            Ok("memory") => Self::Memory,
            _ => Self::Sqlite,
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database URL for the SQLite store
    pub database_url: String,
    /// Static bearer token; `None` disables authentication
    pub api_token: Option<String>,
    /// Selected LLM provider
    pub llm_provider: LlmProviderType,
    /// Selected store backend
    pub store_backend: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let http_port = env::var(HTTP_PORT_ENV)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let database_url =
            env::var(DATABASE_URL_ENV).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let api_token = env::var(API_TOKEN_ENV).ok().filter(|t| !t.is_empty());

        Self {
            http_port,
            database_url,
            api_token,
            llm_provider: LlmProviderType::from_env(),
            store_backend: StoreBackend::from_env(),
        }
    }
}
