// ABOUTME: Injected identity-provider interface and bearer-token extraction
// ABOUTME: Replaces the upstream identity SDK with a trait the server can swap out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

//! # Authentication
//!
//! The identity provider is an injected interface: handlers hand the request
//! headers to [`AuthService`], which extracts the bearer token and delegates
//! verification to whatever [`IdentityProvider`] was configured. With no
//! provider configured, requests proceed anonymously.

use async_trait::async_trait;
use axum::http::HeaderMap;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable user identifier from the identity provider
    pub user_id: String,
}

impl AuthenticatedUser {
    /// The identity used when authentication is disabled
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user_id: "anonymous".to_owned(),
        }
    }
}

/// Identity-provider interface
///
/// Implementations verify an opaque bearer token and resolve it to a user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a bearer token, returning the authenticated user
    async fn verify_token(&self, token: &str) -> AppResult<AuthenticatedUser>;
}

/// Verifier for a single statically-configured token
///
/// The deployment story for installations without a real identity service:
/// one shared token set via `REPROVER_API_TOKEN`.
pub struct StaticTokenVerifier {
    token: String,
}

impl StaticTokenVerifier {
    /// Create a verifier accepting exactly the given token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenVerifier {
    async fn verify_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        if token == self.token {
            Ok(AuthenticatedUser {
                user_id: "api-token".to_owned(),
            })
        } else {
            Err(AppError::auth_invalid("Invalid authentication token"))
        }
    }
}

/// Extracts bearer tokens from requests and delegates verification
pub struct AuthService {
    provider: Option<Arc<dyn IdentityProvider>>,
}

impl AuthService {
    /// Authentication enforced by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Authentication disabled; every request is anonymous
    #[must_use]
    pub const fn disabled() -> Self {
        Self { provider: None }
    }

    /// Whether a provider is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Authenticate a request from its headers
    ///
    /// # Errors
    ///
    /// With a provider configured: missing or non-bearer authorization
    /// headers are `AuthRequired`, rejected tokens are `AuthInvalid`.
    pub async fn authenticate(&self, headers: &HeaderMap) -> AppResult<AuthenticatedUser> {
        let Some(provider) = &self.provider else {
            return Ok(AuthenticatedUser::anonymous());
        };

        let auth_header = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(AppError::auth_required)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth_invalid("Authorization header is not a bearer token"))?;

        provider.verify_token(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_disabled_auth_is_anonymous() {
        let service = AuthService::disabled();
        let user = service.authenticate(&HeaderMap::new()).await.unwrap();
        assert_eq!(user, AuthenticatedUser::anonymous());
    }

    #[tokio::test]
    async fn test_missing_header_is_auth_required() {
        let service = AuthService::new(Arc::new(StaticTokenVerifier::new("secret")));
        let error = service.authenticate(&HeaderMap::new()).await.unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::AuthRequired);
    }

    #[tokio::test]
    async fn test_valid_token_accepted() {
        let service = AuthService::new(Arc::new(StaticTokenVerifier::new("secret")));
        let user = service
            .authenticate(&headers_with_auth("Bearer secret"))
            .await
            .unwrap();
        assert_eq!(user.user_id, "api-token");
    }

    #[tokio::test]
    async fn test_wrong_token_rejected() {
        let service = AuthService::new(Arc::new(StaticTokenVerifier::new("secret")));
        let error = service
            .authenticate(&headers_with_auth("Bearer nope"))
            .await
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::AuthInvalid);
    }

    #[tokio::test]
    async fn test_non_bearer_header_rejected() {
        let service = AuthService::new(Arc::new(StaticTokenVerifier::new("secret")));
        let error = service
            .authenticate(&headers_with_auth("Basic dXNlcjpwYXNz"))
            .await
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::AuthInvalid);
    }
}
