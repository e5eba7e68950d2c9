// ABOUTME: In-process HTTP client for driving the app router in tests
// ABOUTME: Sends oneshot requests and decodes every response body as JSON up front

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// Drives a router without binding a socket
///
/// The router is cloned per request, so one client serves a whole test.
/// Responses come back with the body already decoded: every endpoint in this
/// API speaks JSON, and a 204 decodes as `Value::Null`.
pub struct TestClient {
    app: Router,
    bearer: Option<String>,
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self { app, bearer: None }
    }

    /// Client that sends `Authorization: Bearer <token>` on every request
    pub fn with_bearer(app: Router, token: &str) -> Self {
        Self {
            app,
            bearer: Some(token.to_owned()),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = &self.bearer {
            request = request.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router should answer");

        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };

        TestResponse { status, body }
    }
}

/// A finished response: status code plus decoded JSON body
pub struct TestResponse {
    pub status: u16,
    pub body: Value,
}
