//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use pawhub_axum::{AxumContext, CorsConfig, ServiceKind, create_router};
use pawhub_core::{AppCore, UserPrincipal};
use pawhub_db::TestDb;
use serde_json::Value;
use tower::ServiceExt;

/// A router over an in-memory database, plus a way to mint tokens.
pub struct TestApp {
    pub router: Router,
    pub core: Arc<AppCore>,
    _db: TestDb,
}

impl TestApp {
    pub async fn new(service: ServiceKind) -> Self {
        let db = TestDb::new().await.expect("test database");
        let core = Arc::new(db.app_core());
        let router = create_router(
            AxumContext::new(Arc::clone(&core), service),
            &CorsConfig::AllowAll,
        );
        Self {
            router,
            core,
            _db: db,
        }
    }

    /// Issue a token for a user with `ROLE_USER`.
    pub async fn token_for(&self, username: &str, user_id: i64) -> String {
        let principal = UserPrincipal::new(username, user_id, ["ROLE_USER"]);
        self.core
            .auth()
            .issue_token(&principal)
            .await
            .expect("issue token")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.call(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(token), Some(body)).await
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self.send(request).await;
        let status = response.status();
        (status, json_body(response).await)
    }
}

/// Collect a response body as JSON. Empty bodies become `Value::Null`.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    }
}
