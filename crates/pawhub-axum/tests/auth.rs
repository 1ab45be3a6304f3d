//! Integration tests for bearer token authentication.
//!
//! Verifies that:
//! - `/health` is reachable without a token
//! - `/api/*` answers 401 with a JSON body for missing or unknown tokens
//! - a valid token reaches the handler with the resolved principal
//! - tokens lacking `ROLE_USER` get 403, revoked tokens 401

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{TestApp, json_body};
use http_body_util::BodyExt;
use pawhub_axum::ServiceKind;
use pawhub_axum::auth::REQUIRED_AUTHORITY;
use pawhub_core::UserPrincipal;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_no_auth_required() {
    let app = TestApp::new(ServiceKind::Pet).await;

    let response = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn missing_token_is_rejected_with_json_error() {
    let app = TestApp::new(ServiceKind::Pet).await;

    let response = app
        .send(
            Request::builder()
                .uri("/api/whoami")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response.headers().contains_key(header::WWW_AUTHENTICATE),
        "Response should include WWW-Authenticate header"
    );
    assert_eq!(json_body(response).await["status"], json!(401));
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let app = TestApp::new(ServiceKind::Gym).await;

    let (status, body) = app.get("/api/whoami", Some("not-a-token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("invalid bearer token"));
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let app = TestApp::new(ServiceKind::Gym).await;
    let token = app.token_for("alice", 1).await;

    let response = app
        .send(
            Request::builder()
                .uri("/api/whoami")
                .header(header::AUTHORIZATION, format!("Basic {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_resolves_principal() {
    let app = TestApp::new(ServiceKind::Gym).await;
    let token = app.token_for("alice", 42).await;

    let (status, body) = app.get("/api/whoami", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "service": "gym",
            "username": "alice",
            "userId": 42,
            "authorities": ["ROLE_USER"],
        })
    );
}

#[tokio::test]
async fn token_without_user_role_is_forbidden() {
    let app = TestApp::new(ServiceKind::Blockchain).await;
    let auditor = UserPrincipal::new("audra", 9, ["ROLE_AUDITOR"]);
    let token = app.core.auth().issue_token(&auditor).await.unwrap();

    let response = app
        .send(
            Request::builder()
                .uri("/api/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));
    let body = json_body(response).await;
    assert_eq!(body["status"], json!(403));
    assert_eq!(
        body["error"],
        json!(format!("{REQUIRED_AUTHORITY} authority required"))
    );
}

#[tokio::test]
async fn revoked_token_is_rejected() {
    let app = TestApp::new(ServiceKind::Chat).await;
    let token = app.token_for("rex", 3).await;
    assert!(app.core.auth().revoke_token(&token).await.unwrap());

    let (status, _) = app.get("/api/chat/history", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
