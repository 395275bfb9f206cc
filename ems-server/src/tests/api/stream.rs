//! End-to-end tests for the SSE stream endpoint.
//!
//! An open stream never terminates on its own (the keep-alive loop runs
//! until the peer hangs up), so these tests drive the router with
//! `tower::ServiceExt::oneshot` and read body frames directly instead of
//! collecting a whole response.

use crate::build_router;

use super::notifications::{TEST_SECRET, bearer_token, test_pool};

use std::sync::Arc;

use axum::body::Body;
use ems_auth::JwtValidator;
use ems_config::StreamConfig;
use ems_notify::NotificationService;
use ems_stream::AppState;
use googletest::prelude::*;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

const STREAM_URI: &str = "/api/v1/notifications/stream";

fn test_state(pool: SqlitePool) -> AppState {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes()));
    AppState::new(validator, pool, StreamConfig::default())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn given_token_query_param_when_open_stream_then_connection_registered() {
    let state = test_state(test_pool().await);
    let user_id = Uuid::new_v4();
    let uri = format!("{STREAM_URI}?token={}", bearer_token(user_id));

    let response = build_router(state.clone()).oneshot(get(&uri)).await.unwrap();

    assert_that!(response.status(), eq(StatusCode::OK));
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_that!(content_type, starts_with("text/event-stream"));
    assert_that!(state.registry.user_count(), eq(1));
}

#[tokio::test]
async fn given_invalid_token_query_param_when_open_stream_then_401() {
    let state = test_state(test_pool().await);
    let uri = format!("{STREAM_URI}?token=not-a-jwt");

    let response = build_router(state.clone()).oneshot(get(&uri)).await.unwrap();

    assert_that!(response.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(state.registry.user_count(), eq(0));
}

#[tokio::test]
async fn given_no_credential_when_open_stream_then_401() {
    let state = test_state(test_pool().await);

    let response = build_router(state).oneshot(get(STREAM_URI)).await.unwrap();

    assert_that!(response.status(), eq(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_open_stream_when_notification_created_then_message_event_carries_persisted_id() {
    let state = test_state(test_pool().await);
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .uri(STREAM_URI)
        .header("authorization", format!("Bearer {}", bearer_token(user_id)))
        .body(Body::empty())
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    assert_that!(response.status(), eq(StatusCode::OK));

    let created = NotificationService::create_in_app_notification(
        &state.pool,
        &state.bridge,
        user_id,
        "Deploy finished".into(),
        "Build 42 is live".into(),
        None,
    )
    .await
    .unwrap();

    let mut body = response.into_body();
    let frame = body.frame().await.unwrap().unwrap().into_data().unwrap();
    let event = String::from_utf8(frame.to_vec()).unwrap();

    assert_that!(event.as_str(), contains_substring("event: message"));
    assert_that!(event.as_str(), contains_substring(created.id.to_string().as_str()));
}
