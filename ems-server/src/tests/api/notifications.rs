//! End-to-end tests for the notification REST endpoints.

use crate::build_router;

use std::sync::Arc;

use axum_test::TestServer;
use ems_auth::{Claims, JwtValidator};
use ems_config::StreamConfig;
use ems_core::Notification;
use ems_db::NotificationRepository;
use ems_stream::AppState;
use googletest::prelude::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub(super) const TEST_SECRET: &str = "test-secret-at-least-32-bytes-long!!";

pub(super) async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    ems_db::run_migrations(&pool).await.unwrap();

    pool
}

async fn test_server(pool: SqlitePool) -> TestServer {
    let validator = Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes()));
    let state = AppState::new(validator, pool, StreamConfig::default());

    TestServer::new(build_router(state)).unwrap()
}

pub(super) fn bearer_token(user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + 3600,
        iat: now,
        roles: vec![],
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn given_no_token_when_list_then_401() {
    let server = test_server(test_pool().await).await;

    let response = server.get("/api/v1/notifications").await;

    response.assert_status_unauthorized();
    let body: serde_json::Value = response.json();
    assert_that!(body["error"]["code"].as_str(), some(eq("UNAUTHORIZED")));
}

#[tokio::test]
async fn given_expired_token_when_list_then_401() {
    let server = test_server(test_pool().await).await;
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 120, // beyond leeway
        iat: now - 3600,
        roles: vec![],
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .get("/api/v1/notifications")
        .authorization_bearer(token)
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn given_notifications_when_list_then_newest_first_for_caller_only() {
    let pool = test_pool().await;
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    let mut older = Notification::new(user_id, "Older".into(), "first".into());
    older.created_at -= chrono::Duration::seconds(60);
    NotificationRepository::create(&pool, &older).await.unwrap();

    let newer = Notification::new(user_id, "Newer".into(), "second".into());
    NotificationRepository::create(&pool, &newer).await.unwrap();

    let foreign = Notification::new(other_user, "Foreign".into(), "not yours".into());
    NotificationRepository::create(&pool, &foreign).await.unwrap();

    let server = test_server(pool).await;
    let response = server
        .get("/api/v1/notifications")
        .authorization_bearer(bearer_token(user_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let notifications = body["notifications"].as_array().unwrap();
    assert_that!(notifications.len(), eq(2));
    assert_that!(notifications[0]["title"].as_str(), some(eq("Newer")));
    assert_that!(notifications[1]["title"].as_str(), some(eq("Older")));
}

#[tokio::test]
async fn given_unread_notification_when_mark_read_then_persisted() {
    let pool = test_pool().await;
    let user_id = Uuid::new_v4();
    let notification = Notification::new(user_id, "Unread".into(), "mark me".into());
    NotificationRepository::create(&pool, &notification)
        .await
        .unwrap();

    let server = test_server(pool).await;
    let response = server
        .put(&format!("/api/v1/notifications/{}/read", notification.id))
        .authorization_bearer(bearer_token(user_id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_that!(body["status"].as_str(), some(eq("success")));

    let listed = server
        .get("/api/v1/notifications")
        .authorization_bearer(bearer_token(user_id))
        .await;
    let listed_body: serde_json::Value = listed.json();
    assert_that!(
        listed_body["notifications"][0]["is_read"].as_bool(),
        some(eq(true))
    );
}

#[tokio::test]
async fn given_foreign_notification_when_mark_read_then_404() {
    let pool = test_pool().await;
    let owner = Uuid::new_v4();
    let notification = Notification::new(owner, "Private".into(), "not yours".into());
    NotificationRepository::create(&pool, &notification)
        .await
        .unwrap();

    let server = test_server(pool).await;
    let response = server
        .put(&format!("/api/v1/notifications/{}/read", notification.id))
        .authorization_bearer(bearer_token(Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn given_malformed_id_when_mark_read_then_400() {
    let server = test_server(test_pool().await).await;

    let response = server
        .put("/api/v1/notifications/not-a-uuid/read")
        .authorization_bearer(bearer_token(Uuid::new_v4()))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn given_mixed_notifications_when_read_all_then_every_row_read() {
    let pool = test_pool().await;
    let user_id = Uuid::new_v4();
    for i in 0..3 {
        let notification = Notification::new(user_id, format!("N{i}"), "body".into());
        NotificationRepository::create(&pool, &notification)
            .await
            .unwrap();
    }

    let server = test_server(pool).await;
    let response = server
        .put("/api/v1/notifications/read-all")
        .authorization_bearer(bearer_token(user_id))
        .await;

    response.assert_status_ok();

    let listed = server
        .get("/api/v1/notifications")
        .authorization_bearer(bearer_token(user_id))
        .await;
    let body: serde_json::Value = listed.json();
    for notification in body["notifications"].as_array().unwrap() {
        assert_that!(notification["is_read"].as_bool(), some(eq(true)));
    }
}

#[tokio::test]
async fn given_server_when_health_then_healthy() {
    let server = test_server(test_pool().await).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_that!(body["status"].as_str(), some(eq("healthy")));
    assert_that!(body["components"]["database"].as_str(), some(eq("operational")));
}

#[tokio::test]
async fn given_stream_open_without_token_when_get_then_401() {
    let server = test_server(test_pool().await).await;

    let response = server.get("/api/v1/notifications/stream").await;

    response.assert_status_unauthorized();
}
