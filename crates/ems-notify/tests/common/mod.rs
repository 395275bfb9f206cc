#![allow(dead_code)]

use ems_core::{Recipient, Team};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    ems_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_test_recipient(email_notifications: bool) -> Recipient {
    let id = Uuid::new_v4();
    Recipient {
        id,
        username: format!("user-{id}"),
        email: format!("user-{id}@example.com"),
        email_notifications,
    }
}

pub fn create_test_team(webhook_url: Option<String>) -> Team {
    let id = Uuid::new_v4();
    Team {
        id,
        name: format!("team-{id}"),
        webhook_url,
    }
}
