#![allow(dead_code)]

use ems_core::{Notification, Recipient, Team};
use uuid::Uuid;

/// Creates a test Recipient with the email channel enabled
pub fn create_test_recipient() -> Recipient {
    let id = Uuid::new_v4();
    Recipient {
        id,
        username: format!("user-{id}"),
        email: format!("user-{id}@example.com"),
        email_notifications: true,
    }
}

/// Creates a test Team with an optional webhook URL
pub fn create_test_team(webhook_url: Option<String>) -> Team {
    let id = Uuid::new_v4();
    Team {
        id,
        name: format!("team-{id}"),
        webhook_url,
    }
}

/// Creates a test Notification for a user
pub fn create_test_notification(user_id: Uuid) -> Notification {
    Notification::new(
        user_id,
        "Test Notification".to_string(),
        "Test notification message".to_string(),
    )
}
