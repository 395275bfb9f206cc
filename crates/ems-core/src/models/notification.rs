use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted in-app notification. Mutated only by explicit mark-read
/// operations, never by the delivery path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,

    pub title: String,
    pub message: String,

    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: Uuid, title: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            message,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}
