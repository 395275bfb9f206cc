use crate::{CoreError, Notification, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format for the human-facing timestamp pushed to live streams.
/// Rendered in a fixed timezone so all clients see the same string.
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Transient projection of a [`Notification`] pushed to live connections.
/// Not persisted separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastPayload {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl BroadcastPayload {
    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialize {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl From<&Notification> for BroadcastPayload {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            is_read: false,
            created_at: notification
                .created_at
                .format(DISPLAY_TIME_FORMAT)
                .to_string(),
        }
    }
}
