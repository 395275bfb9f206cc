use ems_core::Notification;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: i64,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id.to_string(),
            title: n.title,
            message: n.message,
            is_read: n.is_read,
            created_at: n.created_at.timestamp(),
        }
    }
}
