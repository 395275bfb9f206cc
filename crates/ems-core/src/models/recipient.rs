use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact projection of a user, as the delivery channels see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Channel preference: false means the email channel is skipped silently.
    pub email_notifications: bool,
}
