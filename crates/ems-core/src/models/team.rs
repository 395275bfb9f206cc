use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Webhook-target projection of a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// No URL configured means the webhook channel is a no-op for this team.
    pub webhook_url: Option<String>,
}
