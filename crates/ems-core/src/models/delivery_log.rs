use crate::DeliveryChannel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only audit record for one out-of-band delivery attempt or outcome.
/// Exactly one of `user_id` / `team_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryLog {
    pub id: Uuid,

    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,

    pub channel: DeliveryChannel,
    /// ATTEMPT_n | SENT | MOCK_SENT | FAILED_<reason>
    pub status: String,

    pub payload: Option<String>,
    pub error_message: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl DeliveryLog {
    pub fn for_user(user_id: Uuid, channel: DeliveryChannel, status: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            team_id: None,
            channel,
            status,
            payload: None,
            error_message: None,
            created_at: Utc::now(),
        }
    }

    pub fn for_team(team_id: Uuid, channel: DeliveryChannel, status: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            team_id: Some(team_id),
            channel,
            status,
            payload: None,
            error_message: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_payload(mut self, payload: String) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error_message = Some(error);
        self
    }
}
