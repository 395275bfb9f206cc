use crate::Result as NotifyErrorResult;

use ems_core::{BroadcastPayload, Notification};
use ems_db::NotificationRepository;
use ems_stream::{DeferredWorkSink, DeliveryBridge};

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fan-out entry point for application events.
pub struct NotificationService;

impl NotificationService {
    /// Persist an in-app notification and push it to the user's live
    /// streams. Persistence failure aborts the call and no broadcast is
    /// attempted; live delivery is a side effect of the persisted record
    /// and never affects the result.
    pub async fn create_in_app_notification(
        pool: &SqlitePool,
        bridge: &DeliveryBridge,
        user_id: Uuid,
        title: String,
        message: String,
        sink: Option<&dyn DeferredWorkSink>,
    ) -> NotifyErrorResult<Notification> {
        let notification = Notification::new(user_id, title, message);
        NotificationRepository::create(pool, &notification).await?;

        let payload = BroadcastPayload::from(&notification);
        bridge.schedule_broadcast(user_id, payload, sink);

        debug!(
            "Created notification {} for user {user_id}",
            notification.id
        );
        Ok(notification)
    }
}
