pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::auth_user::AuthUser,
    notifications::{
        mark_read_response::MarkReadResponse,
        notification_dto::NotificationDto,
        notification_list_response::NotificationListResponse,
        notifications::{list_notifications, mark_all_read, mark_notification_read},
    },
};

pub use crate::routes::build_router;
