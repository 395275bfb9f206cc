//! Notification REST API handlers

use crate::{
    ApiError, ApiResult, AuthUser, MarkReadResponse, NotificationDto, NotificationListResponse,
};

use ems_db::NotificationRepository;
use ems_stream::AppState;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<NotificationListResponse>> {
    let notifications = NotificationRepository::find_by_user(&state.pool, user_id).await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect(),
    }))
}

/// PUT /api/v1/notifications/{notification_id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<Json<MarkReadResponse>> {
    let notification_uuid = Uuid::parse_str(&notification_id)?;

    // Ownership is part of the lookup: another user's notification is a 404
    let updated =
        NotificationRepository::mark_read(&state.pool, notification_uuid, user_id).await?;
    if !updated {
        return Err(ApiError::NotFound {
            message: format!("Notification {} not found", notification_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(MarkReadResponse::success()))
}

/// PUT /api/v1/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<MarkReadResponse>> {
    let updated = NotificationRepository::mark_all_read(&state.pool, user_id).await?;
    log::debug!("Marked {updated} notifications read for user {user_id}");

    Ok(Json(MarkReadResponse::success()))
}
