use crate::health;
use crate::{list_notifications, mark_all_read, mark_notification_read};

use ems_stream::AppState;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Live notification stream (SSE)
        .route("/api/v1/notifications/stream", get(ems_stream::handler))
        // Notification REST endpoints
        .route("/api/v1/notifications", get(list_notifications))
        .route("/api/v1/notifications/read-all", put(mark_all_read))
        .route(
            "/api/v1/notifications/{notification_id}/read",
            put(mark_notification_read),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the SSE stream)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
