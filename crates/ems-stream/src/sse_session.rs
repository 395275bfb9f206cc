use crate::{AppState, ConnectionBuffer, ConnectionId, ConnectionRegistry, StreamMessage};

use std::collections::HashMap;
use std::convert::Infallible;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::sse::{Event, Sse},
};
use ems_auth::{AuthError, JwtValidator};
use error_location::ErrorLocation;
use futures::Stream;
use log::{debug, error, warn};
use uuid::Uuid;

/// What the session emits for one loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// `message` event carrying the JSON-encoded broadcast payload
    Message(String),
    /// `ping` keep-alive, emitted when the wait times out
    Ping,
    /// Stream end (eviction sentinel)
    Close,
}

impl SessionEvent {
    /// Map one buffer wait outcome to the event to emit. `None` input means
    /// the keep-alive timeout elapsed with no queued message.
    pub fn project(message: Option<StreamMessage>) -> Self {
        match message {
            Some(StreamMessage::Notification(payload)) => match payload.to_json() {
                Ok(json) => Self::Message(json),
                Err(e) => {
                    error!("Failed to serialize broadcast payload: {e}");
                    Self::Ping
                }
            },
            Some(StreamMessage::ServerDisconnect { reason }) => {
                debug!("Session closing: {reason}");
                Self::Close
            }
            None => Self::Ping,
        }
    }

    fn into_sse_event(self) -> Option<Event> {
        match self {
            Self::Message(json) => Some(Event::default().event("message").data(json)),
            Self::Ping => Some(Event::default().event("ping").data("pong")),
            Self::Close => None,
        }
    }
}

/// Releases the registered connection on every exit path, including peer
/// disconnect and runtime shutdown, exactly once.
struct SessionGuard {
    registry: ConnectionRegistry,
    user_id: Uuid,
    connection_id: ConnectionId,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.registry.disconnect(self.user_id, self.connection_id);
    }
}

/// SSE endpoint: GET /api/v1/notifications/stream
///
/// Authenticates the bearer credential, registers a connection, then serves
/// the keep-alive/message loop until the peer disconnects or the connection
/// is evicted.
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let user_id = authenticate(&headers, &params, &state.jwt_validator)?;
    debug!("Stream open request from user {user_id}");

    let (connection_id, buffer) = state.registry.connect(user_id);
    let guard = SessionGuard {
        registry: state.registry.clone(),
        user_id,
        connection_id,
    };

    let timeout = Duration::from_secs(state.stream.keep_alive_timeout_secs);
    Ok(Sse::new(session_stream(buffer, guard, timeout)))
}

fn session_stream(
    buffer: Arc<ConnectionBuffer>,
    guard: SessionGuard,
    timeout: Duration,
) -> impl Stream<Item = Result<Event, Infallible>> {
    futures::stream::unfold((buffer, guard), move |(buffer, guard)| async move {
        let message = buffer.recv_timeout(timeout).await;
        let event = SessionEvent::project(message).into_sse_event()?;
        Some((Ok(event), (buffer, guard)))
    })
}

/// Extract and validate the bearer credential: Authorization header first,
/// legacy `token` query parameter second.
fn authenticate(
    headers: &HeaderMap,
    params: &HashMap<String, String>,
    validator: &JwtValidator,
) -> Result<Uuid, StatusCode> {
    credential_user_id(headers, params, validator).map_err(|e| {
        warn!("Stream open rejected: {e}");
        StatusCode::UNAUTHORIZED
    })
}

fn credential_user_id(
    headers: &HeaderMap,
    params: &HashMap<String, String>,
    validator: &JwtValidator,
) -> ems_auth::Result<Uuid> {
    let token = bearer_token(headers, params)?;
    let claims = validator.validate(token)?;
    claims.user_id()
}

fn bearer_token<'r>(
    headers: &'r HeaderMap,
    params: &'r HashMap<String, String>,
) -> ems_auth::Result<&'r str> {
    if let Some(value) = headers.get("authorization").and_then(|h| h.to_str().ok()) {
        return JwtValidator::bearer_token(value);
    }

    // Legacy clients pass the token as a query parameter
    params
        .get("token")
        .map(String::as_str)
        .ok_or(AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        })
}
