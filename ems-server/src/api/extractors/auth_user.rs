//! Axum extractors for REST API authentication

use crate::ApiError;

use ems_auth::JwtValidator;
use ems_stream::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the authenticated user id from the `Authorization: Bearer`
/// header. Rejects the request with 401 when the credential is missing,
/// malformed, or expired.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Missing bearer credential".into(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = JwtValidator::bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            Ok(AuthUser(user_id))
        }
    }
}
