//! Request extractors for authenticated and guest access

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(JwtService::extract_from_header)
}

/// Extractor that requires a valid bearer token.
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        let claims = state.jwt_service.validate_token(token).map_err(|e| {
            use crate::auth::JwtError;
            match e {
                JwtError::ExpiredToken => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;
        Ok(CurrentUser::from(claims))
    }
}

/// Extractor that downgrades to a guest instead of rejecting.
///
/// Missing, expired or invalid tokens all yield `MaybeUser(None)`; the
/// session boundary endpoints report unauthenticated rather than erroring.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let user = bearer_token(parts)
            .and_then(|token| state.jwt_service.validate_token(token).ok())
            .map(CurrentUser::from);
        Ok(MaybeUser(user))
    }
}
