use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use log::error;

use super::{error::ApiError, AppState};
use crate::identity::Identity;

/// Identity of the caller, resolved from `Authorization: Bearer <token>`.
pub struct AuthenticatedUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        match state.identity.resolve_token(token).await {
            Ok(Some(identity)) => Ok(AuthenticatedUser(identity)),
            Ok(None) => Err(ApiError::Unauthorized),
            Err(err) => {
                error!("Identity lookup failed: {err:#}");
                Err(ApiError::Internal("Failed to resolve identity".to_string()))
            }
        }
    }
}
