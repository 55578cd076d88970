use axum::{extract::State, Json};
use log::error;

use super::{auth::AuthenticatedUser, error::ApiError, AppState};
use crate::db::models::SubscriptionStatus;

/// GET /api/subscriptions/status
pub async fn status(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<SubscriptionStatus>, ApiError> {
    state
        .subscriptions
        .subscription_status(&identity.user_id)
        .await
        .map(Json)
        .map_err(|err| {
            error!("Subscription lookup failed for {}: {err:#}", identity.user_id);
            ApiError::Internal("Failed to fetch subscription status".to_string())
        })
}
