use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use super::{auth::AuthenticatedUser, error::ApiError, AppState};
use crate::{
    cooldown::CooldownDecision,
    db::models::NewMoodEntry,
    entries::{EntryView, Progress},
};

/// GET /api/entries
pub async fn list(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    let entries = state
        .entries
        .list_entries(&identity)
        .await
        .map_err(|err| ApiError::from(err).context("Failed to load entries"))?;
    Ok(Json(entries))
}

/// POST /api/entries
pub async fn create(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    payload: Result<Json<NewMoodEntry>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let created = state
        .entries
        .create_entry(&identity, input, Utc::now())
        .await
        .map_err(|err| ApiError::from(err).context("Failed to save entry"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/entries/cooldown
pub async fn cooldown(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<CooldownDecision>, ApiError> {
    let decision = state
        .entries
        .cooldown_status(&identity, Utc::now())
        .await
        .map_err(|err| ApiError::from(err).context("Failed to check cooldown"))?;
    Ok(Json(decision))
}

/// GET /api/progress
pub async fn progress(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<Json<Progress>, ApiError> {
    let progress = state
        .entries
        .progress(&identity, Utc::now().date_naive())
        .await
        .map_err(|err| ApiError::from(err).context("Failed to load progress"))?;
    Ok(Json(progress))
}
