//! GDPR export and deletion endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::{auth::AuthenticatedUser, error::ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub confirmation: String,
}

/// GET /api/data/export
pub async fn export_data(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let bundle = state
        .lifecycle
        .export_all(&identity, Utc::now())
        .await
        .map_err(|err| ApiError::from(err).context("Failed to export data"))?;

    let disposition = format!("attachment; filename=\"{}\"", bundle.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Json(bundle),
    ))
}

/// DELETE /api/data/delete
///
/// A missing or malformed body is treated as an empty confirmation.
pub async fn delete_data(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();

    let receipt = state
        .lifecycle
        .delete_all(&identity, &request.confirmation, Utc::now())
        .await
        .map_err(|err| ApiError::from(err).context("Failed to delete data"))?;

    Ok(Json(json!({
        "success": receipt.success,
        "message": "All your data has been permanently deleted",
        "deletedAt": receipt.deleted_at,
        "deletedEntries": receipt.deleted_entries,
    })))
}
