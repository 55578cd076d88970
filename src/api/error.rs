use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;

use crate::{error::ServiceError, lifecycle::DELETE_CONFIRMATION_PHRASE};

/// Error responses. Bodies are always `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    TooManyRequests { minutes_until_next: u32 },
    Internal(String),
}

impl ApiError {
    /// Replace the generic message of an internal error with a route-specific one.
    pub fn context(self, message: &str) -> Self {
        match self {
            ApiError::Internal(_) => ApiError::Internal(message.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::TooManyRequests { minutes_until_next } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "error": format!(
                        "You've logged several moods recently. Take a moment and try again in {minutes_until_next} minute(s)."
                    ),
                    "minutesUntilNext": minutes_until_next,
                })),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthorized => ApiError::Unauthorized,
            ServiceError::InvalidConfirmation => ApiError::BadRequest(format!(
                "Invalid confirmation. Please type \"{DELETE_CONFIRMATION_PHRASE}\" to confirm."
            )),
            ServiceError::InvalidEntry(message) => ApiError::BadRequest(message),
            ServiceError::CoolingDown { minutes_until_next } => {
                ApiError::TooManyRequests { minutes_until_next }
            }
            ServiceError::Storage(err) => {
                error!("Storage failure: {err:#}");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ServiceError::InvalidConfirmation, StatusCode::BAD_REQUEST),
            (
                ServiceError::InvalidEntry("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::CoolingDown {
                    minutes_until_next: 3,
                },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                ServiceError::Storage(anyhow::anyhow!("disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn context_only_rewrites_internal_errors() {
        assert!(matches!(
            ApiError::Internal("x".into()).context("Failed to export data"),
            ApiError::Internal(msg) if msg == "Failed to export data"
        ));
        assert!(matches!(
            ApiError::Unauthorized.context("ignored"),
            ApiError::Unauthorized
        ));
    }
}
