use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ratings_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
    /// Extra context such as `"Movie ID: 1"`; empty when none applies.
    pub details: String,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for query outcomes and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent [`ErrorDetails`] bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A query outcome from `ratings_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the extractors could not decode.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Core(core) => {
                if let CoreError::InternalFailure { source, .. } = core {
                    tracing::error!(error = %core, cause = %source, "Rating query failed");
                }
                let status = StatusCode::from_u16(core.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, core.to_string(), core.details())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), String::new()),
        };

        let body = ErrorDetails {
            status_code: status.as_u16(),
            message,
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}
