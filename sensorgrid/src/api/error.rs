//! Transport-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::StatusMessage;

/// Errors surfaced to HTTP clients.
///
/// Every variant is terminal for the current request; none touches
/// registry state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No sensor carries the requested name
    #[error("sensor not found: {0}")]
    SensorNotFound(String),

    /// Nearest-neighbor query against an empty registry
    #[error("no sensors registered")]
    EmptyRegistry,

    /// Request body could not be decoded
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Query coordinate missing, malformed or not finite
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SensorNotFound(_) | ApiError::EmptyRegistry => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::InvalidCoordinate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(StatusMessage::error(self.to_string()))).into_response()
    }
}
