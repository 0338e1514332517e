//! API error type and its HTTP mapping.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `BadRequest` | 400 | `{"error": "<message>"}` |
//! | `Internal` | 500 | `{"error": "Internal server error"}` |
//! | `UnknownRequest` | 404 | `{"error": "Unknown request"}` |

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::dto::ErrorResponse;
use crate::domain::PricingError;
use crate::infrastructure::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The client sent something unusable.
    #[error("{0}")]
    BadRequest(String),

    /// Something failed on the server side. The detail is only logged.
    #[error("Internal server error")]
    Internal,

    /// No route matches the method and path.
    #[error("Unknown request")]
    UnknownRequest,
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnknownRequest => StatusCode::NOT_FOUND,
        }
    }

    /// Logs a store failure with `context` and converts it to
    /// [`ApiError::Internal`].
    #[must_use]
    pub fn store_failure(context: &str, error: &StoreError) -> Self {
        tracing::error!(%error, "{context}");
        Self::Internal
    }
}

impl From<PricingError> for ApiError {
    fn from(error: PricingError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // No JSON body at all means none of the fields were supplied.
            JsonRejection::MissingJsonContentType(_) => PricingError::MissingFields.into(),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
