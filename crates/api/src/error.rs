//! API error types with HTTP response mapping.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the method and path.
    #[error("cannot {method} {path}")]
    NotFound { method: Method, path: String },

    /// A JSON body failed to parse, or its top-level value is not an object or array.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// The request body exceeded the buffering limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// A JSON body declared a charset other than UTF-8.
    #[error("unsupported charset \"{0}\"")]
    UnsupportedCharset(String),

    /// A JSON body declared a content encoding other than `identity`.
    #[error("unsupported content encoding \"{0}\"")]
    UnsupportedEncoding(String),
}

impl ApiError {
    /// Returns the HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) | ApiError::BodyRead(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedCharset(_) | ApiError::UnsupportedEncoding(_) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !matches!(self, ApiError::NotFound { .. }) {
            tracing::debug!(%status, error = %self, "rejected request");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
