//! Fallback for unmatched requests.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Answers every method/path combination without a route.
pub async fn handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
