//! Health check endpoint.

use axum::Json;
use platform_common::HealthResponse;

/// GET / — reports that the server is running.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
