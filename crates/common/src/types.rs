use serde::Serialize;

/// Body of the health-check response.
///
/// Both fields are fixed: the payload only signals that the process is up
/// and answering requests. Serialises as
/// `{"status":"ok","message":"Server running"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub const STATUS_OK: &'static str = "ok";
    pub const MESSAGE_RUNNING: &'static str = "Server running";

    /// Creates the payload reported while the server is running.
    pub fn ok() -> Self {
        Self {
            status: Self::STATUS_OK,
            message: Self::MESSAGE_RUNNING,
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_ok_has_fixed_fields() {
        let response = HealthResponse::ok();
        assert_eq!(response.status, "ok");
        assert_eq!(response.message, "Server running");
    }

    #[test]
    fn health_response_fields_are_never_empty() {
        let response = HealthResponse::default();
        assert!(!response.status.is_empty());
        assert!(!response.message.is_empty());
    }

    #[test]
    fn health_response_serializes_in_field_order() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok","message":"Server running"}"#);
    }
}
