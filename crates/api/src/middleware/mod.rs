//! Request middleware applied in front of routing.

pub mod json_body;
pub mod metrics;

pub use json_body::{BODY_LIMIT, JsonBody, parse_json_body};
pub use metrics::track_requests;
