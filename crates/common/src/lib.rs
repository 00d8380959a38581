//! Shared wire types for the platform HTTP service.

pub mod types;

pub use types::HealthResponse;
