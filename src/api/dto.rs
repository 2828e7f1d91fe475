//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use serde::Serialize;

/// Payload served to the front-end by `GET /api/data`
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// The message to display
    pub message: String,
}

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
