//! Response DTOs for the shoe API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Success envelope shared by every shoe endpoint: `{ "data": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wraps a payload
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions: `{ "error": { "message": ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Inner error object
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Human-readable description of what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}
