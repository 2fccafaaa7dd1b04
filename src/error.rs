//! Error types for the shoe service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::models::ErrorResponse;

// == Shoe Error Enum ==
/// Unified error type for the shoe service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoeError {
    /// No shoe is stored under the requested id
    #[error("Shoe not found: {0}")]
    NotFound(String),

    /// A required field is missing or empty, or the body is unreadable
    #[error("Invalid shoe: {0}")]
    Validation(String),
}

impl ShoeError {
    /// Builds a NotFound error for any displayable id.
    pub fn not_found(id: impl ToString) -> Self {
        ShoeError::NotFound(id.to_string())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShoeError::NotFound(_) => StatusCode::NOT_FOUND,
            ShoeError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == Extractor Rejections ==
/// Unreadable bodies are reported in the same shape as missing fields.
impl From<JsonRejection> for ShoeError {
    fn from(rejection: JsonRejection) -> Self {
        ShoeError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ShoeError {
    fn into_response(self) -> Response {
        debug!(error = %self, "shoe request rejected");
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shoe service.
pub type Result<T> = std::result::Result<T, ShoeError>;
