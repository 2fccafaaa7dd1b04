//! Domain entity and request/response models for the shoe API
//!
//! This module defines the shoe record itself plus the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod shoe;

// Re-export commonly used types
pub use requests::ShoeRequest;
pub use responses::{DataResponse, ErrorDetail, ErrorResponse, HealthResponse};
pub use shoe::{require_field, ShoeId, ShoeRecord};
