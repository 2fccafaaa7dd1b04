//! API Module
//!
//! HTTP handlers and routing for the shoe REST API.
//!
//! # Endpoints
//! - `GET /shoes` - List every shoe
//! - `GET /shoes/:id` - Fetch one shoe
//! - `POST /shoes` - Create a shoe
//! - `PUT /shoes/:id` - Replace brand and model of a shoe
//! - `DELETE /shoes/:id` - Remove a shoe
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, shoe_routes};
