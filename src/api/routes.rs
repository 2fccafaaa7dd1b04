//! API Routes
//!
//! Configures the Axum router with the shoe resource and health endpoint.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_shoe, get_shoe, health_handler, list_shoes, remove_shoe, update_shoe, AppState,
};

/// Path the shoe resource is mounted under.
pub const SHOES_PREFIX: &str = "/shoes";

/// Dispatch table for the shoe resource, relative to its mount point.
///
/// - `GET /` - list
/// - `POST /` - create
/// - `GET /:id` - get
/// - `PUT /:id` - update
/// - `DELETE /:id` - remove
pub fn shoe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shoes).post(create_shoe))
        .route("/:id", get(get_shoe).put(update_shoe).delete(remove_shoe))
}

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(SHOES_PREFIX, shoe_routes())
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
