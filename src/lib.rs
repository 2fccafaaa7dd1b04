//! Shoe Store - A small REST service over an in-memory shoe catalogue
//!
//! Exposes list/get/create/update/delete for shoe records under `/shoes`.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::ShoeError;
pub use store::ShoeStore;
