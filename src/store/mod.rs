//! Store Module
//!
//! Provides the in-memory, insertion-ordered shoe catalogue.

mod seed;
mod shoe_store;


// Re-export public types
pub use seed::SEED_SHOES;
pub use shoe_store::ShoeStore;

// == Public Constants ==
/// First id handed out by an empty store
pub const FIRST_ID: u64 = 1;
