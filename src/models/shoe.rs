//! Shoe domain entity

use serde::Serialize;

use crate::error::{Result, ShoeError};

/// Server-assigned shoe identifier.
pub type ShoeId = u64;

/// A stored shoe.
///
/// `id` is assigned by the store on creation and never changes; `brand` and
/// `model` are always non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeRecord {
    pub id: ShoeId,
    pub brand: String,
    pub model: String,
}

/// Checks that a required text field is present and not blank.
///
/// Returns the owned value on success so callers can move it into a record.
pub fn require_field(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ShoeError::Validation(format!("{} must not be empty", name))),
        None => Err(ShoeError::Validation(format!("{} is required", name))),
    }
}
