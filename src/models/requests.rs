//! Request DTOs for the shoe API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, ShoeError};
use crate::models::require_field;

/// Request body for creating (POST /shoes) or replacing (PUT /shoes/:id) a shoe
///
/// Both fields are optional at the wire level so that a missing field is
/// reported through [`ShoeRequest::validate`] as a 400 rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoeRequest {
    /// Manufacturer name
    #[serde(default)]
    pub brand: Option<String>,
    /// Model name
    #[serde(default)]
    pub model: Option<String>,
}

impl ShoeRequest {
    /// Creates a request with both fields set
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            model: Some(model.into()),
        }
    }

    /// Builds a request from a decoded JSON object.
    ///
    /// Bodies are extracted as a map first so arrays and scalars never reach
    /// the derived deserializer, which would otherwise accept `[brand, model]`
    /// positionally. Wrongly typed fields are validation failures.
    pub fn from_object(object: Map<String, Value>) -> Result<Self> {
        Self::deserialize(Value::Object(object))
            .map_err(|err| ShoeError::Validation(err.to_string()))
    }

    /// Validates the request data
    ///
    /// Returns the `(brand, model)` pair when both are present and non-blank.
    pub fn validate(self) -> Result<(String, String)> {
        let brand = require_field("brand", self.brand)?;
        let model = require_field("model", self.model)?;
        Ok((brand, model))
    }
}
