//! Shoe Store Module
//!
//! Authoritative in-memory collection of shoe records.

use crate::error::{Result, ShoeError};
use crate::models::{require_field, ShoeId, ShoeRecord};
use crate::store::{FIRST_ID, SEED_SHOES};

// == Shoe Store ==
/// In-memory shoe storage.
///
/// Records are kept in insertion order. Ids increase monotonically and are
/// never reused, even after the record holding them is removed.
#[derive(Debug)]
pub struct ShoeStore {
    /// Records in insertion order
    shoes: Vec<ShoeRecord>,
    /// Id the next successful create will receive
    next_id: ShoeId,
}

impl ShoeStore {
    // == Constructors ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            shoes: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Creates a store preloaded with the seed catalogue.
    pub fn with_seed() -> Self {
        let mut store = Self::new();
        for (brand, model) in SEED_SHOES {
            store.shoes.push(ShoeRecord {
                id: store.next_id,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
            });
            store.next_id += 1;
        }
        store
    }

    // == Find All ==
    /// Returns every record in insertion order.
    pub fn find_all(&self) -> Vec<ShoeRecord> {
        self.shoes.clone()
    }

    // == Find By Id ==
    /// Returns the record stored under `id`.
    pub fn find_by_id(&self, id: ShoeId) -> Result<ShoeRecord> {
        self.shoes
            .iter()
            .find(|shoe| shoe.id == id)
            .cloned()
            .ok_or_else(|| ShoeError::not_found(id))
    }

    // == Create ==
    /// Validates and inserts a new record, assigning it the next id.
    ///
    /// A failed validation does not consume an id.
    pub fn create(&mut self, brand: String, model: String) -> Result<ShoeRecord> {
        let brand = require_field("brand", Some(brand))?;
        let model = require_field("model", Some(model))?;

        let shoe = ShoeRecord {
            id: self.next_id,
            brand,
            model,
        };
        self.next_id += 1;
        self.shoes.push(shoe.clone());

        Ok(shoe)
    }

    // == Update ==
    /// Replaces brand and model of an existing record in place.
    ///
    /// NotFound takes precedence over validation failures.
    pub fn update(&mut self, id: ShoeId, brand: String, model: String) -> Result<ShoeRecord> {
        let index = self.position(id)?;
        let brand = require_field("brand", Some(brand))?;
        let model = require_field("model", Some(model))?;

        let shoe = &mut self.shoes[index];
        shoe.brand = brand;
        shoe.model = model;

        Ok(shoe.clone())
    }

    // == Remove ==
    /// Deletes the record stored under `id`.
    pub fn remove(&mut self, id: ShoeId) -> Result<()> {
        let index = self.position(id)?;
        self.shoes.remove(index);
        Ok(())
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    fn position(&self, id: ShoeId) -> Result<usize> {
        self.shoes
            .iter()
            .position(|shoe| shoe.id == id)
            .ok_or_else(|| ShoeError::not_found(id))
    }
}

impl Default for ShoeStore {
    fn default() -> Self {
        Self::new()
    }
}
