//! Seed catalogue loaded at startup when `SEED_DATA` is enabled.

/// `(brand, model)` pairs inserted in order, receiving ids 1..=N.
pub const SEED_SHOES: &[(&str, &str)] = &[
    ("scarpa", "instinct"),
    ("la sportiva", "solution"),
    ("five ten", "hiangle"),
];
