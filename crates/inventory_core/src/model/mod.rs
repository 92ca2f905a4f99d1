//! Domain model for the fruit inventory.
//!
//! # Responsibility
//! - Define the canonical `Fruit` record trusted by the rest of the crate.
//! - Provide the strict parsing chokepoint for persisted data.
//!
//! # Invariants
//! - Every `Fruit` is identified by a store-assigned `FruitId`.
//! - `quantity >= 0` and `name` is never empty.

pub mod fruit;
