//! Repository layer between use-cases and datasources.
//!
//! # Responsibility
//! - Give use-cases an abstraction to depend on instead of a concrete store.
//!
//! # Invariants
//! - Repositories add no logic or state of their own; errors from the
//!   datasource pass through unchanged.

pub mod inventory_repo;
