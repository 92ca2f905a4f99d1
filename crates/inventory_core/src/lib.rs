//! Core domain logic for the fruit inventory service.
//! This crate is the single source of truth for inventory invariants.

pub mod datasource;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod use_case;

pub use datasource::{
    InMemoryInventoryDatasource, InventoryDatasource, InventoryError, InventoryResult,
    SqliteInventoryDatasource,
};
pub use dto::{parse_fruit_id, CreateFruitDto, FruitPatch, UpdateFruitDto, ValidationError};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::fruit::{Fruit, FruitId, FruitValidationError, RawFruitRecord};
pub use repo::inventory_repo::{InventoryRepository, InventoryRepositoryImpl};
pub use use_case::{CreateFruit, DeleteFruit, GetFruit, GetFruits, UpdateFruit};

/// Minimal health-check probe.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
