use crate::datasource::InventoryResult;
use crate::model::fruit::{Fruit, FruitId};
use crate::repo::inventory_repo::InventoryRepository;

/// Fetches one fruit by id.
pub struct GetFruit<R: InventoryRepository> {
    repository: R,
}

impl<R: InventoryRepository> GetFruit<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fails with `InventoryError::NotFound` when `id` does not exist.
    pub fn execute(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.repository.find_by_id(id)
    }
}
