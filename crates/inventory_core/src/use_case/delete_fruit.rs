use crate::datasource::InventoryResult;
use crate::model::fruit::{Fruit, FruitId};
use crate::repo::inventory_repo::InventoryRepository;

/// Removes one fruit.
pub struct DeleteFruit<R: InventoryRepository> {
    repository: R,
}

impl<R: InventoryRepository> DeleteFruit<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the record as it was before removal.
    pub fn execute(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.repository.delete_by_id(id)
    }
}
