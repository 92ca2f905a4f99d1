use crate::datasource::InventoryResult;
use crate::dto::UpdateFruitDto;
use crate::model::fruit::{Fruit, FruitId};
use crate::repo::inventory_repo::InventoryRepository;

/// Applies a partial update to one fruit.
pub struct UpdateFruit<R: InventoryRepository> {
    repository: R,
}

impl<R: InventoryRepository> UpdateFruit<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Only fields present in `dto` change; an empty patch returns the
    /// current record.
    pub fn execute(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit> {
        self.repository.update_by_id(id, dto)
    }
}
