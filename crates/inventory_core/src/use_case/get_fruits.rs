use crate::datasource::InventoryResult;
use crate::model::fruit::Fruit;
use crate::repo::inventory_repo::InventoryRepository;

/// Lists the whole inventory.
pub struct GetFruits<R: InventoryRepository> {
    repository: R,
}

impl<R: InventoryRepository> GetFruits<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> InventoryResult<Vec<Fruit>> {
        self.repository.get_all()
    }
}
