use crate::datasource::InventoryResult;
use crate::dto::CreateFruitDto;
use crate::model::fruit::Fruit;
use crate::repo::inventory_repo::InventoryRepository;

/// Persists a new fruit.
pub struct CreateFruit<R: InventoryRepository> {
    repository: R,
}

impl<R: InventoryRepository> CreateFruit<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the stored fruit with its assigned id and timestamp.
    pub fn execute(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit> {
        self.repository.create(dto)
    }
}
