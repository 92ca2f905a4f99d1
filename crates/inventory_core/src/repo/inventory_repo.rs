//! Inventory repository contract and datasource-backed implementation.

use crate::datasource::{InventoryDatasource, InventoryResult};
use crate::dto::{CreateFruitDto, UpdateFruitDto};
use crate::model::fruit::{Fruit, FruitId};
use std::sync::Arc;

/// Repository interface for fruit CRUD operations.
pub trait InventoryRepository: Send + Sync {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit>;
    fn get_all(&self) -> InventoryResult<Vec<Fruit>>;
    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit>;
    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit>;
    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit>;
}

impl<R: InventoryRepository + ?Sized> InventoryRepository for Arc<R> {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit> {
        (**self).create(dto)
    }

    fn get_all(&self) -> InventoryResult<Vec<Fruit>> {
        (**self).get_all()
    }

    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        (**self).find_by_id(id)
    }

    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit> {
        (**self).update_by_id(id, dto)
    }

    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        (**self).delete_by_id(id)
    }
}

/// Repository that forwards every call to a datasource.
pub struct InventoryRepositoryImpl<D: InventoryDatasource> {
    datasource: D,
}

impl<D: InventoryDatasource> InventoryRepositoryImpl<D> {
    pub fn new(datasource: D) -> Self {
        Self { datasource }
    }
}

impl<D: InventoryDatasource> InventoryRepository for InventoryRepositoryImpl<D> {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit> {
        self.datasource.create(dto)
    }

    fn get_all(&self) -> InventoryResult<Vec<Fruit>> {
        self.datasource.get_all()
    }

    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.datasource.find_by_id(id)
    }

    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit> {
        self.datasource.update_by_id(id, dto)
    }

    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.datasource.delete_by_id(id)
    }
}
