//! In-memory implementation of the fruit datasource.
//!
//! Each instance is its own store; nothing is shared between instances.
//! Records are kept in raw form and parsed on the way out, same as SQLite.

use super::{InventoryDatasource, InventoryError, InventoryResult};
use crate::dto::{CreateFruitDto, UpdateFruitDto};
use crate::model::fruit::{Fruit, FruitId, RawFruitRecord};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct InMemoryStore {
    last_id: FruitId,
    records: BTreeMap<FruitId, RawFruitRecord>,
}

/// Fruit datasource backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryInventoryDatasource {
    store: Mutex<InMemoryStore>,
}

impl InMemoryInventoryDatasource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` verbatim under `id`, bypassing validation.
    ///
    /// Lets callers reproduce records a real store could hold after manual
    /// edits, so read-path rejection can be exercised.
    pub fn insert_raw(&self, id: FruitId, record: RawFruitRecord) -> InventoryResult<()> {
        let mut store = self.lock()?;
        store.last_id = store.last_id.max(id);
        store.records.insert(id, record);
        Ok(())
    }

    fn lock(&self) -> InventoryResult<MutexGuard<'_, InMemoryStore>> {
        self.store.lock().map_err(|_| InventoryError::LockPoisoned)
    }
}

impl InventoryDatasource for InMemoryInventoryDatasource {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit> {
        let mut store = self.lock()?;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or(InventoryError::IdSpaceExhausted)?;
        let record = RawFruitRecord {
            id: Some(id),
            name: Some(dto.name().to_string()),
            quantity: Some(dto.quantity()),
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        };
        let fruit = Fruit::from_record(record.clone())?;
        store.last_id = id;
        store.records.insert(id, record);
        Ok(fruit)
    }

    fn get_all(&self) -> InventoryResult<Vec<Fruit>> {
        let store = self.lock()?;
        store
            .records
            .values()
            .cloned()
            .map(|record| Fruit::from_record(record).map_err(InventoryError::from))
            .collect()
    }

    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        let store = self.lock()?;
        let record = store
            .records
            .get(&id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))?;
        Ok(Fruit::from_record(record)?)
    }

    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit> {
        let patch = dto.values();
        let mut store = self.lock()?;
        let current = store
            .records
            .get(&id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))?;

        let updated = RawFruitRecord {
            name: patch.name.or(current.name),
            quantity: patch.quantity.or(current.quantity),
            ..current
        };
        let fruit = Fruit::from_record(updated.clone())?;
        store.records.insert(id, updated);
        Ok(fruit)
    }

    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        let mut store = self.lock()?;
        let record = store
            .records
            .remove(&id)
            .ok_or(InventoryError::NotFound(id))?;
        Ok(Fruit::from_record(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryInventoryDatasource;
    use crate::datasource::{InventoryDatasource, InventoryError};
    use crate::dto::{CreateFruitDto, UpdateFruitDto};
    use crate::model::fruit::RawFruitRecord;
    use serde_json::json;

    fn create(datasource: &InMemoryInventoryDatasource, name: &str, quantity: i64) -> i64 {
        let dto = CreateFruitDto::create(&json!({"name": name, "quantity": quantity})).unwrap();
        datasource.create(&dto).unwrap().id
    }

    #[test]
    fn ids_increase_and_are_not_reused_after_delete() {
        let datasource = InMemoryInventoryDatasource::new();
        let first = create(&datasource, "Apple", 1);
        datasource.delete_by_id(first).unwrap();
        let second = create(&datasource, "Banana", 2);
        assert!(second > first);
    }

    #[test]
    fn create_after_highest_possible_id_fails_without_storing() {
        let datasource = InMemoryInventoryDatasource::new();
        datasource
            .insert_raw(
                i64::MAX,
                RawFruitRecord {
                    id: Some(i64::MAX),
                    name: Some("Plum".to_string()),
                    quantity: Some(1),
                    created_at: Some("2026-10-19T00:00:00Z".to_string()),
                },
            )
            .unwrap();

        let dto = CreateFruitDto::create(&json!({"name": "Fig", "quantity": 2})).unwrap();
        let err = datasource.create(&dto).unwrap_err();
        assert!(matches!(err, InventoryError::IdSpaceExhausted));
        assert_eq!(datasource.get_all().unwrap().len(), 1);
    }

    #[test]
    fn instances_do_not_share_state() {
        let left = InMemoryInventoryDatasource::new();
        let right = InMemoryInventoryDatasource::new();
        create(&left, "Apple", 1);
        assert!(right.get_all().unwrap().is_empty());
    }

    #[test]
    fn update_keeps_unsupplied_fields() {
        let datasource = InMemoryInventoryDatasource::new();
        let id = create(&datasource, "Apple", 10);
        let dto = UpdateFruitDto::create(&json!({"id": id, "quantity": 0})).unwrap();

        let updated = datasource.update_by_id(id, &dto).unwrap();
        assert_eq!(updated.name, "Apple");
        assert_eq!(updated.quantity, 0);
    }

    #[test]
    fn malformed_raw_record_is_rejected_on_read() {
        let datasource = InMemoryInventoryDatasource::new();
        datasource
            .insert_raw(
                5,
                RawFruitRecord {
                    id: Some(5),
                    name: Some("Plum".to_string()),
                    quantity: Some(3),
                    created_at: Some("not a date".to_string()),
                },
            )
            .unwrap();

        let err = datasource.find_by_id(5).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidData(_)));
    }
}
