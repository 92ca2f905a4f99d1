use inventory_core::db::migrations::latest_version;
use inventory_core::db::open_db_in_memory;
use inventory_core::{
    CreateFruit, CreateFruitDto, DeleteFruit, GetFruit, GetFruits, InventoryDatasource,
    InventoryError, InventoryRepositoryImpl, SqliteInventoryDatasource, UpdateFruit,
    UpdateFruitDto,
};
use rusqlite::Connection;
use serde_json::json;
use std::sync::Arc;

fn datasource() -> SqliteInventoryDatasource {
    SqliteInventoryDatasource::try_new(open_db_in_memory().unwrap()).unwrap()
}

fn create_dto(name: &str, quantity: i64) -> CreateFruitDto {
    CreateFruitDto::create(&json!({"name": name, "quantity": quantity})).unwrap()
}

fn update_dto(id: i64, body: serde_json::Value) -> UpdateFruitDto {
    let mut props = body;
    props["id"] = json!(id);
    UpdateFruitDto::create(&props).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let ds = datasource();

    let created = ds.create(&create_dto("Apple", 100)).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Apple");
    assert_eq!(created.quantity, 100);

    let loaded = ds.find_by_id(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_assigns_distinct_ids_and_timestamps() {
    let ds = datasource();

    let first = ds.create(&create_dto("Apple", 1)).unwrap();
    let second = ds.create(&create_dto("Banana", 2)).unwrap();
    assert_ne!(first.id, second.id);
    assert!(second.created_at >= first.created_at);
}

#[test]
fn get_all_lists_in_id_order() {
    let ds = datasource();
    assert!(ds.get_all().unwrap().is_empty());

    let a = ds.create(&create_dto("Apple", 1)).unwrap();
    let b = ds.create(&create_dto("Banana", 2)).unwrap();
    let c = ds.create(&create_dto("Cherry", 3)).unwrap();

    let ids: Vec<i64> = ds.get_all().unwrap().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn find_missing_returns_not_found() {
    let ds = datasource();
    let err = ds.find_by_id(999).unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(999)));
}

#[test]
fn update_quantity_only_keeps_name() {
    let ds = datasource();
    let created = ds.create(&create_dto("Apple", 100)).unwrap();

    let updated = ds
        .update_by_id(created.id, &update_dto(created.id, json!({"quantity": 5})))
        .unwrap();
    assert_eq!(updated.name, "Apple");
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_to_zero_quantity_is_applied() {
    let ds = datasource();
    let created = ds.create(&create_dto("Apple", 100)).unwrap();

    let updated = ds
        .update_by_id(created.id, &update_dto(created.id, json!({"quantity": 0})))
        .unwrap();
    assert_eq!(updated.quantity, 0);
    assert_eq!(ds.find_by_id(created.id).unwrap().quantity, 0);
}

#[test]
fn update_name_only_keeps_quantity() {
    let ds = datasource();
    let created = ds.create(&create_dto("Aple", 7)).unwrap();

    let updated = ds
        .update_by_id(created.id, &update_dto(created.id, json!({"name": "Apple"})))
        .unwrap();
    assert_eq!(updated.name, "Apple");
    assert_eq!(updated.quantity, 7);
}

#[test]
fn update_without_recognized_fields_leaves_record_unchanged() {
    let ds = datasource();
    let created = ds.create(&create_dto("Apple", 100)).unwrap();

    let updated = ds
        .update_by_id(created.id, &update_dto(created.id, json!({"color": "red"})))
        .unwrap();
    assert_eq!(updated, created);
}

#[test]
fn update_missing_returns_not_found() {
    let ds = datasource();

    let err = ds
        .update_by_id(42, &update_dto(42, json!({"quantity": 1})))
        .unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(42)));

    let empty_patch_err = ds.update_by_id(42, &update_dto(42, json!({}))).unwrap_err();
    assert!(matches!(empty_patch_err, InventoryError::NotFound(42)));
}

#[test]
fn delete_returns_removed_record_and_then_not_found() {
    let ds = datasource();
    let created = ds.create(&create_dto("Apple", 100)).unwrap();

    let removed = ds.delete_by_id(created.id).unwrap();
    assert_eq!(removed, created);

    assert!(matches!(
        ds.find_by_id(created.id).unwrap_err(),
        InventoryError::NotFound(_)
    ));
    assert!(matches!(
        ds.delete_by_id(created.id).unwrap_err(),
        InventoryError::NotFound(_)
    ));
}

#[test]
fn malformed_persisted_row_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO fruits (id, name, quantity, created_at) VALUES (3, 'Plum', 4, 'garbage');",
        [],
    )
    .unwrap();
    let ds = SqliteInventoryDatasource::try_new(conn).unwrap();

    assert!(matches!(
        ds.find_by_id(3).unwrap_err(),
        InventoryError::InvalidData(_)
    ));
    assert!(matches!(
        ds.get_all().unwrap_err(),
        InventoryError::InvalidData(_)
    ));
}

#[test]
fn use_cases_delegate_through_repository() {
    let repository = Arc::new(InventoryRepositoryImpl::new(datasource()));

    let created = CreateFruit::new(repository.clone())
        .execute(&create_dto("Mango", 12))
        .unwrap();
    let fetched = GetFruit::new(repository.clone()).execute(created.id).unwrap();
    assert_eq!(fetched, created);

    let updated = UpdateFruit::new(repository.clone())
        .execute(created.id, &update_dto(created.id, json!({"quantity": 3})))
        .unwrap();
    assert_eq!(updated.quantity, 3);

    let listed = GetFruits::new(repository.clone()).execute().unwrap();
    assert_eq!(listed, vec![updated.clone()]);

    let removed = DeleteFruit::new(repository.clone()).execute(created.id).unwrap();
    assert_eq!(removed, updated);
    assert!(GetFruit::new(repository)
        .execute(created.id)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn datasource_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteInventoryDatasource::try_new(conn) {
        Err(InventoryError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn datasource_rejects_connection_without_fruits_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteInventoryDatasource::try_new(conn),
        Err(InventoryError::MissingRequiredTable("fruits"))
    ));
}

#[test]
fn datasource_rejects_fruits_table_missing_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE fruits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteInventoryDatasource::try_new(conn),
        Err(InventoryError::MissingRequiredColumn {
            table: "fruits",
            column: "created_at"
        })
    ));
}

#[test]
fn schema_rejects_negative_quantity_written_directly() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO fruits (name, quantity) VALUES ('Lime', -1);",
        [],
    );
    assert!(result.is_err());
}
