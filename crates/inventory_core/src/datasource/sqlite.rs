//! SQLite implementation of the fruit datasource.
//!
//! # Responsibility
//! - Translate datasource operations into single SQL statements.
//! - Refuse connections whose schema was not prepared by `db::open_*`.
//!
//! # Invariants
//! - Update and delete check existence and mutate in one statement
//!   (`... RETURNING`), so a concurrent delete cannot slip in between.
//! - Rows are parsed through `Fruit::from_record`; bad rows are errors.

use super::{InventoryDatasource, InventoryError, InventoryResult};
use crate::db::migrations::{latest_version, schema_version};
use crate::dto::{CreateFruitDto, UpdateFruitDto};
use crate::model::fruit::{Fruit, FruitId, RawFruitRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Mutex;

const FRUITS_TABLE: &str = "fruits";
const REQUIRED_FRUIT_COLUMNS: &[&str] = &["id", "name", "quantity", "created_at"];
const FRUIT_COLUMNS_SQL: &str = "id, name, quantity, created_at";

/// SQLite-backed fruit datasource.
///
/// Owns its connection; SQLite serializes writes, the mutex serializes use
/// of the single handle.
pub struct SqliteInventoryDatasource {
    conn: Mutex<Connection>,
}

impl SqliteInventoryDatasource {
    /// Wraps a connection after verifying its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema is
    ///   not the expected one.
    pub fn try_new(conn: Connection) -> InventoryResult<Self> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        operation: impl FnOnce(&Connection) -> InventoryResult<T>,
    ) -> InventoryResult<T> {
        let guard = self.conn.lock().map_err(|_| InventoryError::LockPoisoned)?;
        operation(&guard)
    }
}

impl InventoryDatasource for SqliteInventoryDatasource {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit> {
        self.with_conn(|conn| {
            let record = conn.query_row(
                &format!(
                    "INSERT INTO fruits (name, quantity)
                     VALUES (?1, ?2)
                     RETURNING {FRUIT_COLUMNS_SQL};"
                ),
                params![dto.name(), dto.quantity()],
                read_fruit_row,
            )?;
            Ok(Fruit::from_record(record)?)
        })
    }

    fn get_all(&self) -> InventoryResult<Vec<Fruit>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {FRUIT_COLUMNS_SQL} FROM fruits ORDER BY id ASC;"
            ))?;
            let records = stmt
                .query_map([], read_fruit_row)?
                .collect::<Result<Vec<_>, _>>()?;

            records
                .into_iter()
                .map(|record| Fruit::from_record(record).map_err(InventoryError::from))
                .collect()
        })
    }

    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.with_conn(|conn| find_in(conn, id))
    }

    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit> {
        let patch = dto.values();
        self.with_conn(|conn| {
            if patch.is_empty() {
                return find_in(conn, id);
            }

            let record = conn
                .query_row(
                    &format!(
                        "UPDATE fruits
                         SET
                            name = COALESCE(?1, name),
                            quantity = COALESCE(?2, quantity)
                         WHERE id = ?3
                         RETURNING {FRUIT_COLUMNS_SQL};"
                    ),
                    params![patch.name.as_deref(), patch.quantity, id],
                    read_fruit_row,
                )
                .optional()?
                .ok_or(InventoryError::NotFound(id))?;
            Ok(Fruit::from_record(record)?)
        })
    }

    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit> {
        self.with_conn(|conn| {
            let record = conn
                .query_row(
                    &format!("DELETE FROM fruits WHERE id = ?1 RETURNING {FRUIT_COLUMNS_SQL};"),
                    [id],
                    read_fruit_row,
                )
                .optional()?
                .ok_or(InventoryError::NotFound(id))?;
            Ok(Fruit::from_record(record)?)
        })
    }
}

fn find_in(conn: &Connection, id: FruitId) -> InventoryResult<Fruit> {
    let record = conn
        .query_row(
            &format!("SELECT {FRUIT_COLUMNS_SQL} FROM fruits WHERE id = ?1;"),
            [id],
            read_fruit_row,
        )
        .optional()?
        .ok_or(InventoryError::NotFound(id))?;
    Ok(Fruit::from_record(record)?)
}

fn read_fruit_row(row: &Row<'_>) -> rusqlite::Result<RawFruitRecord> {
    Ok(RawFruitRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        quantity: row.get("quantity")?,
        created_at: row.get("created_at")?,
    })
}

fn ensure_schema(conn: &Connection) -> InventoryResult<()> {
    let expected_version = latest_version();
    let actual_version = schema_version(conn)?;
    if actual_version != expected_version {
        return Err(InventoryError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [FRUITS_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(InventoryError::MissingRequiredTable(FRUITS_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({FRUITS_TABLE});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;

    for &required in REQUIRED_FRUIT_COLUMNS {
        if !columns.iter().any(|column| column == required) {
            return Err(InventoryError::MissingRequiredColumn {
                table: FRUITS_TABLE,
                column: required,
            });
        }
    }

    Ok(())
}
