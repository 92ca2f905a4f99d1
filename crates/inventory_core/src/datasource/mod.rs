//! Persistence contract for fruit records and its implementations.
//!
//! # Responsibility
//! - Define the narrow CRUD contract every store must satisfy.
//! - Keep SQL details inside the SQLite implementation.
//!
//! # Invariants
//! - Every record handed to callers went through `Fruit::from_record`.
//! - Absent ids surface as `InventoryError::NotFound`, never as an empty value.
//! - Implementations own no state besides the store itself.

use crate::db::DbError;
use crate::dto::{CreateFruitDto, UpdateFruitDto};
use crate::model::fruit::{Fruit, FruitId, FruitValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryInventoryDatasource;
pub use sqlite::SqliteInventoryDatasource;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Error shared by datasource, repository and use-case layers.
#[derive(Debug)]
pub enum InventoryError {
    Db(DbError),
    NotFound(FruitId),
    /// A stored record failed strict parsing.
    InvalidData(FruitValidationError),
    /// Another thread panicked while holding the store lock.
    LockPoisoned,
    /// No id is left above the highest one handed out.
    IdSpaceExhausted,
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl InventoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "fruit not found: {id}"),
            Self::InvalidData(err) => write!(f, "invalid persisted fruit data: {err}"),
            Self::LockPoisoned => write!(f, "fruit store lock poisoned"),
            Self::IdSpaceExhausted => write!(f, "fruit id space exhausted"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for InventoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for InventoryError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for InventoryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<FruitValidationError> for InventoryError {
    fn from(value: FruitValidationError) -> Self {
        Self::InvalidData(value)
    }
}

/// Store-facing CRUD contract for fruits.
pub trait InventoryDatasource: Send + Sync {
    fn create(&self, dto: &CreateFruitDto) -> InventoryResult<Fruit>;
    /// Returns every fruit ordered by id.
    fn get_all(&self) -> InventoryResult<Vec<Fruit>>;
    fn find_by_id(&self, id: FruitId) -> InventoryResult<Fruit>;
    /// Applies only the fields present in `dto.values()`.
    fn update_by_id(&self, id: FruitId, dto: &UpdateFruitDto) -> InventoryResult<Fruit>;
    /// Removes the fruit and returns the removed record.
    fn delete_by_id(&self, id: FruitId) -> InventoryResult<Fruit>;
}
