//! Fruit domain model.
//!
//! # Responsibility
//! - Define the canonical fruit record returned by every datasource.
//! - Reject malformed persisted records before the rest of the crate sees them.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes.
//! - `name` is non-empty.
//! - `quantity` is never negative.
//! - `created_at` is set at insert and never changes.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned fruit identifier.
pub type FruitId = i64;

/// Fallback layout for timestamps written by SQLite `CURRENT_TIMESTAMP`.
const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Field-level reason a fruit record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FruitValidationError {
    MissingId,
    MissingName,
    MissingQuantity,
    NegativeQuantity(i64),
    MissingCreatedAt,
    InvalidCreatedAt(String),
}

impl Display for FruitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "id is required"),
            Self::MissingName => write!(f, "name is required"),
            Self::MissingQuantity => write!(f, "quantity is required"),
            Self::NegativeQuantity(value) => {
                write!(f, "quantity must not be negative, got {value}")
            }
            Self::MissingCreatedAt => write!(f, "createdAt is required"),
            Self::InvalidCreatedAt(value) => {
                write!(f, "createdAt must be a valid date, got `{value}`")
            }
        }
    }
}

impl Error for FruitValidationError {}

/// Untrusted fruit record as it comes out of a store.
///
/// Every field is optional so that missing or NULL columns can be reported
/// instead of failing inside the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFruitRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub created_at: Option<String>,
}

/// Canonical fruit inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: FruitId,
    pub name: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl Fruit {
    /// Builds a fruit from already-typed fields.
    ///
    /// # Errors
    /// - `MissingId` when `id == 0`.
    /// - `MissingName` when `name` is empty.
    /// - `NegativeQuantity` when `quantity < 0`.
    pub fn new(
        id: FruitId,
        name: impl Into<String>,
        quantity: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, FruitValidationError> {
        let fruit = Self {
            id,
            name: name.into(),
            quantity,
            created_at,
        };
        fruit.validate()?;
        Ok(fruit)
    }

    /// Strictly parses an untrusted record.
    ///
    /// This is the single point where persisted data becomes a `Fruit`.
    pub fn from_record(record: RawFruitRecord) -> Result<Self, FruitValidationError> {
        let id = record
            .id
            .filter(|id| *id != 0)
            .ok_or(FruitValidationError::MissingId)?;
        let name = record
            .name
            .filter(|name| !name.is_empty())
            .ok_or(FruitValidationError::MissingName)?;
        let quantity = record
            .quantity
            .ok_or(FruitValidationError::MissingQuantity)?;
        let created_at = parse_created_at(record.created_at.as_deref())?;

        Self::new(id, name, quantity, created_at)
    }

    /// Checks entity invariants.
    pub fn validate(&self) -> Result<(), FruitValidationError> {
        if self.id == 0 {
            return Err(FruitValidationError::MissingId);
        }
        if self.name.is_empty() {
            return Err(FruitValidationError::MissingName);
        }
        if self.quantity < 0 {
            return Err(FruitValidationError::NegativeQuantity(self.quantity));
        }
        Ok(())
    }
}

/// Parses a stored timestamp as RFC 3339, falling back to SQLite's native
/// `YYYY-MM-DD HH:MM:SS` layout interpreted as UTC.
pub fn parse_created_at(value: Option<&str>) -> Result<DateTime<Utc>, FruitValidationError> {
    let text = match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(FruitValidationError::MissingCreatedAt),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, SQLITE_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| FruitValidationError::InvalidCreatedAt(text.to_string()))
}
