//! Update-fruit input validation and partial-patch projection.

use super::{
    coerce_id, coerce_quantity, field, is_falsy, ValidationError, ID_INVALID, NAME_NOT_STRING,
};
use crate::model::fruit::FruitId;
use serde_json::Value;

/// Fields actually supplied by an update request.
///
/// `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

impl FruitPatch {
    /// Returns `true` when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none()
    }
}

/// Validated input for updating a fruit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFruitDto {
    id: FruitId,
    name: Option<String>,
    quantity: Option<i64>,
}

impl UpdateFruitDto {
    /// Validates raw `{id, name?, quantity?}` input.
    ///
    /// # Contract
    /// - `id` is required and must coerce to a non-zero whole number.
    /// - `quantity`, when present, must coerce to a non-negative whole
    ///   number; `null` and blank strings coerce to 0.
    /// - A falsy `name` (null or empty) is treated as absent.
    pub fn create(props: &Value) -> Result<Self, ValidationError> {
        let id = match field(props, "id") {
            Some(value) => coerce_id(value)?,
            None => return Err(ValidationError::new(ID_INVALID)),
        };

        let quantity = match field(props, "quantity") {
            None => None,
            Some(value) => Some(coerce_quantity(value)?),
        };

        let name = match field(props, "name") {
            None => None,
            Some(value) if is_falsy(value) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(ValidationError::new(NAME_NOT_STRING)),
        };

        Ok(Self { id, name, quantity })
    }

    pub fn id(&self) -> FruitId {
        self.id
    }

    /// Projects the supplied fields; omitted fields are never defaulted.
    pub fn values(&self) -> FruitPatch {
        FruitPatch {
            name: self.name.clone(),
            quantity: self.quantity,
        }
    }
}
