//! Create-fruit input validation.

use super::{
    coerce_quantity, field, is_falsy, ValidationError, NAME_NOT_STRING, NAME_REQUIRED,
    QUANTITY_INVALID,
};
use serde_json::Value;

/// Validated input for creating a fruit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFruitDto {
    name: String,
    quantity: i64,
}

impl CreateFruitDto {
    /// Validates raw `{name, quantity}` input.
    ///
    /// # Contract
    /// - `name` is checked before `quantity`; the first failure wins.
    /// - `quantity` may be a number or numeric string; zero is accepted.
    /// - A present but blank, null or boolean `quantity` is coerced
    ///   (`null`/`""`/`false` to 0, `true` to 1); a missing one is rejected.
    pub fn create(props: &Value) -> Result<Self, ValidationError> {
        let name = match field(props, "name") {
            None => return Err(ValidationError::new(NAME_REQUIRED)),
            Some(value) if is_falsy(value) => return Err(ValidationError::new(NAME_REQUIRED)),
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(ValidationError::new(NAME_NOT_STRING)),
        };

        let quantity = match field(props, "quantity") {
            Some(value) => coerce_quantity(value)?,
            None => return Err(ValidationError::new(QUANTITY_INVALID)),
        };

        Ok(Self { name, quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}
