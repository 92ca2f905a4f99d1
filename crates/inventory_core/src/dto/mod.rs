//! Input DTOs for fruit use-cases.
//!
//! # Responsibility
//! - Validate and normalize raw (untyped JSON) request input.
//! - Keep coercion rules in one place so create and update agree.
//!
//! # Invariants
//! - A DTO value only exists if validation passed.
//! - Validation never touches persistence.

use crate::model::fruit::FruitId;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod create_fruit;
pub mod update_fruit;

pub use create_fruit::CreateFruitDto;
pub use update_fruit::{FruitPatch, UpdateFruitDto};

pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const NAME_NOT_STRING: &str = "Name must be a string";
// Zero is accepted even though the message says "positive".
pub(crate) const QUANTITY_INVALID: &str = "Quantity must be a positive number";
pub(crate) const ID_INVALID: &str = "ID is required and must be a number";

/// Human-readable rejection of raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationError {}

/// Parses a fruit id taken from a URL path segment.
///
/// # Errors
/// - Returns `ID is required and must be a number` when the segment is not a
///   whole number or is zero.
pub fn parse_fruit_id(raw: &str) -> Result<FruitId, ValidationError> {
    coerce_id(&Value::String(raw.to_string()))
}

/// Coerces a JSON value to a whole number.
///
/// Follows the loose numeric conversion of untyped request bodies: `null`,
/// `false` and blank strings read as 0, `true` as 1, and numeric strings are
/// parsed after trimming. Values with a fractional part, non-finite values,
/// arrays and objects yield `None`.
pub(crate) fn coerce_whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Null => Some(0),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_from_f64)),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Some(0);
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_from_f64))
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn coerce_id(value: &Value) -> Result<FruitId, ValidationError> {
    match coerce_whole_number(value) {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ValidationError::new(ID_INVALID)),
    }
}

pub(crate) fn coerce_quantity(value: &Value) -> Result<i64, ValidationError> {
    match coerce_whole_number(value) {
        Some(quantity) if quantity >= 0 => Ok(quantity),
        _ => Err(ValidationError::new(QUANTITY_INVALID)),
    }
}

/// Mirrors the loose "falsy" notion of untyped request bodies.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Looks up a field of a raw JSON object; non-objects have no fields.
pub(crate) fn field<'a>(props: &'a Value, key: &str) -> Option<&'a Value> {
    props.as_object().and_then(|map| map.get(key))
}

fn whole_from_f64(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; stay strictly inside the range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_whole_number, is_falsy, parse_fruit_id, ID_INVALID};
    use serde_json::json;

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        assert_eq!(coerce_whole_number(&json!(12)), Some(12));
        assert_eq!(coerce_whole_number(&json!(-3)), Some(-3));
        assert_eq!(coerce_whole_number(&json!(4.0)), Some(4));
        assert_eq!(coerce_whole_number(&json!(" 42 ")), Some(42));
        assert_eq!(coerce_whole_number(&json!("1e2")), Some(100));
    }

    #[test]
    fn blank_null_and_bool_values_coerce_loosely() {
        assert_eq!(coerce_whole_number(&json!(null)), Some(0));
        assert_eq!(coerce_whole_number(&json!("")), Some(0));
        assert_eq!(coerce_whole_number(&json!("   ")), Some(0));
        assert_eq!(coerce_whole_number(&json!(false)), Some(0));
        assert_eq!(coerce_whole_number(&json!(true)), Some(1));
    }

    #[test]
    fn rejects_non_numeric_and_fractional_values() {
        assert_eq!(coerce_whole_number(&json!("abc")), None);
        assert_eq!(coerce_whole_number(&json!(2.5)), None);
        assert_eq!(coerce_whole_number(&json!("NaN")), None);
        assert_eq!(coerce_whole_number(&json!("inf")), None);
        assert_eq!(coerce_whole_number(&json!([1])), None);
        assert_eq!(coerce_whole_number(&json!({"n": 1})), None);
    }

    #[test]
    fn falsy_values_match_loose_semantics() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(!is_falsy(&json!("Apple")));
        assert!(!is_falsy(&json!({})));
    }

    #[test]
    fn parse_fruit_id_rejects_garbage_and_zero() {
        assert_eq!(parse_fruit_id("15").unwrap(), 15);
        assert_eq!(parse_fruit_id("abc").unwrap_err().message(), ID_INVALID);
        assert_eq!(parse_fruit_id("0").unwrap_err().message(), ID_INVALID);
        assert_eq!(parse_fruit_id("1.5").unwrap_err().message(), ID_INVALID);
        assert_eq!(parse_fruit_id(" ").unwrap_err().message(), ID_INVALID);
    }
}
