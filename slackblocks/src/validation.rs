//! Validation primitives shared by every node type.
//!
//! Each check either hands the (possibly normalized) value back or fails with a
//! [`ValidationError`] naming the offending field. Nothing here allocates beyond
//! what the caller passed in.

use crate::error::{Result, ValidationError};
use tracing::debug;

/// Maximum length of `action_id` and `block_id` values.
pub const MAX_ID_LENGTH: usize = 255;

/// Inclusive size or length bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Bounds {
    /// No bounds at all
    pub const NONE: Bounds = Bounds { min: None, max: None };

    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub const fn at_most(max: usize) -> Self {
        Self { min: None, max: Some(max) }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min: Some(min), max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min: Some(min), max: Some(max) }
    }
}

pub(crate) fn reject(err: ValidationError) -> ValidationError {
    debug!(field = err.field(), reason = %err, "rejected construction");
    err
}

/// Check the size of a required list against `bounds`.
pub fn validate_list<T>(items: Vec<T>, field: &str, bounds: Bounds) -> Result<Vec<T>> {
    let size = items.len();
    if let Some(min) = bounds.min {
        if size < min {
            return Err(reject(ValidationError::TooFew { field: field.to_string(), size, min }));
        }
    }
    if let Some(max) = bounds.max {
        if size > max {
            return Err(reject(ValidationError::TooMany { field: field.to_string(), size, max }));
        }
    }
    Ok(items)
}

/// Normalize an optional list, enforcing presence and size bounds.
///
/// Absent input is passed through when `allow_none` is set and rejected
/// otherwise. Present input is checked with [`validate_list`].
pub fn coerce_to_list<T>(
    items: Option<Vec<T>>,
    field: &str,
    allow_none: bool,
    bounds: Bounds,
) -> Result<Option<Vec<T>>> {
    match items {
        None if allow_none => Ok(None),
        None => Err(reject(ValidationError::missing(field))),
        Some(items) => validate_list(items, field, bounds).map(Some),
    }
}

/// Check a required string against length bounds (counted in characters).
pub fn validate_string(value: impl Into<String>, field: &str, bounds: Bounds) -> Result<String> {
    let value = value.into();
    let length = value.chars().count();
    if let Some(min) = bounds.min {
        if length < min {
            if length == 0 {
                return Err(reject(ValidationError::missing(field)));
            }
            return Err(reject(ValidationError::TooShort {
                field: field.to_string(),
                length,
                min,
            }));
        }
    }
    if let Some(max) = bounds.max {
        if length > max {
            return Err(reject(ValidationError::TooLong { field: field.to_string(), length, max }));
        }
    }
    Ok(value)
}

/// Check an optional string, rejecting `None` unless `allow_none` is set.
pub fn validate_optional_string(
    value: Option<String>,
    field: &str,
    bounds: Bounds,
    allow_none: bool,
) -> Result<Option<String>> {
    match value {
        None if allow_none => Ok(None),
        None => Err(reject(ValidationError::missing(field))),
        Some(value) => validate_string(value, field, bounds).map(Some),
    }
}

/// Check an optional integer against inclusive `min`/`max` bounds.
pub fn validate_int(
    value: Option<i64>,
    field: &str,
    min: Option<i64>,
    max: Option<i64>,
    allow_none: bool,
) -> Result<Option<i64>> {
    let Some(num) = value else {
        if allow_none {
            return Ok(None);
        }
        return Err(reject(ValidationError::missing(field)));
    };
    if let Some(min) = min {
        if num < min {
            return Err(reject(ValidationError::OutOfRange {
                field: field.to_string(),
                value: num.to_string(),
                reason: format!("less than the minimum {}", min),
            }));
        }
    }
    if let Some(max) = max {
        if num > max {
            return Err(reject(ValidationError::OutOfRange {
                field: field.to_string(),
                value: num.to_string(),
                reason: format!("greater than the maximum {}", max),
            }));
        }
    }
    Ok(Some(num))
}

/// Check a required `action_id` (1-255 characters).
pub fn validate_action_id(action_id: impl Into<String>) -> Result<String> {
    validate_string(action_id, "action_id", Bounds::between(1, MAX_ID_LENGTH))
}

/// Check an `action_id` that may be omitted.
pub fn validate_optional_action_id(action_id: Option<String>) -> Result<Option<String>> {
    validate_optional_string(action_id, "action_id", Bounds::between(1, MAX_ID_LENGTH), true)
}

/// Check a caller supplied `block_id` (1-255 characters).
pub fn validate_block_id(block_id: impl Into<String>) -> Result<String> {
    validate_string(block_id, "block_id", Bounds::between(1, MAX_ID_LENGTH))
}

/// Check that `value` is a member of `allowed`.
pub fn validate_one_of(value: &str, field: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(reject(ValidationError::not_allowed(field, value, allowed)))
    }
}

/// True if every character of `string` is a hexadecimal digit.
pub fn is_hex(string: &str) -> bool {
    string.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_list_passes_within_bounds() {
        let items = validate_list(vec!["a", "b", "c"], "items", Bounds::between(1, 3)).unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_validate_list_lower_bound() {
        let err = validate_list(vec!["a"], "items", Bounds::at_least(2)).unwrap_err();
        assert!(matches!(err, ValidationError::TooFew { size: 1, min: 2, .. }));
    }

    #[test]
    fn test_validate_list_upper_bound() {
        let err = validate_list(vec!["a", "b"], "items", Bounds::at_most(1)).unwrap_err();
        assert!(matches!(err, ValidationError::TooMany { size: 2, max: 1, .. }));
    }

    #[test]
    fn test_coerce_to_list_allow_none() {
        let items: Option<Vec<&str>> = coerce_to_list(None, "items", true, Bounds::NONE).unwrap();
        assert!(items.is_none());
    }

    #[test]
    fn test_coerce_to_list_disallow_none() {
        let err = coerce_to_list::<&str>(None, "items", false, Bounds::NONE).unwrap_err();
        assert_eq!(err, ValidationError::missing("items"));
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("1234abcdef"));
        assert!(is_hex("ABCDEF"));
        assert!(!is_hex("1234g"));
        assert!(!is_hex("#ffffff"));
    }

    #[test]
    fn test_validate_action_id_basic() {
        assert_eq!(validate_action_id("action_id").unwrap(), "action_id");
    }

    #[test]
    fn test_validate_action_id_bounds() {
        assert!(validate_action_id("").is_err());
        assert!(validate_action_id("a".repeat(255)).is_ok());
        assert!(validate_action_id("a".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_optional_action_id_allows_none() {
        assert_eq!(validate_optional_action_id(None).unwrap(), None);
    }

    #[test]
    fn test_validate_string_counts_characters() {
        assert!(validate_string("héllo", "field", Bounds::at_most(5)).is_ok());
        assert!(validate_string("héllo!", "field", Bounds::at_most(5)).is_err());
    }

    #[test]
    fn test_validate_optional_string_disallow_none() {
        let err = validate_optional_string(None, "field", Bounds::NONE, false).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { .. }));
    }

    #[test]
    fn test_validate_int_bounds() {
        assert_eq!(validate_int(Some(5), "n", Some(0), Some(10), false).unwrap(), Some(5));
        assert!(validate_int(Some(-1), "n", Some(0), None, false).is_err());
        assert!(validate_int(Some(11), "n", None, Some(10), false).is_err());
        assert_eq!(validate_int(None, "n", None, None, true).unwrap(), None);
        assert!(validate_int(None, "n", None, None, false).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("primary", "style", &["primary", "danger"]).is_ok());
        let err = validate_one_of("loud", "style", &["primary", "danger"]).unwrap_err();
        assert_eq!(err.to_string(), "`style` value `loud` is not one of [primary, danger]");
    }
}
