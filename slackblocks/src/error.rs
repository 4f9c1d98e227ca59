//! Error types for slackblocks

use thiserror::Error;

/// Result type for node construction
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised when a constructor argument violates a Block Kit constraint.
///
/// Every variant names the offending field so callers can report the
/// problem without inspecting the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was not provided
    #[error("`{field}` is required and cannot be empty")]
    Missing { field: String },

    /// String shorter than the minimum length
    #[error("`{field}` ({length} characters) is shorter than the minimum of {min} characters")]
    TooShort { field: String, length: usize, min: usize },

    /// String longer than the maximum length
    #[error("`{field}` ({length} characters) exceeds the limit of {max} characters")]
    TooLong { field: String, length: usize, max: usize },

    /// List with fewer items than allowed
    #[error("`{field}` has {size} items, fewer than the minimum of {min}")]
    TooFew { field: String, size: usize, min: usize },

    /// List with more items than allowed
    #[error("`{field}` has {size} items, more than the maximum of {max}")]
    TooMany { field: String, size: usize, max: usize },

    /// Number outside its allowed range
    #[error("`{field}` ({value}) is outside the allowed range: {reason}")]
    OutOfRange { field: String, value: String, reason: String },

    /// Value not part of a closed set
    #[error("`{field}` value `{value}` is not one of [{allowed}]")]
    NotAllowed { field: String, value: String, allowed: String },

    /// Two fields that cannot be combined were both set
    #[error("`{first}` and `{second}` cannot both be set")]
    Conflict { first: String, second: String },

    /// None of a set of alternatives was provided
    #[error("one of {fields} is required")]
    MissingOneOf { fields: String },

    /// A child node of the wrong kind
    #[error("`{field}` cannot hold a `{kind}` ({reason})")]
    InvalidKind { field: String, kind: String, reason: String },

    /// Any other malformed value
    #[error("`{field}` is invalid: {message}")]
    Invalid { field: String, message: String },
}

impl ValidationError {
    /// The name of the field that failed validation.
    ///
    /// For conflicts this is the first of the two fields.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::TooFew { field, .. }
            | ValidationError::TooMany { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::InvalidKind { field, .. }
            | ValidationError::Invalid { field, .. } => field,
            ValidationError::Conflict { first, .. } => first,
            ValidationError::MissingOneOf { fields } => fields,
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        ValidationError::Missing { field: field.to_string() }
    }

    pub(crate) fn conflict(first: &str, second: &str) -> Self {
        ValidationError::Conflict { first: first.to_string(), second: second.to_string() }
    }

    pub(crate) fn missing_one_of(fields: &[&str]) -> Self {
        let fields = fields.iter().map(|f| format!("`{}`", f)).collect::<Vec<_>>().join(", ");
        ValidationError::MissingOneOf { fields }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::Invalid { field: field.to_string(), message: message.into() }
    }

    pub(crate) fn invalid_kind(field: &str, kind: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidKind {
            field: field.to_string(),
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_allowed(field: &str, value: &str, allowed: &[&str]) -> Self {
        ValidationError::NotAllowed {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}
