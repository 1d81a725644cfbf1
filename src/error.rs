//! Error types for user pool construction.
//!
//! Building a user pool can only fail in a handful of ways: an enumerated
//! option carries a value outside its allowed set, the construct ID is
//! unusable, or the generated resources collide with records already present
//! in the provisioning scope. Loading props from disk adds I/O and JSON
//! failures on top of that.

use crate::scope::ScopeError;
use std::path::PathBuf;

/// Main error type for building user pool resources.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    /// Props failed validation; nothing was registered
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The provisioning scope rejected the generated resources
    #[error("Provisioning scope error: {0}")]
    Scope(#[from] ScopeError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Props file could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors raised while resolving user pool props.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An enumerated option is set to a value outside its allowed set
    #[error("Invalid value for property \"{field}\": '{value}' (allowed values: {})", .allowed.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// The construct ID cannot be used to derive logical IDs
    #[error("Invalid construct id '{id}': {reason}")]
    InvalidConstructId { id: String, reason: String },
}

impl ValidationError {
    /// Create an invalid enum value error
    pub fn invalid_enum_value<'a>(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into_iter().map(str::to_string).collect(),
        }
    }

    /// Create an invalid construct id error
    pub fn invalid_construct_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConstructId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Field path of the offending property, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidEnumValue { field, .. } => Some(field),
            Self::InvalidConstructId { .. } => None,
        }
    }
}

impl ConstructError {
    /// Wrap an I/O failure for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// Result type aliases for convenience
pub type ConstructResult<T> = Result<T, ConstructError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
