//! Errors raised by the provisioning scope.
//!
//! These errors concern registration of records only. They carry no
//! knowledge of user pool semantics.

use std::fmt;

/// Errors that can occur while registering resource records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// A record with the same logical ID is already registered, or appears
    /// twice in one batch.
    DuplicateLogicalId { scope: String, id: String },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::DuplicateLogicalId { scope, id } => {
                write!(
                    f,
                    "Duplicate logical id in scope '{}': {} is already registered",
                    scope, id
                )
            }
        }
    }
}

impl std::error::Error for ScopeError {}

impl ScopeError {
    /// Create a duplicate logical ID error.
    pub fn duplicate_logical_id(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateLogicalId {
            scope: scope.into(),
            id: id.into(),
        }
    }
}
