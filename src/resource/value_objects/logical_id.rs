//! Deterministic logical IDs for provisioned resources.
//!
//! A logical ID is the key a resource is registered under in a provisioning
//! scope. It is derived from the construct path so that repeated builds of
//! the same props produce the same IDs, and so that sibling resources created
//! from different keys never collide.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hash bytes appended to the readable part (8 hex characters).
const HASH_BYTES: usize = 4;

/// A validated, deterministic resource identifier.
///
/// The readable part is the concatenation of the path components with all
/// non-alphanumeric characters removed. A short SHA-256 suffix over the raw
/// path keeps IDs distinct when two paths sanitize to the same text.
///
/// ## Examples
///
/// ```rust
/// use user_pool_config::resource::value_objects::LogicalId;
///
/// let id = LogicalId::from_path(&["MyTestConstruct", "UserPoolAppClient-web"]);
/// assert!(id.as_str().starts_with("MyTestConstructUserPoolAppClientweb"));
/// assert_eq!(id, LogicalId::from_path(&["MyTestConstruct", "UserPoolAppClient-web"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalId(String);

impl LogicalId {
    /// Derive a logical ID from construct path components.
    pub fn from_path<S: AsRef<str>>(components: &[S]) -> Self {
        let readable: String = components
            .iter()
            .flat_map(|component| component.as_ref().chars())
            .filter(char::is_ascii_alphanumeric)
            .collect();

        let joined = components
            .iter()
            .map(|component| component.as_ref())
            .collect::<Vec<&str>>()
            .join("/");
        let digest = Sha256::digest(joined.as_bytes());
        let suffix: String = digest[..HASH_BYTES]
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect();

        Self(format!("{}{}", readable, suffix))
    }

    /// Get the string representation of the LogicalId.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the LogicalId.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LogicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LogicalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
