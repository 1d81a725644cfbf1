//! User-facing configuration for a user pool and its dependents.
//!
//! Props are plain serde types with camelCase field names, so the same
//! description can be written in Rust or loaded from a JSON document.
//!
//! # Example Usage
//!
//! ```rust
//! use user_pool_config::props::{ClientConfig, GroupConfig, PoolConfig, UserPoolProps};
//!
//! let props = UserPoolProps::new(PoolConfig::default().with_account_recovery("EMAIL_ONLY"))
//!     .with_client("web", ClientConfig::default())
//!     .with_group("admins", GroupConfig::default().with_group_name("Administrators"));
//!
//! assert_eq!(props.user_pool_client.as_ref().map(|c| c.len()), Some(1));
//! assert_eq!(props.user_pool_group.as_ref().map(|g| g.len()), Some(1));
//! ```

pub mod client;
pub mod group;
pub mod pool;

pub use client::{AuthFlows, ClientConfig};
pub use group::GroupConfig;
pub use pool::{
    MfaSecondFactor, PasswordPolicy, PoolConfig, RemovalPolicy, StandardAttribute,
    StandardAttributes,
};

use crate::error::{ConstructError, ConstructResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Complete input for building a user pool.
///
/// The client and group maps distinguish "not supplied" (`None`) from
/// "supplied but empty"; both produce no resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPoolProps {
    #[serde(default)]
    pub user_pool: PoolConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_client: Option<BTreeMap<String, ClientConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_group: Option<BTreeMap<String, GroupConfig>>,
}

impl UserPoolProps {
    /// Props with the given pool options and no clients or groups.
    pub fn new(user_pool: PoolConfig) -> Self {
        Self {
            user_pool,
            ..Self::default()
        }
    }

    /// Add (or replace) a client entry.
    pub fn with_client(mut self, key: impl Into<String>, client: ClientConfig) -> Self {
        self.user_pool_client
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), client);
        self
    }

    /// Add (or replace) a group entry.
    pub fn with_group(mut self, key: impl Into<String>, group: GroupConfig) -> Self {
        self.user_pool_group
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), group);
        self
    }

    /// Parse props from a JSON document.
    pub fn from_json_str(json: &str) -> ConstructResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse props from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ConstructResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConstructError::io(path, e))?;
        Self::from_json_str(&contents)
    }
}
