//! Handles to the resources a [`UserPool`](super::UserPool) registered.
//!
//! A handle is only a logical ID plus the intrinsics other resources use to
//! point at it. The record itself stays in the provisioning scope.

use crate::resource::Intrinsic;
use crate::resource::value_objects::LogicalId;

/// Handle to the registered pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPoolHandle {
    logical_id: LogicalId,
}

impl UserPoolHandle {
    pub(crate) fn new(logical_id: LogicalId) -> Self {
        Self { logical_id }
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// Reference resolving to the pool's identifier.
    pub fn user_pool_id(&self) -> Intrinsic {
        Intrinsic::reference(&self.logical_id)
    }

    /// Reference resolving to the pool's ARN.
    pub fn user_pool_arn(&self) -> Intrinsic {
        Intrinsic::attribute(&self.logical_id, "Arn")
    }
}

/// Handle to one registered application client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPoolClientHandle {
    key: String,
    logical_id: LogicalId,
}

impl UserPoolClientHandle {
    pub(crate) fn new(key: impl Into<String>, logical_id: LogicalId) -> Self {
        Self {
            key: key.into(),
            logical_id,
        }
    }

    /// Key of the client in the props map
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// Reference resolving to the client ID.
    pub fn client_id(&self) -> Intrinsic {
        Intrinsic::reference(&self.logical_id)
    }
}

/// Handle to one registered user group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPoolGroupHandle {
    key: String,
    logical_id: LogicalId,
}

impl UserPoolGroupHandle {
    pub(crate) fn new(key: impl Into<String>, logical_id: LogicalId) -> Self {
        Self {
            key: key.into(),
            logical_id,
        }
    }

    /// Key of the group in the props map
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// Reference resolving to the group name.
    pub fn group_name(&self) -> Intrinsic {
        Intrinsic::reference(&self.logical_id)
    }
}
