//! Backend-ready resource specifications.
//!
//! Each spec is an immutable property set for one backend resource type,
//! produced by a builder that resolves every optional field exactly once.
//! Specs serialize to the property names the provisioning backend expects.
//!
//! # Core Types
//!
//! - [`UserPoolSpec`] - properties of the pool itself
//! - [`UserPoolClientSpec`] - properties of one application client
//! - [`UserPoolGroupSpec`] - properties of one user group
//! - [`SmsRoleSpec`] - role the pool assumes to send SMS messages
//! - [`Intrinsic`] - references between resources

pub mod client;
pub mod group;
pub mod sms_role;
pub mod user_pool;
pub mod value_objects;

pub use client::{ExplicitAuthFlow, UserPoolClientSpec, UserPoolClientSpecBuilder};
pub use group::{UserPoolGroupSpec, UserPoolGroupSpecBuilder};
pub use sms_role::SmsRoleSpec;
pub use user_pool::{
    MfaFactor, PasswordPolicySpec, SchemaAttribute, SmsConfiguration, UserPoolSpec,
    UserPoolSpecBuilder,
};

use serde::Serialize;
use value_objects::LogicalId;

/// A value resolved by the backend at deployment time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Intrinsic {
    /// The primary identifier of a resource
    Ref(LogicalId),
    /// An attribute of a resource (e.g. its ARN)
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(LogicalId, String),
}

impl Intrinsic {
    /// Reference to the resource's primary identifier.
    pub fn reference(logical_id: &LogicalId) -> Self {
        Self::Ref(logical_id.clone())
    }

    /// Reference to one attribute of the resource.
    pub fn attribute(logical_id: &LogicalId, attribute: impl Into<String>) -> Self {
        Self::GetAtt(logical_id.clone(), attribute.into())
    }

    /// Logical ID the intrinsic points at.
    pub fn target(&self) -> &LogicalId {
        match self {
            Self::Ref(id) | Self::GetAtt(id, _) => id,
        }
    }
}
