//! In-memory provisioning scope.
//!
//! A `ProvisioningScope` is the graph that resource records are registered
//! into at build time. It stands in for the external provisioning engine:
//! it holds declarative records keyed by logical ID, enforces logical-ID
//! uniqueness, and renders its contents as a template. It never deploys
//! anything.
//!
//! The scope is append-only. Records are registered in batches, and a batch
//! is either registered completely or not at all.
//!
//! # Example Usage
//!
//! ```rust
//! use user_pool_config::scope::{ProvisioningScope, ResourceRecord, ResourceType};
//! use user_pool_config::resource::value_objects::LogicalId;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scope = ProvisioningScope::new("TestStack");
//!
//! let id = LogicalId::from_path(&["Pool", "UserPool"]);
//! let record = ResourceRecord::new(id.clone(), ResourceType::UserPool, &json!({}))?;
//! scope.register_all(vec![record])?;
//!
//! assert!(scope.contains(&id));
//! assert_eq!(scope.count_of(ResourceType::UserPool), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod template;

pub use errors::ScopeError;
pub use template::Template;

use crate::props::RemovalPolicy;
use crate::resource::value_objects::LogicalId;
use log::debug;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Kind of a registered resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    UserPool,
    UserPoolClient,
    UserPoolGroup,
    IamRole,
}

impl ResourceType {
    /// Backend type name of the resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserPool => "AWS::Cognito::UserPool",
            Self::UserPoolClient => "AWS::Cognito::UserPoolClient",
            Self::UserPoolGroup => "AWS::Cognito::UserPoolGroup",
            Self::IamRole => "AWS::IAM::Role",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Resource-level policy applied when a record is deleted or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
}

impl From<RemovalPolicy> for DeletionPolicy {
    fn from(policy: RemovalPolicy) -> Self {
        match policy {
            RemovalPolicy::Destroy => Self::Delete,
            RemovalPolicy::Retain => Self::Retain,
            RemovalPolicy::Snapshot => Self::Snapshot,
        }
    }
}

/// A declarative resource registered in a scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    #[serde(skip)]
    logical_id: LogicalId,
    #[serde(rename = "Type")]
    resource_type: ResourceType,
    properties: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_replace_policy: Option<DeletionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion_policy: Option<DeletionPolicy>,
}

impl ResourceRecord {
    /// Create a record from any serializable property spec.
    pub fn new<P: Serialize>(
        logical_id: LogicalId,
        resource_type: ResourceType,
        properties: &P,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            logical_id,
            resource_type,
            properties: serde_json::to_value(properties)?,
            update_replace_policy: None,
            deletion_policy: None,
        })
    }

    /// Apply the same policy on deletion and on replacement.
    pub fn with_removal_policy(mut self, policy: DeletionPolicy) -> Self {
        self.update_replace_policy = Some(policy);
        self.deletion_policy = Some(policy);
        self
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Rendered properties of the resource.
    pub fn properties(&self) -> &Value {
        &self.properties
    }

    /// Look up a single top-level property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn deletion_policy(&self) -> Option<DeletionPolicy> {
        self.deletion_policy
    }

    pub fn update_replace_policy(&self) -> Option<DeletionPolicy> {
        self.update_replace_policy
    }
}

/// Append-only collection of resource records for one stack.
///
/// Records keep their registration order.
#[derive(Debug, Clone, Default)]
pub struct ProvisioningScope {
    name: String,
    records: Vec<ResourceRecord>,
    index: HashMap<LogicalId, usize>,
}

impl ProvisioningScope {
    /// Create an empty scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Name of the scope (the stack name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a batch of records.
    ///
    /// Fails without registering anything when any logical ID in the batch is
    /// already present, or appears more than once in the batch.
    pub fn register_all(&mut self, records: Vec<ResourceRecord>) -> Result<(), ScopeError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if self.index.contains_key(record.logical_id()) || !seen.insert(record.logical_id()) {
                return Err(ScopeError::duplicate_logical_id(
                    &self.name,
                    record.logical_id().as_str(),
                ));
            }
        }

        for record in records {
            debug!(
                "Registering {} as {} in scope '{}'",
                record.resource_type(),
                record.logical_id(),
                self.name
            );
            self.index
                .insert(record.logical_id().clone(), self.records.len());
            self.records.push(record);
        }

        Ok(())
    }

    /// Get a record by logical ID.
    pub fn get(&self, id: &LogicalId) -> Option<&ResourceRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Check whether a logical ID is registered.
    pub fn contains(&self, id: &LogicalId) -> bool {
        self.index.contains_key(id)
    }

    /// All records in registration order.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Records of one resource type, in registration order.
    pub fn records_of(&self, resource_type: ResourceType) -> impl Iterator<Item = &ResourceRecord> {
        self.records
            .iter()
            .filter(move |record| record.resource_type() == resource_type)
    }

    /// Number of records of one resource type.
    pub fn count_of(&self, resource_type: ResourceType) -> usize {
        self.records_of(resource_type).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the scope as a template.
    pub fn synthesize(&self) -> Template {
        Template::from_records(&self.records)
    }
}
