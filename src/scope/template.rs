//! Template rendering for provisioning scopes.
//!
//! A template is a snapshot of a scope in the shape the provisioning backend
//! consumes: a `Resources` object keyed by logical ID, each entry carrying
//! `Type`, `Properties` and any deletion policies.

use crate::scope::{ResourceRecord, ResourceType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Rendered document for one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    resources: BTreeMap<String, ResourceRecord>,
}

impl Template {
    pub(crate) fn from_records(records: &[ResourceRecord]) -> Self {
        let resources = records
            .iter()
            .map(|record| (record.logical_id().to_string(), record.clone()))
            .collect();
        Self { resources }
    }

    /// Look up a resource by logical ID.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceRecord> {
        self.resources.get(logical_id)
    }

    /// Resources of one type, ordered by logical ID.
    pub fn resources_of(&self, resource_type: ResourceType) -> Vec<&ResourceRecord> {
        self.resources
            .values()
            .filter(|record| record.resource_type() == resource_type)
            .collect()
    }

    /// Number of resources in the template.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Render as a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
