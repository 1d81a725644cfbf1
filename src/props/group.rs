//! User group options.

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};

/// Options for one user group of the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Lower values take priority when a user belongs to several groups
    #[serde(
        default,
        deserialize_with = "optional_precedence",
        skip_serializing_if = "Option::is_none"
    )]
    pub precedence: Option<u32>,
    /// ARN of the role assumed by members of the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

impl GroupConfig {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn with_precedence(mut self, precedence: u32) -> Self {
        self.precedence = Some(precedence);
        self
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }
}

/// Accepts a non-negative integer, `null`, or `""` (treated as unset).
fn optional_precedence<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(precedence)) => Ok(Some(precedence)),
        Some(Raw::Text(text)) if text.is_empty() => Ok(None),
        Some(Raw::Text(text)) => Err(de::Error::invalid_value(
            Unexpected::Str(&text),
            &"a non-negative integer or an empty string",
        )),
    }
}
