//! User group resource specification.

use crate::resource::Intrinsic;
use serde::Serialize;

/// Properties of an `AWS::Cognito::UserPoolGroup` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolGroupSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    precedence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    user_pool_id: Intrinsic,
}

impl UserPoolGroupSpec {
    /// Start building a group bound to the given pool.
    pub fn builder(user_pool_id: Intrinsic) -> UserPoolGroupSpecBuilder {
        UserPoolGroupSpecBuilder {
            user_pool_id,
            description: None,
            group_name: None,
            precedence: None,
            role_arn: None,
        }
    }

    pub fn user_pool_id(&self) -> &Intrinsic {
        &self.user_pool_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn precedence(&self) -> Option<u32> {
        self.precedence
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }
}

/// Builder for [`UserPoolGroupSpec`].
#[derive(Debug, Clone)]
pub struct UserPoolGroupSpecBuilder {
    user_pool_id: Intrinsic,
    description: Option<String>,
    group_name: Option<String>,
    precedence: Option<u32>,
    role_arn: Option<String>,
}

impl UserPoolGroupSpecBuilder {
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

    pub fn build(self) -> UserPoolGroupSpec {
        UserPoolGroupSpec {
            description: self.description,
            group_name: self.group_name,
            precedence: self.precedence,
            role_arn: self.role_arn,
            user_pool_id: self.user_pool_id,
        }
    }
}
