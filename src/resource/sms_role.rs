//! Role used by a user pool to publish SMS messages.
//!
//! A pool that sends MFA codes by SMS must be given a role it can assume.
//! The trust policy is pinned to the pool through an external ID so the
//! role cannot be assumed on behalf of another pool.

use crate::resource::Intrinsic;
use crate::resource::user_pool::SmsConfiguration;
use crate::resource::value_objects::LogicalId;
use serde_json::{Value, json};

const POLICY_VERSION: &str = "2012-10-17";
const COGNITO_SERVICE_PRINCIPAL: &str = "cognito-idp.amazonaws.com";

/// Properties of the `AWS::IAM::Role` created for SMS delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRoleSpec {
    logical_id: LogicalId,
    external_id: String,
}

impl SmsRoleSpec {
    /// Create a role spec registered under `logical_id`, trusting the pool
    /// identified by `external_id`.
    pub fn new(logical_id: LogicalId, external_id: impl Into<String>) -> Self {
        Self {
            logical_id,
            external_id: external_id.into(),
        }
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// The pool-side half of the wiring.
    pub fn sms_configuration(&self) -> SmsConfiguration {
        SmsConfiguration {
            external_id: self.external_id.clone(),
            sns_caller_arn: Intrinsic::attribute(&self.logical_id, "Arn"),
        }
    }

    /// Role properties: trust policy plus an inline `sns:Publish` policy.
    pub fn properties(&self) -> Value {
        json!({
            "AssumeRolePolicyDocument": {
                "Statement": [{
                    "Action": "sts:AssumeRole",
                    "Condition": {
                        "StringEquals": {"sts:ExternalId": self.external_id}
                    },
                    "Effect": "Allow",
                    "Principal": {"Service": COGNITO_SERVICE_PRINCIPAL}
                }],
                "Version": POLICY_VERSION
            },
            "Policies": [{
                "PolicyDocument": {
                    "Statement": [{
                        "Action": "sns:Publish",
                        "Effect": "Allow",
                        "Resource": "*"
                    }],
                    "Version": POLICY_VERSION
                },
                "PolicyName": "sns-publish"
            }]
        })
    }
}
