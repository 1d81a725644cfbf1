//! Pool-level options.
//!
//! The enumerated options (`accountRecovery`, `mfa`) are kept as raw strings
//! here and validated when the pool is built, so that a bad value is reported
//! against its field path rather than as a deserialization failure. The
//! structured options are passed through to the backend as given.

use serde::{Deserialize, Serialize};

/// User-facing description of the pool itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PoolConfig {
    /// One of the account recovery literals; empty means backend default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_recovery: Option<String>,
    /// `OFF`, `OPTIONAL` or `REQUIRED`; empty means backend default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa: Option<String>,
    /// Second factors offered when MFA is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_second_factor: Option<MfaSecondFactor>,
    /// Password strength rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicy>,
    /// What happens to the pool when it is removed from the stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_policy: Option<RemovalPolicy>,
    /// Mutability and requiredness of standard profile attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_attributes: Option<StandardAttributes>,
}

impl PoolConfig {
    /// Set the account recovery literal.
    pub fn with_account_recovery(mut self, value: impl Into<String>) -> Self {
        self.account_recovery = Some(value.into());
        self
    }

    /// Set the MFA literal.
    pub fn with_mfa(mut self, value: impl Into<String>) -> Self {
        self.mfa = Some(value.into());
        self
    }

    /// Set the enabled second factors.
    pub fn with_mfa_second_factor(mut self, second_factor: MfaSecondFactor) -> Self {
        self.mfa_second_factor = Some(second_factor);
        self
    }

    /// Set the password policy.
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = Some(policy);
        self
    }

    /// Set the removal policy.
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = Some(policy);
        self
    }

    /// Set the standard attributes.
    pub fn with_standard_attributes(mut self, attributes: StandardAttributes) -> Self {
        self.standard_attributes = Some(attributes);
        self
    }
}

/// Which second factors are offered when MFA is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MfaSecondFactor {
    /// Time-based one-time passwords from an authenticator app
    pub otp: bool,
    /// Codes sent by SMS
    pub sms: bool,
}

impl Default for MfaSecondFactor {
    /// SMS only, matching the backend default.
    fn default() -> Self {
        Self {
            otp: false,
            sms: true,
        }
    }
}

/// Password strength rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_digits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    /// How long an administrator-issued temporary password stays valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_password_validity_days: Option<u32>,
}

/// Teardown behaviour of the pool when it leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemovalPolicy {
    /// Delete the pool and every user in it
    Destroy,
    /// Orphan the pool
    Retain,
    /// Keep a snapshot before deleting, where the backend supports it
    Snapshot,
}

/// Flags for one standard profile attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardAttribute {
    /// Whether the value can change after sign-up (backend default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
    /// Whether the value is required at sign-up (backend default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl StandardAttribute {
    /// Attribute with both flags set explicitly.
    pub fn new(mutable: bool, required: bool) -> Self {
        Self {
            mutable: Some(mutable),
            required: Some(required),
        }
    }
}

macro_rules! standard_attributes {
    ($($field:ident => $name:literal),+ $(,)?) => {
        /// Standard profile attributes, keyed by their user-facing names.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct StandardAttributes {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<StandardAttribute>,
            )+
        }

        impl StandardAttributes {
            /// Configured attributes with their backend attribute names, in
            /// declaration order.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StandardAttribute)> + '_ {
                [$(($name, self.$field.as_ref())),+]
                    .into_iter()
                    .filter_map(|(name, attribute)| attribute.map(|attribute| (name, attribute)))
            }
        }
    };
}

standard_attributes! {
    address => "address",
    birthdate => "birthdate",
    email => "email",
    family_name => "family_name",
    fullname => "name",
    gender => "gender",
    given_name => "given_name",
    last_update_time => "updated_at",
    locale => "locale",
    middle_name => "middle_name",
    nickname => "nickname",
    phone_number => "phone_number",
    preferred_username => "preferred_username",
    profile_page => "profile",
    profile_picture => "picture",
    timezone => "zoneinfo",
    website => "website",
}

impl StandardAttributes {
    /// True when no attribute is configured.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
