//! Application client options.

use serde::{Deserialize, Serialize};

/// Options for one application client of the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_flows: Option<AuthFlows>,
}

impl ClientConfig {
    /// Set the permitted authentication flows.
    pub fn with_auth_flows(mut self, auth_flows: AuthFlows) -> Self {
        self.auth_flows = Some(auth_flows);
        self
    }
}

/// Authentication flows a client may use.
///
/// Unset flags are treated as disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthFlows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_user_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_srp: Option<bool>,
}

impl AuthFlows {
    /// Every flow enabled.
    pub fn all() -> Self {
        Self {
            admin_user_password: Some(true),
            custom: Some(true),
            user_password: Some(true),
            user_srp: Some(true),
        }
    }

    /// True when at least one flow is enabled.
    pub fn any_enabled(&self) -> bool {
        [
            self.admin_user_password,
            self.custom,
            self.user_password,
            self.user_srp,
        ]
        .iter()
        .any(|flag| flag.unwrap_or(false))
    }
}
