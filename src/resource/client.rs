//! Application client resource specification.

use crate::props::AuthFlows;
use crate::resource::Intrinsic;
use serde::Serialize;

const ALLOWED_OAUTH_FLOWS: &[&str] = &["implicit", "code"];
const ALLOWED_OAUTH_SCOPES: &[&str] = &[
    "profile",
    "phone",
    "email",
    "openid",
    "aws.cognito.signin.user.admin",
];
const DEFAULT_CALLBACK_URL: &str = "https://example.com";
const COGNITO_IDENTITY_PROVIDER: &str = "COGNITO";

/// Entry of a client's `ExplicitAuthFlows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExplicitAuthFlow {
    #[serde(rename = "ALLOW_USER_PASSWORD_AUTH")]
    UserPassword,
    #[serde(rename = "ALLOW_ADMIN_USER_PASSWORD_AUTH")]
    AdminUserPassword,
    #[serde(rename = "ALLOW_CUSTOM_AUTH")]
    Custom,
    #[serde(rename = "ALLOW_USER_SRP_AUTH")]
    UserSrp,
    #[serde(rename = "ALLOW_REFRESH_TOKEN_AUTH")]
    RefreshToken,
}

impl ExplicitAuthFlow {
    /// Flows enabled by `auth_flows`, followed by refresh-token auth when
    /// any flow is enabled. Empty when nothing is enabled.
    pub fn from_auth_flows(auth_flows: &AuthFlows) -> Vec<Self> {
        let candidates = [
            (auth_flows.user_password, Self::UserPassword),
            (auth_flows.admin_user_password, Self::AdminUserPassword),
            (auth_flows.custom, Self::Custom),
            (auth_flows.user_srp, Self::UserSrp),
        ];

        let mut flows: Vec<Self> = candidates
            .into_iter()
            .filter(|(enabled, _)| enabled.unwrap_or(false))
            .map(|(_, flow)| flow)
            .collect();
        if !flows.is_empty() {
            flows.push(Self::RefreshToken);
        }
        flows
    }
}

/// Properties of an `AWS::Cognito::UserPoolClient` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolClientSpec {
    #[serde(rename = "AllowedOAuthFlows")]
    allowed_oauth_flows: Vec<&'static str>,
    #[serde(rename = "AllowedOAuthFlowsUserPoolClient")]
    allowed_oauth_flows_user_pool_client: bool,
    #[serde(rename = "AllowedOAuthScopes")]
    allowed_oauth_scopes: Vec<&'static str>,
    #[serde(rename = "CallbackURLs")]
    callback_urls: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_auth_flows: Option<Vec<ExplicitAuthFlow>>,
    supported_identity_providers: Vec<&'static str>,
    user_pool_id: Intrinsic,
}

impl UserPoolClientSpec {
    /// Start building a client bound to the given pool.
    pub fn builder(user_pool_id: Intrinsic) -> UserPoolClientSpecBuilder {
        UserPoolClientSpecBuilder {
            user_pool_id,
            auth_flows: None,
        }
    }

    pub fn user_pool_id(&self) -> &Intrinsic {
        &self.user_pool_id
    }

    pub fn explicit_auth_flows(&self) -> Option<&[ExplicitAuthFlow]> {
        self.explicit_auth_flows.as_deref()
    }
}

/// Builder for [`UserPoolClientSpec`].
#[derive(Debug, Clone)]
pub struct UserPoolClientSpecBuilder {
    user_pool_id: Intrinsic,
    auth_flows: Option<AuthFlows>,
}

impl UserPoolClientSpecBuilder {
    pub fn with_auth_flows(mut self, auth_flows: AuthFlows) -> Self {
        self.auth_flows = Some(auth_flows);
        self
    }

    pub fn build(self) -> UserPoolClientSpec {
        let explicit_auth_flows = self
            .auth_flows
            .as_ref()
            .map(ExplicitAuthFlow::from_auth_flows)
            .filter(|flows| !flows.is_empty());

        UserPoolClientSpec {
            allowed_oauth_flows: ALLOWED_OAUTH_FLOWS.to_vec(),
            allowed_oauth_flows_user_pool_client: true,
            allowed_oauth_scopes: ALLOWED_OAUTH_SCOPES.to_vec(),
            callback_urls: vec![DEFAULT_CALLBACK_URL],
            explicit_auth_flows,
            supported_identity_providers: vec![COGNITO_IDENTITY_PROVIDER],
            user_pool_id: self.user_pool_id,
        }
    }
}
