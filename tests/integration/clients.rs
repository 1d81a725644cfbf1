//! Application clients.

use crate::common::{self, fixtures};
use serde_json::json;
use user_pool_config::props::AuthFlows;
use user_pool_config::{ClientConfig, ResourceType, UserPoolProps};

#[test]
fn test_one_client_per_key() {
    let props = UserPoolProps::default()
        .with_client("web", ClientConfig::default())
        .with_client("mobile", ClientConfig::default())
        .with_client("cli", ClientConfig::default());
    let built = common::build_ok(&props);

    let clients = built.pool.user_pool_client().unwrap();
    assert_eq!(clients.len(), 3);
    assert_eq!(built.scope.count_of(ResourceType::UserPoolClient), 3);

    let keys: Vec<&str> = clients.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["cli", "mobile", "web"]);
}

#[test]
fn test_client_ids_follow_keys() {
    let built = common::build_ok(&fixtures::round_trip());
    let client = built.pool.client("a").unwrap();
    assert!(
        client
            .logical_id()
            .as_str()
            .starts_with("MyTestConstructUserPoolAppClienta")
    );
}

#[test]
fn test_client_defaults() {
    let built = common::build_ok(&fixtures::round_trip());
    let client = built.pool.client("a").unwrap();
    let record = built.scope.get(client.logical_id()).unwrap();

    assert_eq!(
        record.properties(),
        &json!({
            "AllowedOAuthFlows": ["implicit", "code"],
            "AllowedOAuthFlowsUserPoolClient": true,
            "AllowedOAuthScopes": [
                "profile", "phone", "email", "openid", "aws.cognito.signin.user.admin"
            ],
            "CallbackURLs": ["https://example.com"],
            "SupportedIdentityProviders": ["COGNITO"],
            "UserPoolId": {"Ref": built.pool.user_pool().logical_id().as_str()}
        })
    );
}

#[test]
fn test_auth_flows_from_json() {
    let props = fixtures::from_json(json!({
        "userPoolClient": {
            "web": {"authFlows": {"userSrp": true, "custom": true, "adminUserPassword": false}}
        }
    }));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolClient);

    assert_eq!(
        properties[0]["ExplicitAuthFlows"],
        json!([
            "ALLOW_CUSTOM_AUTH",
            "ALLOW_USER_SRP_AUTH",
            "ALLOW_REFRESH_TOKEN_AUTH"
        ])
    );
}

#[test]
fn test_all_auth_flows() {
    let props = UserPoolProps::default()
        .with_client("web", ClientConfig::default().with_auth_flows(AuthFlows::all()));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolClient);

    assert_eq!(
        properties[0]["ExplicitAuthFlows"],
        json!([
            "ALLOW_USER_PASSWORD_AUTH",
            "ALLOW_ADMIN_USER_PASSWORD_AUTH",
            "ALLOW_CUSTOM_AUTH",
            "ALLOW_USER_SRP_AUTH",
            "ALLOW_REFRESH_TOKEN_AUTH"
        ])
    );
}

#[test]
fn test_disabled_auth_flows_are_omitted() {
    let props = fixtures::from_json(json!({
        "userPoolClient": {"web": {"authFlows": {"userPassword": false}}}
    }));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolClient);
    assert!(properties[0].get("ExplicitAuthFlows").is_none());
}

#[test]
fn test_absent_and_empty_maps() {
    for props in [
        UserPoolProps::default(),
        fixtures::from_json(json!({"userPoolClient": {}})),
    ] {
        let built = common::build_ok(&props);
        assert!(built.pool.user_pool_client().is_none());
        assert_eq!(built.scope.count_of(ResourceType::UserPoolClient), 0);
    }
}
