//! Rendered templates and scope-level behaviour.

use crate::common::{self, CONSTRUCT_ID, fixtures};
use serde_json::{Value, json};
use user_pool_config::{
    ConstructError, LogicalId, ProvisioningScope, ResourceType, ScopeError, UserPool,
    UserPoolProps,
};

#[test]
fn test_round_trip_scenario() {
    let built = common::build_ok(&fixtures::round_trip());

    assert_eq!(built.scope.count_of(ResourceType::UserPool), 1);
    assert_eq!(
        common::pool_properties(&built)["AccountRecoverySetting"],
        json!({"RecoveryMechanisms": [{"Name": "verified_email", "Priority": 1}]})
    );

    let client = built.pool.client("a").unwrap();
    let client_record = built.scope.get(client.logical_id()).unwrap();
    assert_eq!(
        client_record.property("UserPoolId"),
        Some(&json!({"Ref": built.pool.user_pool().logical_id().as_str()}))
    );

    let group = built.pool.group("g").unwrap();
    let group_record = built.scope.get(group.logical_id()).unwrap();
    assert_eq!(group_record.property("GroupName"), Some(&json!("G")));
    assert_eq!(group_record.property("Precedence"), Some(&json!(5)));
    assert!(group_record.property("Description").is_none());
    assert!(group_record.property("RoleArn").is_none());
}

#[test]
fn test_template_shape() {
    let built = common::build_ok(&fixtures::round_trip());
    let template = built.scope.synthesize().to_value().unwrap();

    let resources = template["Resources"].as_object().unwrap();
    assert_eq!(resources.len(), 3);

    let pool_id = built.pool.user_pool().logical_id().as_str();
    let pool = &resources[pool_id];
    assert_eq!(pool["Type"], json!("AWS::Cognito::UserPool"));
    assert_eq!(pool["DeletionPolicy"], json!("Retain"));
    assert_eq!(pool["UpdateReplacePolicy"], json!("Retain"));
    assert!(pool["Properties"].is_object());

    let types: Vec<&Value> = resources.values().map(|resource| &resource["Type"]).collect();
    assert!(types.contains(&&json!("AWS::Cognito::UserPoolClient")));
    assert!(types.contains(&&json!("AWS::Cognito::UserPoolGroup")));
}

#[test]
fn test_template_json_is_parseable() {
    let built = common::build_ok(&fixtures::full_pool());
    let rendered = built.scope.synthesize().to_json_pretty().unwrap();
    let parsed: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["Resources"].as_object().map(|r| r.len()), Some(2));
}

#[test]
fn test_synthesis_is_deterministic() {
    let first = common::build_ok(&fixtures::full_pool());
    let second = common::build_ok(&fixtures::full_pool());
    assert_eq!(
        first.scope.synthesize().to_json_pretty().unwrap(),
        second.scope.synthesize().to_json_pretty().unwrap()
    );
}

#[test]
fn test_logical_ids_derive_from_construct_path() {
    let built = common::build_ok(&fixtures::round_trip());
    assert_eq!(
        built.pool.user_pool().logical_id(),
        &LogicalId::from_path(&[CONSTRUCT_ID, "UserPool"])
    );
    assert_eq!(
        built.pool.client("a").unwrap().logical_id(),
        &LogicalId::from_path(&[CONSTRUCT_ID, "UserPoolAppClient-a"])
    );
    assert_eq!(
        built.pool.group("g").unwrap().logical_id(),
        &LogicalId::from_path(&[CONSTRUCT_ID, "UserPoolGroup-g"])
    );
}

#[test]
fn test_duplicate_construct_leaves_scope_unchanged() {
    let mut scope = ProvisioningScope::new(common::STACK_NAME);
    UserPool::new(&mut scope, "Auth", &fixtures::round_trip()).unwrap();
    let before = scope.synthesize();

    let result = UserPool::new(&mut scope, "Auth", &UserPoolProps::default());

    assert!(matches!(
        result,
        Err(ConstructError::Scope(ScopeError::DuplicateLogicalId { .. }))
    ));
    assert_eq!(scope.synthesize(), before);
}

#[test]
fn test_pools_share_a_scope() {
    let mut scope = ProvisioningScope::new(common::STACK_NAME);
    UserPool::new(&mut scope, "Customers", &fixtures::round_trip()).unwrap();
    UserPool::new(&mut scope, "Staff", &fixtures::round_trip()).unwrap();

    assert_eq!(scope.count_of(ResourceType::UserPool), 2);
    assert_eq!(scope.count_of(ResourceType::UserPoolClient), 2);
    assert_eq!(scope.synthesize().len(), 6);
}

#[test]
fn test_props_file_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "user-pool-config-props-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{"userPool": {"mfa": "REQUIRED"}, "userPoolClient": {"web": {}}}"#,
    )
    .unwrap();

    let props = UserPoolProps::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let built = common::build_ok(&props);
    assert_eq!(built.scope.count_of(ResourceType::IamRole), 1);
    assert_eq!(built.scope.count_of(ResourceType::UserPoolClient), 1);
}
