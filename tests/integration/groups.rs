//! User groups.

use crate::common::{self, fixtures};
use serde_json::json;
use user_pool_config::{GroupConfig, Intrinsic, ResourceType, UserPoolProps};

#[test]
fn test_one_group_per_key() {
    let props = UserPoolProps::default()
        .with_group("admins", GroupConfig::default().with_group_name("Admins"))
        .with_group("readers", GroupConfig::default().with_group_name("Readers"));
    let built = common::build_ok(&props);

    assert_eq!(built.pool.user_pool_group().map(|groups| groups.len()), Some(2));
    assert_eq!(built.scope.count_of(ResourceType::UserPoolGroup), 2);

    let pool_ref = built.pool.user_pool().user_pool_id();
    for handle in built.pool.user_pool_group().unwrap().values() {
        let record = built.scope.get(handle.logical_id()).unwrap();
        assert_eq!(
            record.property("UserPoolId"),
            Some(&serde_json::to_value(&pool_ref).unwrap())
        );
        assert_eq!(handle.group_name(), Intrinsic::reference(handle.logical_id()));
    }
}

#[test]
fn test_only_supplied_fields_are_rendered() {
    let props = fixtures::from_json(json!({
        "userPoolGroup": {"g": {"description": "Readers only"}}
    }));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolGroup);

    assert_eq!(
        properties[0],
        &json!({
            "Description": "Readers only",
            "UserPoolId": {"Ref": built.pool.user_pool().logical_id().as_str()}
        })
    );
}

#[test]
fn test_empty_strings_and_zero_precedence_are_dropped() {
    let props = fixtures::from_json(json!({
        "userPoolGroup": {
            "g": {"description": "", "groupName": "", "precedence": 0, "roleArn": ""}
        }
    }));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolGroup);

    assert_eq!(
        properties[0].as_object().map(|object| object.len()),
        Some(1)
    );
}

#[test]
fn test_empty_string_precedence_is_unset() {
    let props = fixtures::from_json(json!({
        "userPoolGroup": {"g": {"groupName": "G", "precedence": ""}}
    }));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolGroup);
    assert!(properties[0].get("Precedence").is_none());
}

#[test]
fn test_role_arn_is_passed_through() {
    let arn = "arn:aws:iam::123456789012:role/GroupRole";
    let props = UserPoolProps::default()
        .with_group("g", GroupConfig::default().with_role_arn(arn));
    let built = common::build_ok(&props);
    let properties = common::properties_of(&built, ResourceType::UserPoolGroup);
    assert_eq!(properties[0]["RoleArn"], json!(arn));
}

#[test]
fn test_absent_and_empty_maps() {
    for props in [
        UserPoolProps::default(),
        fixtures::from_json(json!({"userPoolGroup": {}})),
    ] {
        let built = common::build_ok(&props);
        assert!(built.pool.user_pool_group().is_none());
        assert_eq!(built.scope.count_of(ResourceType::UserPoolGroup), 0);
    }
}
