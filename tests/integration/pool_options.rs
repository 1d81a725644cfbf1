//! Password policy, standard attributes and removal policy.

use crate::common::{self, fixtures};
use serde_json::json;
use user_pool_config::props::{PasswordPolicy, StandardAttribute, StandardAttributes};
use user_pool_config::scope::DeletionPolicy;
use user_pool_config::{PoolConfig, UserPoolProps};

#[test]
fn test_password_policy() {
    let built = common::build_ok(&fixtures::full_pool());
    assert_eq!(
        common::pool_properties(&built)["Policies"],
        json!({
            "PasswordPolicy": {
                "MinimumLength": 12,
                "RequireLowercase": true,
                "RequireNumbers": true,
                "RequireSymbols": false,
                "RequireUppercase": true,
                "TemporaryPasswordValidityDays": 3
            }
        })
    );
}

#[test]
fn test_partial_password_policy() {
    let props = UserPoolProps::new(PoolConfig::default().with_password_policy(PasswordPolicy {
        require_symbols: Some(true),
        ..PasswordPolicy::default()
    }));
    let built = common::build_ok(&props);
    assert_eq!(
        common::pool_properties(&built)["Policies"],
        json!({"PasswordPolicy": {"MinimumLength": 8, "RequireSymbols": true}})
    );
}

#[test]
fn test_no_password_policy() {
    let built = common::build_ok(&UserPoolProps::default());
    assert!(common::pool_properties(&built).get("Policies").is_none());
}

#[test]
fn test_standard_attribute_names() {
    let built = common::build_ok(&fixtures::full_pool());
    assert_eq!(
        common::pool_properties(&built)["Schema"],
        json!([
            {"Mutable": false, "Name": "email", "Required": true},
            {"Mutable": true, "Name": "name", "Required": true},
            {"Mutable": true, "Name": "zoneinfo", "Required": false}
        ])
    );
}

#[test]
fn test_renamed_attributes() {
    let attributes = StandardAttributes {
        family_name: Some(StandardAttribute::default()),
        last_update_time: Some(StandardAttribute::default()),
        profile_page: Some(StandardAttribute::default()),
        profile_picture: Some(StandardAttribute::default()),
        ..StandardAttributes::default()
    };
    let props = UserPoolProps::new(PoolConfig::default().with_standard_attributes(attributes));
    let built = common::build_ok(&props);

    let names: Vec<&str> = common::pool_properties(&built)["Schema"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|attribute| attribute["Name"].as_str())
        .collect();
    assert_eq!(names, vec!["family_name", "updated_at", "profile", "picture"]);
}

#[test]
fn test_empty_standard_attributes_omit_schema() {
    let props = fixtures::from_json(json!({"userPool": {"standardAttributes": {}}}));
    let built = common::build_ok(&props);
    assert!(common::pool_properties(&built).get("Schema").is_none());
}

#[test]
fn test_removal_policy_default_is_retain() {
    let built = common::build_ok(&UserPoolProps::default());
    let record = common::pool_record(&built);
    assert_eq!(record.deletion_policy(), Some(DeletionPolicy::Retain));
    assert_eq!(record.update_replace_policy(), Some(DeletionPolicy::Retain));
}

#[test]
fn test_removal_policy_mapping() {
    for (literal, expected) in [
        ("DESTROY", DeletionPolicy::Delete),
        ("RETAIN", DeletionPolicy::Retain),
        ("SNAPSHOT", DeletionPolicy::Snapshot),
    ] {
        let props = fixtures::from_json(json!({"userPool": {"removalPolicy": literal}}));
        let built = common::build_ok(&props);
        assert_eq!(common::pool_record(&built).deletion_policy(), Some(expected));
    }
}

#[test]
fn test_fixed_defaults_are_always_present() {
    let built = common::build_ok(&fixtures::full_pool());
    let properties = common::pool_properties(&built);

    assert_eq!(
        properties["AdminCreateUserConfig"],
        json!({"AllowAdminCreateUserOnly": true})
    );
    assert_eq!(
        properties["EmailVerificationSubject"],
        json!("Verify your new account")
    );
    assert_eq!(
        properties["VerificationMessageTemplate"]["DefaultEmailOption"],
        json!("CONFIRM_WITH_CODE")
    );
}

#[test]
fn test_unknown_pool_option_is_rejected() {
    let result = serde_json::from_value::<UserPoolProps>(json!({
        "userPool": {"selfSignUpEnabled": true}
    }));
    assert!(result.is_err());
}
