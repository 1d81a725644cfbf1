//! MFA configuration and the SMS role.

use crate::common::{self, fixtures};
use serde_json::json;
use user_pool_config::props::MfaSecondFactor;
use user_pool_config::{PoolConfig, ResourceType, UserPoolProps};

#[test]
fn test_absent_mfa_omits_everything() {
    let built = common::build_ok(&UserPoolProps::default());
    let properties = common::pool_properties(&built);

    assert!(properties.get("MfaConfiguration").is_none());
    assert!(properties.get("EnabledMfas").is_none());
    assert!(properties.get("SmsConfiguration").is_none());
    assert_eq!(built.scope.count_of(ResourceType::IamRole), 0);
}

#[test]
fn test_empty_mfa_matches_absent() {
    let empty = common::build_ok(&fixtures::with_mfa(""));
    let absent = common::build_ok(&UserPoolProps::default());
    assert_eq!(
        common::pool_properties(&empty),
        common::pool_properties(&absent)
    );
}

#[test]
fn test_off() {
    let built = common::build_ok(&fixtures::with_mfa("OFF"));
    let properties = common::pool_properties(&built);

    assert_eq!(properties["MfaConfiguration"], json!("OFF"));
    assert!(properties.get("EnabledMfas").is_none());
    assert!(built.pool.sms_role().is_none());
}

#[test]
fn test_optional_enables_sms() {
    let built = common::build_ok(&fixtures::with_mfa("OPTIONAL"));
    let properties = common::pool_properties(&built);

    assert_eq!(properties["MfaConfiguration"], json!("OPTIONAL"));
    assert_eq!(properties["EnabledMfas"], json!(["SMS_MFA"]));
    assert!(properties.get("SmsConfiguration").is_some());
    assert_eq!(built.scope.count_of(ResourceType::IamRole), 1);
}

#[test]
fn test_required_is_on() {
    let built = common::build_ok(&fixtures::with_mfa("REQUIRED"));
    let properties = common::pool_properties(&built);

    assert_eq!(properties["MfaConfiguration"], json!("ON"));
    assert_eq!(properties["EnabledMfas"], json!(["SMS_MFA"]));
}

#[test]
fn test_both_second_factors() {
    let props = UserPoolProps::new(
        PoolConfig::default()
            .with_mfa("REQUIRED")
            .with_mfa_second_factor(MfaSecondFactor {
                otp: true,
                sms: true,
            }),
    );
    let built = common::build_ok(&props);

    assert_eq!(
        common::pool_properties(&built)["EnabledMfas"],
        json!(["SMS_MFA", "SOFTWARE_TOKEN_MFA"])
    );
}

#[test]
fn test_no_second_factor_renders_empty_list() {
    let props = UserPoolProps::new(
        PoolConfig::default()
            .with_mfa("OPTIONAL")
            .with_mfa_second_factor(MfaSecondFactor {
                otp: false,
                sms: false,
            }),
    );
    let built = common::build_ok(&props);
    let properties = common::pool_properties(&built);

    assert_eq!(properties["EnabledMfas"], json!([]));
    assert!(properties.get("SmsConfiguration").is_none());
    assert!(built.pool.sms_role().is_none());
}

#[test]
fn test_sms_role_wiring() {
    let built = common::build_ok(&fixtures::with_mfa("OPTIONAL"));
    let pool_id = built.pool.user_pool().logical_id();
    let role_id = built.pool.sms_role().unwrap();

    assert!(role_id.as_str().starts_with("MyTestConstructUserPoolsmsRole"));
    assert_eq!(
        common::pool_properties(&built)["SmsConfiguration"],
        json!({
            "ExternalId": pool_id.as_str(),
            "SnsCallerArn": {"Fn::GetAtt": [role_id.as_str(), "Arn"]}
        })
    );

    let role = built.scope.get(role_id).unwrap();
    assert_eq!(
        role.properties()["Policies"][0]["PolicyDocument"]["Statement"][0],
        json!({"Action": "sns:Publish", "Effect": "Allow", "Resource": "*"})
    );
}

#[test]
fn test_invalid_value_is_rejected() {
    let result = common::build(&fixtures::with_mfa("SOMETIMES"));
    assert_invalid_enum!(result, "userPool.mfa");
}
