//! User pool resource specification.
//!
//! Besides the configured options, every pool spec carries the defaults the
//! backend applies to a pool created without further settings: admin-only
//! sign-up and the stock verification messages.

use crate::props::{MfaSecondFactor, PasswordPolicy, StandardAttributes};
use crate::resource::Intrinsic;
use crate::resource::sms_role::SmsRoleSpec;
use crate::resource::value_objects::{AccountRecovery, Mfa, RecoveryMechanism};
use serde::Serialize;

const VERIFICATION_MESSAGE: &str = "The verification code to your new account is {####}";
const VERIFICATION_SUBJECT: &str = "Verify your new account";
const DEFAULT_MINIMUM_PASSWORD_LENGTH: u32 = 8;

/// Second factor type listed in `EnabledMfas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MfaFactor {
    #[serde(rename = "SMS_MFA")]
    Sms,
    #[serde(rename = "SOFTWARE_TOKEN_MFA")]
    SoftwareToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRecoverySetting {
    pub recovery_mechanisms: Vec<RecoveryMechanism>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserConfig {
    pub allow_admin_create_user_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerificationMessageTemplate {
    pub default_email_option: &'static str,
    pub email_message: &'static str,
    pub email_subject: &'static str,
    pub sms_message: &'static str,
}

impl Default for VerificationMessageTemplate {
    fn default() -> Self {
        Self {
            default_email_option: "CONFIRM_WITH_CODE",
            email_message: VERIFICATION_MESSAGE,
            email_subject: VERIFICATION_SUBJECT,
            sms_message: VERIFICATION_MESSAGE,
        }
    }
}

/// Rendered password policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicySpec {
    pub minimum_length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password_validity_days: Option<u32>,
}

impl From<&PasswordPolicy> for PasswordPolicySpec {
    fn from(policy: &PasswordPolicy) -> Self {
        Self {
            minimum_length: policy.min_length.unwrap_or(DEFAULT_MINIMUM_PASSWORD_LENGTH),
            require_lowercase: policy.require_lowercase,
            require_numbers: policy.require_digits,
            require_symbols: policy.require_symbols,
            require_uppercase: policy.require_uppercase,
            temporary_password_validity_days: policy.temp_password_validity_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policies {
    pub password_policy: PasswordPolicySpec,
}

/// One entry of the pool's `Schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaAttribute {
    pub mutable: bool,
    pub name: &'static str,
    pub required: bool,
}

/// Role and external ID the pool uses to publish SMS messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmsConfiguration {
    pub external_id: String,
    pub sns_caller_arn: Intrinsic,
}

/// Properties of an `AWS::Cognito::UserPool` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_recovery_setting: Option<AccountRecoverySetting>,
    admin_create_user_config: AdminCreateUserConfig,
    email_verification_message: &'static str,
    email_verification_subject: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled_mfas: Option<Vec<MfaFactor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_configuration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policies: Option<Policies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<Vec<SchemaAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms_configuration: Option<SmsConfiguration>,
    sms_verification_message: &'static str,
    verification_message_template: VerificationMessageTemplate,
}

impl UserPoolSpec {
    /// Start building a pool spec from backend defaults.
    pub fn builder() -> UserPoolSpecBuilder {
        UserPoolSpecBuilder::default()
    }

    pub fn recovery_mechanisms(&self) -> Option<&[RecoveryMechanism]> {
        self.account_recovery_setting
            .as_ref()
            .map(|setting| setting.recovery_mechanisms.as_slice())
    }

    pub fn mfa_configuration(&self) -> Option<&'static str> {
        self.mfa_configuration
    }

    pub fn enabled_mfas(&self) -> Option<&[MfaFactor]> {
        self.enabled_mfas.as_deref()
    }

    pub fn password_policy(&self) -> Option<&PasswordPolicySpec> {
        self.policies.as_ref().map(|policies| &policies.password_policy)
    }

    pub fn schema(&self) -> Option<&[SchemaAttribute]> {
        self.schema.as_deref()
    }

    pub fn sms_configuration(&self) -> Option<&SmsConfiguration> {
        self.sms_configuration.as_ref()
    }
}

/// Builder for [`UserPoolSpec`].
///
/// Options left unset fall back to the backend default.
#[derive(Debug, Clone, Default)]
pub struct UserPoolSpecBuilder {
    account_recovery: Option<AccountRecovery>,
    mfa: Option<Mfa>,
    mfa_second_factor: Option<MfaSecondFactor>,
    password_policy: Option<PasswordPolicy>,
    standard_attributes: Option<StandardAttributes>,
    sms_configuration: Option<SmsConfiguration>,
}

impl UserPoolSpecBuilder {
    pub fn with_account_recovery(mut self, account_recovery: AccountRecovery) -> Self {
        self.account_recovery = Some(account_recovery);
        self
    }

    pub fn with_mfa(mut self, mfa: Mfa) -> Self {
        self.mfa = Some(mfa);
        self
    }

    pub fn with_mfa_second_factor(mut self, second_factor: MfaSecondFactor) -> Self {
        self.mfa_second_factor = Some(second_factor);
        self
    }

    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = Some(policy);
        self
    }

    pub fn with_standard_attributes(mut self, attributes: StandardAttributes) -> Self {
        self.standard_attributes = Some(attributes);
        self
    }

    /// Send SMS messages through the given role.
    pub fn with_sms_role(mut self, role: &SmsRoleSpec) -> Self {
        self.sms_configuration = Some(role.sms_configuration());
        self
    }

    /// Second factors that will be enabled, or `None` when MFA is off or
    /// not configured.
    pub fn enabled_mfas(&self) -> Option<Vec<MfaFactor>> {
        self.mfa.filter(Mfa::is_enabled)?;
        let second_factor = self.mfa_second_factor.unwrap_or_default();

        let mut factors = Vec::with_capacity(2);
        if second_factor.sms {
            factors.push(MfaFactor::Sms);
        }
        if second_factor.otp {
            factors.push(MfaFactor::SoftwareToken);
        }
        Some(factors)
    }

    /// True when the pool will send MFA codes by SMS and therefore needs a
    /// role to publish them.
    pub fn uses_sms(&self) -> bool {
        self.enabled_mfas()
            .is_some_and(|factors| factors.contains(&MfaFactor::Sms))
    }

    /// Build the spec.
    ///
    /// `SmsConfiguration` is only emitted when SMS is an enabled factor and a
    /// role was supplied through [`UserPoolSpecBuilder::with_sms_role`].
    pub fn build(self) -> UserPoolSpec {
        let enabled_mfas = self.enabled_mfas();
        let sms_configuration = if self.uses_sms() {
            self.sms_configuration
        } else {
            None
        };

        let account_recovery_setting = self
            .account_recovery
            .unwrap_or(AccountRecovery::BACKEND_DEFAULT)
            .recovery_mechanisms()
            .map(|recovery_mechanisms| AccountRecoverySetting {
                recovery_mechanisms,
            });

        let schema = self
            .standard_attributes
            .as_ref()
            .map(|attributes| {
                attributes
                    .iter()
                    .map(|(name, attribute)| SchemaAttribute {
                        mutable: attribute.mutable.unwrap_or(true),
                        name,
                        required: attribute.required.unwrap_or(false),
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|schema| !schema.is_empty());

        UserPoolSpec {
            account_recovery_setting,
            admin_create_user_config: AdminCreateUserConfig {
                allow_admin_create_user_only: true,
            },
            email_verification_message: VERIFICATION_MESSAGE,
            email_verification_subject: VERIFICATION_SUBJECT,
            enabled_mfas,
            mfa_configuration: self.mfa.map(|mfa| mfa.configuration_value()),
            policies: self.password_policy.as_ref().map(|policy| Policies {
                password_policy: policy.into(),
            }),
            schema,
            sms_configuration,
            sms_verification_message: VERIFICATION_MESSAGE,
            verification_message_template: VerificationMessageTemplate::default(),
        }
    }
}
