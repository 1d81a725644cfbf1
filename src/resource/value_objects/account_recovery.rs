//! Account recovery option for user pools.
//!
//! Maps the user-facing recovery literal onto the ordered list of recovery
//! mechanisms the backend expects in `AccountRecoverySetting`.

use crate::error::{ValidationError, ValidationResult};
use crate::resource::value_objects::enum_option::EnumOption;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How users recover their account when they forget their password.
///
/// ## Examples
///
/// ```rust
/// use user_pool_config::resource::value_objects::{AccountRecovery, EnumOption};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let recovery = AccountRecovery::parse("EMAIL_ONLY")?;
///     assert_eq!(recovery, AccountRecovery::EmailOnly);
///
///     assert!(AccountRecovery::resolve(Some(""))?.is_none());
///     assert!(AccountRecovery::parse("INVALID").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRecovery {
    /// Email first, then phone (phone only when not used for MFA)
    EmailAndPhoneWithoutMfa,
    /// Phone first (when not used for MFA), then email
    PhoneWithoutMfaAndEmail,
    /// Email only
    EmailOnly,
    /// Phone only, when not used for MFA
    PhoneOnlyWithoutMfa,
    /// Legacy behaviour: the backend decides, no setting is emitted
    PhoneAndEmail,
    /// No self-service recovery; an administrator must reset the account
    None,
}

/// Verified channel a recovery code can be sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryMechanismName {
    VerifiedEmail,
    VerifiedPhoneNumber,
    AdminOnly,
}

/// One entry of `AccountRecoverySetting.RecoveryMechanisms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryMechanism {
    pub name: RecoveryMechanismName,
    pub priority: u8,
}

impl RecoveryMechanism {
    fn ranked(names: &[RecoveryMechanismName]) -> Vec<Self> {
        names
            .iter()
            .zip(1..)
            .map(|(&name, priority)| Self { name, priority })
            .collect()
    }
}

impl AccountRecovery {
    /// Recovery option the backend applies when none is configured.
    pub const BACKEND_DEFAULT: Self = Self::PhoneWithoutMfaAndEmail;

    /// Ranked recovery mechanisms for this option.
    ///
    /// Returns `None` for [`AccountRecovery::PhoneAndEmail`], which leaves the
    /// setting out of the resource entirely.
    pub fn recovery_mechanisms(&self) -> Option<Vec<RecoveryMechanism>> {
        use RecoveryMechanismName::*;

        let names: &[RecoveryMechanismName] = match self {
            Self::EmailAndPhoneWithoutMfa => &[VerifiedEmail, VerifiedPhoneNumber],
            Self::PhoneWithoutMfaAndEmail => &[VerifiedPhoneNumber, VerifiedEmail],
            Self::EmailOnly => &[VerifiedEmail],
            Self::PhoneOnlyWithoutMfa => &[VerifiedPhoneNumber],
            Self::PhoneAndEmail => return None,
            Self::None => &[AdminOnly],
        };
        Some(RecoveryMechanism::ranked(names))
    }
}

impl EnumOption for AccountRecovery {
    const FIELD: &'static str = "userPool.accountRecovery";

    const VARIANTS: &'static [Self] = &[
        Self::EmailAndPhoneWithoutMfa,
        Self::PhoneWithoutMfaAndEmail,
        Self::EmailOnly,
        Self::PhoneOnlyWithoutMfa,
        Self::PhoneAndEmail,
        Self::None,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::EmailAndPhoneWithoutMfa => "EMAIL_AND_PHONE_WITHOUT_MFA",
            Self::PhoneWithoutMfaAndEmail => "PHONE_WITHOUT_MFA_AND_EMAIL",
            Self::EmailOnly => "EMAIL_ONLY",
            Self::PhoneOnlyWithoutMfa => "PHONE_ONLY_WITHOUT_MFA",
            Self::PhoneAndEmail => "PHONE_AND_EMAIL",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for AccountRecovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRecovery {
    type Err = ValidationError;

    fn from_str(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for AccountRecovery {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
    }
}
