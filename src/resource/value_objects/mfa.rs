//! Multi-factor authentication requirement for user pools.

use crate::error::{ValidationError, ValidationResult};
use crate::resource::value_objects::enum_option::EnumOption;
use std::fmt;
use std::str::FromStr;

/// Whether users of the pool must, may, or cannot use a second factor.
///
/// The input literal and the value the backend expects differ for
/// [`Mfa::Required`], which is emitted as `ON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mfa {
    Off,
    Optional,
    Required,
}

impl Mfa {
    /// Value of the pool's `MfaConfiguration` property.
    pub fn configuration_value(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Optional => "OPTIONAL",
            Self::Required => "ON",
        }
    }

    /// True when second factors are offered to users at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl EnumOption for Mfa {
    const FIELD: &'static str = "userPool.mfa";

    const VARIANTS: &'static [Self] = &[Self::Off, Self::Optional, Self::Required];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Optional => "OPTIONAL",
            Self::Required => "REQUIRED",
        }
    }
}

impl fmt::Display for Mfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mfa {
    type Err = ValidationError;

    fn from_str(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Mfa {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::parse(value)
    }
}
