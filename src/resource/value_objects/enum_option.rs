//! Shared parsing behaviour for enumerated string options.
//!
//! User pool props carry some settings as plain strings that must match one
//! of a closed set of literals. Every such option resolves the same way:
//! absent or empty means "use the backend default", an exact match selects
//! the variant, and anything else is rejected with the option's field path.

use crate::error::{ValidationError, ValidationResult};

/// Trait for options expressed as one of a fixed set of string literals.
pub trait EnumOption: Sized + Copy + 'static {
    /// Field path reported when a value is rejected (e.g. `userPool.mfa`)
    const FIELD: &'static str;

    /// Every accepted variant, in documentation order
    const VARIANTS: &'static [Self];

    /// The literal accepted on input for this variant
    fn as_str(&self) -> &'static str;

    /// Parse an exact literal.
    fn parse(value: &str) -> ValidationResult<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| {
                ValidationError::invalid_enum_value(
                    Self::FIELD,
                    value,
                    Self::VARIANTS.iter().map(|variant| variant.as_str()),
                )
            })
    }

    /// Resolve an optional raw value, treating the empty string as absent.
    fn resolve(value: Option<&str>) -> ValidationResult<Option<Self>> {
        match value {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }
}
