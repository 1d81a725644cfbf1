//! Value objects for user pool domain primitives.
//!
//! Each value object enforces its invariants at construction time, so the
//! resource builders never see an unvalidated option.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use user_pool_config::resource::value_objects::{EnumOption, Mfa};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Empty strings resolve to "not configured"
//!     assert_eq!(Mfa::resolve(Some(""))?, None);
//!
//!     let mfa = Mfa::resolve(Some("REQUIRED"))?;
//!     assert_eq!(mfa.map(|m| m.configuration_value()), Some("ON"));
//!     Ok(())
//! }
//! ```

mod account_recovery;
mod enum_option;
mod logical_id;
mod mfa;

pub use account_recovery::{AccountRecovery, RecoveryMechanism, RecoveryMechanismName};
pub use enum_option::EnumOption;
pub use logical_id::LogicalId;
pub use mfa::Mfa;
