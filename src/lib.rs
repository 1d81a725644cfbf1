//! User pool configuration library for Rust.
//!
//! Translates a declarative description of an identity user pool, its
//! application clients and its user groups into backend resource records,
//! validating enumerated options up front and registering everything into an
//! in-memory provisioning scope that renders as a template.
//!
//! # Core Components
//!
//! - [`UserPool`] - Builds and registers the pool, its clients and groups
//! - [`UserPoolProps`] - User-facing configuration, loadable from JSON
//! - [`ProvisioningScope`] - Append-only record graph with template output
//!
//! # Quick Start
//!
//! ```rust
//! use user_pool_config::{ProvisioningScope, UserPool, UserPoolProps};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let props = UserPoolProps::from_json_str(
//!     r#"{
//!         "userPool": {"accountRecovery": "EMAIL_ONLY"},
//!         "userPoolClient": {"a": {}},
//!         "userPoolGroup": {"g": {"groupName": "G", "precedence": 5}}
//!     }"#,
//! )?;
//!
//! let mut scope = ProvisioningScope::new("AuthStack");
//! let pool = UserPool::new(&mut scope, "Auth", &props)?;
//!
//! assert!(pool.client("a").is_some());
//! assert_eq!(scope.len(), 3);
//! println!("{}", scope.synthesize().to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod construct;
pub mod error;
pub mod props;
pub mod resource;
pub mod scope;

// Re-export commonly used types for convenience
pub use construct::{UserPool, UserPoolClientHandle, UserPoolGroupHandle, UserPoolHandle};
pub use error::{ConstructError, ConstructResult, ValidationError, ValidationResult};
pub use props::{ClientConfig, GroupConfig, PoolConfig, UserPoolProps};
pub use resource::Intrinsic;
pub use resource::value_objects::{AccountRecovery, EnumOption, LogicalId, Mfa};
pub use scope::{ProvisioningScope, ResourceRecord, ResourceType, ScopeError, Template};
