//! Integration tests for user pool construction.
//!
//! Each module drives [`UserPool::new`](user_pool_config::UserPool::new)
//! through the public API and inspects the registered records.

pub mod clients;
pub mod groups;
pub mod mfa;
pub mod pool_options;
pub mod template;
