//! User pool construct.
//!
//! [`UserPool::new`] translates a [`UserPoolProps`] description into backend
//! resource records and registers them into a [`ProvisioningScope`]: one pool,
//! an SMS role when SMS codes are sent, one client per client entry and one
//! group per group entry.
//!
//! Building is all-or-nothing. Enumerated options are validated before any
//! record is produced, and the records are handed to the scope as a single
//! batch, so a failed build leaves the scope untouched.
//!
//! # Example Usage
//!
//! ```rust
//! use user_pool_config::construct::UserPool;
//! use user_pool_config::props::{ClientConfig, PoolConfig, UserPoolProps};
//! use user_pool_config::scope::{ProvisioningScope, ResourceType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scope = ProvisioningScope::new("AuthStack");
//! let props = UserPoolProps::new(PoolConfig::default().with_mfa("OPTIONAL"))
//!     .with_client("web", ClientConfig::default());
//!
//! let pool = UserPool::new(&mut scope, "Auth", &props)?;
//!
//! assert!(pool.client("web").is_some());
//! assert!(pool.sms_role().is_some());
//! assert_eq!(scope.count_of(ResourceType::UserPoolClient), 1);
//! # Ok(())
//! # }
//! ```

pub mod handles;


pub use handles::{UserPoolClientHandle, UserPoolGroupHandle, UserPoolHandle};

use crate::error::{ConstructResult, ValidationError, ValidationResult};
use crate::props::{ClientConfig, GroupConfig, PoolConfig, UserPoolProps};
use crate::resource::value_objects::{AccountRecovery, EnumOption, LogicalId, Mfa};
use crate::resource::{
    SmsRoleSpec, UserPoolClientSpec, UserPoolGroupSpec, UserPoolSpec, UserPoolSpecBuilder,
};
use crate::scope::{DeletionPolicy, ProvisioningScope, ResourceRecord, ResourceType};
use log::{info, warn};
use std::collections::BTreeMap;

const USER_POOL_ID: &str = "UserPool";
const SMS_ROLE_ID: &str = "smsRole";
const CLIENT_ID_PREFIX: &str = "UserPoolAppClient-";
const GROUP_ID_PREFIX: &str = "UserPoolGroup-";

/// A user pool together with its clients and groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPool {
    id: String,
    user_pool: UserPoolHandle,
    sms_role: Option<LogicalId>,
    user_pool_client: Option<BTreeMap<String, UserPoolClientHandle>>,
    user_pool_group: Option<BTreeMap<String, UserPoolGroupHandle>>,
}

impl UserPool {
    /// Build the resources described by `props` and register them in `scope`
    /// under the construct ID `id`.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidConstructId`] when `id` is empty or
    ///   contains a path separator
    /// * [`ValidationError::InvalidEnumValue`] when `accountRecovery` or
    ///   `mfa` is not one of the accepted literals
    /// * [`ScopeError::DuplicateLogicalId`](crate::scope::ScopeError) when a
    ///   construct with the same ID was already built into `scope`
    ///
    /// Nothing is registered when an error is returned.
    pub fn new(
        scope: &mut ProvisioningScope,
        id: &str,
        props: &UserPoolProps,
    ) -> ConstructResult<Self> {
        validate_construct_id(id)?;
        let pool_config = &props.user_pool;
        let account_recovery = AccountRecovery::resolve(pool_config.account_recovery.as_deref())?;
        let mfa = Mfa::resolve(pool_config.mfa.as_deref())?;

        let pool_id = LogicalId::from_path(&[id, USER_POOL_ID]);
        let mut records = Vec::new();

        let mut builder = pool_builder(pool_config, account_recovery, mfa);
        let sms_role = if builder.uses_sms() {
            let role = SmsRoleSpec::new(
                LogicalId::from_path(&[id, USER_POOL_ID, SMS_ROLE_ID]),
                pool_id.as_str(),
            );
            builder = builder.with_sms_role(&role);
            Some(role)
        } else {
            None
        };

        let deletion_policy = pool_config
            .removal_policy
            .map(DeletionPolicy::from)
            .unwrap_or(DeletionPolicy::Retain);
        records.push(
            ResourceRecord::new(pool_id.clone(), ResourceType::UserPool, &builder.build())?
                .with_removal_policy(deletion_policy),
        );
        if let Some(role) = &sms_role {
            records.push(ResourceRecord::new(
                role.logical_id().clone(),
                ResourceType::IamRole,
                &role.properties(),
            )?);
        }

        let user_pool = UserPoolHandle::new(pool_id);

        let user_pool_client = match non_empty(&props.user_pool_client) {
            Some(clients) => {
                let mut handles = BTreeMap::new();
                for (key, client) in clients {
                    let logical_id = child_id(id, CLIENT_ID_PREFIX, key);
                    let spec = client_spec(&user_pool, client);
                    records.push(ResourceRecord::new(
                        logical_id.clone(),
                        ResourceType::UserPoolClient,
                        &spec,
                    )?);
                    handles.insert(key.clone(), UserPoolClientHandle::new(key, logical_id));
                }
                Some(handles)
            }
            None => None,
        };

        let user_pool_group = match non_empty(&props.user_pool_group) {
            Some(groups) => {
                let mut handles = BTreeMap::new();
                for (key, group) in groups {
                    let logical_id = child_id(id, GROUP_ID_PREFIX, key);
                    let spec = group_spec(&user_pool, key, group);
                    records.push(ResourceRecord::new(
                        logical_id.clone(),
                        ResourceType::UserPoolGroup,
                        &spec,
                    )?);
                    handles.insert(key.clone(), UserPoolGroupHandle::new(key, logical_id));
                }
                Some(handles)
            }
            None => None,
        };

        scope.register_all(records)?;

        info!(
            "Built user pool '{}' in scope '{}' ({} clients, {} groups, SMS role: {})",
            id,
            scope.name(),
            user_pool_client.as_ref().map_or(0, BTreeMap::len),
            user_pool_group.as_ref().map_or(0, BTreeMap::len),
            sms_role.is_some()
        );

        Ok(Self {
            id: id.to_string(),
            user_pool,
            sms_role: sms_role.map(|role| role.logical_id().clone()),
            user_pool_client,
            user_pool_group,
        })
    }

    /// Build a pool with backend defaults and no clients or groups.
    pub fn with_defaults(scope: &mut ProvisioningScope, id: &str) -> ConstructResult<Self> {
        Self::new(scope, id, &UserPoolProps::default())
    }

    /// Construct ID the pool was built under.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_pool(&self) -> &UserPoolHandle {
        &self.user_pool
    }

    /// Logical ID of the SMS role, when one was created.
    pub fn sms_role(&self) -> Option<&LogicalId> {
        self.sms_role.as_ref()
    }

    /// Client handles by key; `None` when no client entry was supplied.
    pub fn user_pool_client(&self) -> Option<&BTreeMap<String, UserPoolClientHandle>> {
        self.user_pool_client.as_ref()
    }

    /// Group handles by key; `None` when no group entry was supplied.
    pub fn user_pool_group(&self) -> Option<&BTreeMap<String, UserPoolGroupHandle>> {
        self.user_pool_group.as_ref()
    }

    pub fn client(&self, key: &str) -> Option<&UserPoolClientHandle> {
        self.user_pool_client.as_ref()?.get(key)
    }

    pub fn group(&self, key: &str) -> Option<&UserPoolGroupHandle> {
        self.user_pool_group.as_ref()?.get(key)
    }
}

fn validate_construct_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::invalid_construct_id(id, "must not be empty"));
    }
    if id.contains('/') {
        return Err(ValidationError::invalid_construct_id(
            id,
            "must not contain '/'",
        ));
    }
    Ok(())
}

fn pool_builder(
    config: &PoolConfig,
    account_recovery: Option<AccountRecovery>,
    mfa: Option<Mfa>,
) -> UserPoolSpecBuilder {
    let mut builder = UserPoolSpec::builder();
    if let Some(account_recovery) = account_recovery {
        builder = builder.with_account_recovery(account_recovery);
    }
    if let Some(mfa) = mfa {
        builder = builder.with_mfa(mfa);
    }
    if let Some(second_factor) = config.mfa_second_factor {
        builder = builder.with_mfa_second_factor(second_factor);
    }
    if let Some(policy) = &config.password_policy {
        builder = builder.with_password_policy(policy.clone());
    }
    if let Some(attributes) = &config.standard_attributes {
        builder = builder.with_standard_attributes(attributes.clone());
    }
    builder
}

fn client_spec(user_pool: &UserPoolHandle, config: &ClientConfig) -> UserPoolClientSpec {
    let mut builder = UserPoolClientSpec::builder(user_pool.user_pool_id());
    if let Some(auth_flows) = config.auth_flows {
        builder = builder.with_auth_flows(auth_flows);
    }
    builder.build()
}

fn group_spec(user_pool: &UserPoolHandle, key: &str, config: &GroupConfig) -> UserPoolGroupSpec {
    let mut builder = UserPoolGroupSpec::builder(user_pool.user_pool_id());
    if let Some(description) = present(key, "description", config.description.as_deref()) {
        builder = builder.with_description(description);
    }
    if let Some(group_name) = present(key, "groupName", config.group_name.as_deref()) {
        builder = builder.with_group_name(group_name);
    }
    match config.precedence {
        Some(0) => warn!("Group '{}': precedence 0 is treated as unset and omitted", key),
        Some(precedence) => builder = builder.with_precedence(precedence),
        None => {}
    }
    if let Some(role_arn) = present(key, "roleArn", config.role_arn.as_deref()) {
        builder = builder.with_role_arn(role_arn);
    }
    builder.build()
}

/// Drop empty strings, logging the omission.
fn present<'a>(key: &str, field: &str, value: Option<&'a str>) -> Option<&'a str> {
    match value {
        Some("") => {
            warn!("Group '{}': empty {} is omitted", key, field);
            None
        }
        other => other,
    }
}

fn non_empty<V>(map: &Option<BTreeMap<String, V>>) -> Option<&BTreeMap<String, V>> {
    map.as_ref().filter(|map| !map.is_empty())
}

fn child_id(id: &str, prefix: &str, key: &str) -> LogicalId {
    let component = format!("{prefix}{key}");
    LogicalId::from_path(&[id, component.as_str()])
}
