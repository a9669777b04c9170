//! Grant validation configuration.
//!
//! Loads the explicit-grant allow-list from the process environment or from
//! any external key/value configuration source.

use authz_resources::Hierarchy;
use serde::{Deserialize, Serialize};

use crate::actions::PermittedActions;
use crate::checker::check_explicit_grants_permitted;
use crate::error::GrantDeniedError;
use crate::privilege::PrivilegeRequest;

/// Configuration key holding the comma-separated permitted actions.
pub const EXPLICIT_GRANTS_PERMITTED_KEY: &str = "authz.db.explicit.grants.permitted";

/// Environment variable holding the comma-separated permitted actions.
pub const EXPLICIT_GRANTS_PERMITTED_ENV: &str = "AUTHZ_DB_EXPLICIT_GRANTS_PERMITTED";

/// Configuration for the administrative grant path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantsConfig {
    /// Actions eligible for explicit grants. Empty means unrestricted.
    #[serde(default)]
    pub explicit_grants_permitted: PermittedActions,

    /// Resource hierarchy used to parse grant targets.
    #[serde(default)]
    pub hierarchy: Hierarchy,
}

impl GrantsConfig {
    /// Create a configuration with the given allow-list and the default hierarchy.
    pub fn new(explicit_grants_permitted: PermittedActions) -> Self {
        Self {
            explicit_grants_permitted,
            hierarchy: Hierarchy::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AUTHZ_DB_EXPLICIT_GRANTS_PERMITTED`: Comma-separated permitted actions
    ///   (default: unset, meaning unrestricted)
    pub fn from_env() -> Self {
        Self::from_lookup(|_| std::env::var(EXPLICIT_GRANTS_PERMITTED_ENV).ok())
    }

    /// Load configuration from an external key/value source.
    ///
    /// `lookup` is called with [`EXPLICIT_GRANTS_PERMITTED_KEY`]. An absent
    /// or blank value leaves explicit grants unrestricted.
    ///
    /// # Example
    ///
    /// ```
    /// use authz_grants::config::{GrantsConfig, EXPLICIT_GRANTS_PERMITTED_KEY};
    /// use std::collections::HashMap;
    ///
    /// let mut source = HashMap::new();
    /// source.insert(EXPLICIT_GRANTS_PERMITTED_KEY.to_string(), "select,insert".to_string());
    ///
    /// let config = GrantsConfig::from_lookup(|key| source.get(key).cloned());
    /// assert!(config.explicit_grants_permitted.permits("SELECT"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let permitted = lookup(EXPLICIT_GRANTS_PERMITTED_KEY)
            .map(|value| PermittedActions::parse(&value))
            .unwrap_or_default();

        Self::new(permitted)
    }

    /// Use a custom resource hierarchy.
    pub fn with_hierarchy(mut self, hierarchy: Hierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    /// Check requested privileges against this configuration's allow-list.
    pub fn check_explicit_grants<I>(&self, requested: I) -> Result<(), GrantDeniedError>
    where
        I: IntoIterator,
        I::Item: PrivilegeRequest,
    {
        check_explicit_grants_permitted(&self.explicit_grants_permitted, requested)
    }
}
