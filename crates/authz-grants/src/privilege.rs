//! Requested privileges
//!
//! The checker only reads an action from each request, so anything that
//! exposes one can be checked: a full [`Privilege`], a `String`, or a `&str`.

use authz_resources::AuthorizableChain;
use serde::{Deserialize, Serialize};

/// A requested privilege exposing its action verb.
pub trait PrivilegeRequest {
    /// The action as supplied by the caller, e.g. `select`, `ALL`, `*`.
    fn action(&self) -> &str;
}

impl PrivilegeRequest for str {
    fn action(&self) -> &str {
        self
    }
}

impl PrivilegeRequest for String {
    fn action(&self) -> &str {
        self
    }
}

impl<T: PrivilegeRequest + ?Sized> PrivilegeRequest for &T {
    fn action(&self) -> &str {
        (**self).action()
    }
}

/// An explicit grant of one action on one target.
///
/// # Example
///
/// ```
/// use authz_grants::privilege::{Privilege, PrivilegeRequest};
///
/// let target = "db=sales->table=orders".parse().unwrap();
/// let privilege = Privilege::new(target, "select").with_grant_option(true);
///
/// assert_eq!(privilege.action(), "select");
/// assert!(privilege.grant_option);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Privilege {
    /// The resource path the action is granted on.
    pub target: AuthorizableChain,
    /// The action verb.
    pub action: String,
    /// Whether the grantee may grant the privilege onward.
    #[serde(default)]
    pub grant_option: bool,
}

impl Privilege {
    /// Create a privilege without grant option.
    pub fn new(target: AuthorizableChain, action: impl Into<String>) -> Self {
        Self {
            target,
            action: action.into(),
            grant_option: false,
        }
    }

    /// Set the grant option.
    pub fn with_grant_option(mut self, grant_option: bool) -> Self {
        self.grant_option = grant_option;
        self
    }
}

impl PrivilegeRequest for Privilege {
    fn action(&self) -> &str {
        &self.action
    }
}
