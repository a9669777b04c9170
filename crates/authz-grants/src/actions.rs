//! # Permitted Actions
//!
//! The administrator-configured allow-list of privilege actions that may be
//! granted explicitly. Tokens are matched case-insensitively but otherwise
//! literally: `ALL` and `*` are plain tokens, not wildcards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalize an action for comparison: trimmed and upper-cased.
///
/// # Example
///
/// ```
/// use authz_grants::actions::normalize_action;
///
/// assert_eq!(normalize_action(" select "), "SELECT");
/// assert_eq!(normalize_action("*"), "*");
/// ```
pub fn normalize_action(action: &str) -> String {
    action.trim().to_uppercase()
}

/// Set of normalized actions eligible for explicit grants.
///
/// An empty set means no restriction is configured.
///
/// # Example
///
/// ```
/// use authz_grants::actions::PermittedActions;
///
/// let permitted = PermittedActions::parse("all,*,select, insert");
/// assert_eq!(permitted.len(), 4);
/// assert!(permitted.permits("Select"));
/// assert!(!permitted.permits("create"));
///
/// assert!(PermittedActions::parse("").is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeSet<String>", into = "BTreeSet<String>")]
pub struct PermittedActions {
    actions: BTreeSet<String>,
}

impl PermittedActions {
    /// No restriction.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parse a comma-separated configuration value.
    ///
    /// Blank tokens are ignored, so an empty or whitespace-only value
    /// yields an unrestricted set.
    pub fn parse(value: &str) -> Self {
        value.split(',').collect()
    }

    /// Check if no restriction is configured.
    pub fn is_unrestricted(&self) -> bool {
        self.actions.is_empty()
    }

    /// Check if an already-normalized action is in the set.
    pub fn contains(&self, normalized: &str) -> bool {
        self.actions.contains(normalized)
    }

    /// Check if an action may be granted explicitly.
    ///
    /// Always true when unrestricted.
    pub fn permits(&self, action: &str) -> bool {
        self.is_unrestricted() || self.contains(&normalize_action(action))
    }

    /// Number of configured actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Same as [`PermittedActions::is_unrestricted`].
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over the normalized actions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PermittedActions {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let actions = iter
            .into_iter()
            .map(|a| normalize_action(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();
        Self { actions }
    }
}

impl From<BTreeSet<String>> for PermittedActions {
    fn from(actions: BTreeSet<String>) -> Self {
        actions.into_iter().collect()
    }
}

impl From<PermittedActions> for BTreeSet<String> {
    fn from(permitted: PermittedActions) -> Self {
        permitted.actions
    }
}
