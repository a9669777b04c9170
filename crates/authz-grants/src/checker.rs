//! Explicit grant check
//!
//! Validates requested actions against the configured allow-list before a
//! grant is persisted.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::actions::{normalize_action, PermittedActions};
use crate::error::GrantDeniedError;
use crate::privilege::PrivilegeRequest;

/// Check that every requested action may be granted explicitly.
///
/// An empty `permitted` set means no restriction and always succeeds.
/// Otherwise each requested action is normalized and compared literally
/// against the set.
///
/// # Arguments
///
/// * `permitted` - The configured allow-list
/// * `requested` - Requested privileges, or bare action strings
///
/// # Returns
///
/// `Ok(())` if all actions are permitted, otherwise a [`GrantDeniedError`]
/// naming only the disallowed actions
///
/// # Example
///
/// ```
/// use authz_grants::{check_explicit_grants_permitted, PermittedActions};
///
/// let permitted = PermittedActions::parse("all,*,select,insert");
/// assert!(check_explicit_grants_permitted(&permitted, ["select", "ALL"]).is_ok());
///
/// let err = check_explicit_grants_permitted(&permitted, ["select", "create", "all"]).unwrap_err();
/// assert_eq!(err.to_string(), "GRANT privilege for CREATE not permitted.");
/// ```
pub fn check_explicit_grants_permitted<I>(
    permitted: &PermittedActions,
    requested: I,
) -> Result<(), GrantDeniedError>
where
    I: IntoIterator,
    I::Item: PrivilegeRequest,
{
    if permitted.is_unrestricted() {
        debug!("No explicit grant restriction configured");
        return Ok(());
    }

    let denied: BTreeSet<String> = requested
        .into_iter()
        .map(|p| normalize_action(p.action()))
        .filter(|action| !permitted.contains(action))
        .collect();

    if denied.is_empty() {
        return Ok(());
    }

    let err = GrantDeniedError::new(denied);
    warn!(denied = %err.actions().join(","), "Explicit grant denied");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privilege::Privilege;
    use std::collections::HashSet;

    fn privileges(actions: &[&str]) -> HashSet<Privilege> {
        actions
            .iter()
            .map(|a| Privilege::new("server=server1".parse().unwrap(), *a))
            .collect()
    }

    #[test]
    fn test_unrestricted_allows_anything() {
        let permitted = PermittedActions::unrestricted();
        assert!(check_explicit_grants_permitted(&permitted, &privileges(&[])).is_ok());
        assert!(
            check_explicit_grants_permitted(&permitted, &privileges(&["create", "drop", "*"]))
                .is_ok()
        );
    }

    #[test]
    fn test_all_permitted() {
        let permitted = PermittedActions::parse("all,*,select,insert");
        let requested = privileges(&["select", "insert", "all", "*"]);
        assert!(check_explicit_grants_permitted(&permitted, &requested).is_ok());
    }

    #[test]
    fn test_denial_names_only_disallowed() {
        let permitted = PermittedActions::parse("all,*,select,insert");
        let requested = privileges(&["select", "create", "all"]);

        let err = check_explicit_grants_permitted(&permitted, &requested).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("CREATE"));
        assert!(!message.contains("SELECT"));
        assert!(!message.contains("ALL"));
        assert_eq!(err.actions(), &["CREATE".to_string()]);
    }

    #[test]
    fn test_denial_lists_all_disallowed_sorted() {
        let permitted = PermittedActions::parse("select,insert,create");
        let requested = privileges(&["drop", "create", "alter"]);

        let err = check_explicit_grants_permitted(&permitted, &requested).unwrap_err();
        assert_eq!(err.actions(), &["ALTER".to_string(), "DROP".to_string()]);
        assert!(!err.to_string().contains("CREATE"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let permitted = PermittedActions::parse("select");
        assert!(check_explicit_grants_permitted(&permitted, ["SELECT"]).is_ok());
        assert!(check_explicit_grants_permitted(&permitted, ["Select"]).is_ok());
    }

    #[test]
    fn test_duplicate_requests_collapse_in_message() {
        let permitted = PermittedActions::parse("select");
        let err =
            check_explicit_grants_permitted(&permitted, ["drop", "DROP", " Drop "]).unwrap_err();
        assert_eq!(err.to_string(), "GRANT privilege for DROP not permitted.");
    }

    #[test]
    fn test_star_does_not_expand() {
        let permitted = PermittedActions::parse("*");
        assert!(check_explicit_grants_permitted(&permitted, ["select"]).is_err());
        assert!(check_explicit_grants_permitted(&permitted, ["*"]).is_ok());
    }
}
