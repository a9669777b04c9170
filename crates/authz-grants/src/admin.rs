//! Administrative grant request validation.
//!
//! Runs the full pre-persistence check of a grant request: parse the target
//! specification, then check the requested actions against configuration.
//! Nothing is returned unless both steps pass.

use authz_resources::parse_authorizables_with;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::actions::normalize_action;
use crate::config::GrantsConfig;
use crate::error::{AdminError, AdminResult};
use crate::privilege::Privilege;

/// Validate a grant request and expand it into individual privileges.
///
/// # Arguments
///
/// * `config` - Grant path configuration
/// * `authorizables` - Target specification, e.g. `db=db1->table=t1,uri=/data`
/// * `actions` - Requested action verbs
///
/// # Returns
///
/// One [`Privilege`] per target and distinct normalized action, ordered by
/// target text then action. Fails with the parse error first, then with the
/// grant denial, so a malformed target is reported even if its actions
/// would also be denied.
///
/// # Example
///
/// ```
/// use authz_grants::{validate_grant_request, GrantsConfig, PermittedActions};
///
/// let config = GrantsConfig::new(PermittedActions::parse("select,insert"));
/// let privileges =
///     validate_grant_request(&config, "db=db1->table=t1,uri=/data", &["select", "INSERT"]).unwrap();
/// assert_eq!(privileges.len(), 4);
///
/// let err = validate_grant_request(&config, "db=db1", &["drop"]).unwrap_err();
/// assert_eq!(err.status_code(), 403);
/// ```
#[instrument(skip(config, actions), fields(action_count = actions.len()))]
pub fn validate_grant_request(
    config: &GrantsConfig,
    authorizables: &str,
    actions: &[&str],
) -> AdminResult<Vec<Privilege>> {
    let targets = parse_authorizables_with(authorizables, &config.hierarchy)?;
    if targets.is_empty() {
        return Err(AdminError::NoTarget);
    }

    let actions: BTreeSet<String> = actions
        .iter()
        .map(|a| normalize_action(a))
        .filter(|a| !a.is_empty())
        .collect();
    if actions.is_empty() {
        return Err(AdminError::NoActions);
    }

    config.check_explicit_grants(&actions)?;

    let mut targets: Vec<_> = targets.into_iter().collect();
    targets.sort_by_cached_key(|t| t.to_string());

    let privileges: Vec<Privilege> = targets
        .iter()
        .flat_map(|target| {
            actions
                .iter()
                .map(move |action| Privilege::new(target.clone(), action.clone()))
        })
        .collect();

    debug!(privileges = privileges.len(), "Validated grant request");
    Ok(privileges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PermittedActions;
    use authz_resources::{AuthorizableKind, Hierarchy, ParseErrorKind};

    #[test]
    fn test_expands_targets_and_actions() {
        let config = GrantsConfig::default();
        let privileges =
            validate_grant_request(&config, "uri=/b,db=db1->table=t1", &["select", "insert"])
                .unwrap();

        let rendered: Vec<String> = privileges
            .iter()
            .map(|p| format!("{}:{}", p.target, p.action))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "db=db1->table=t1:INSERT",
                "db=db1->table=t1:SELECT",
                "uri=/b:INSERT",
                "uri=/b:SELECT",
            ]
        );
    }

    #[test]
    fn test_duplicate_actions_collapse() {
        let config = GrantsConfig::default();
        let privileges = validate_grant_request(&config, "db=db1", &["select", "SELECT"]).unwrap();
        assert_eq!(privileges.len(), 1);
    }

    #[test]
    fn test_parse_error_takes_precedence() {
        let config = GrantsConfig::new(PermittedActions::parse("select"));
        let err = validate_grant_request(&config, "d=db1", &["drop"]).unwrap_err();

        match err {
            AdminError::InvalidAuthorizable(parse) => {
                assert_eq!(parse.fragment, "d=db1");
                assert_eq!(parse.kind, ParseErrorKind::UnknownKey("d".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_denied_actions() {
        let config = GrantsConfig::new(PermittedActions::parse("select"));
        let err = validate_grant_request(&config, "db=db1", &["select", "drop"]).unwrap_err();

        assert_eq!(err.error_code(), "GRANT_DENIED");
        assert!(err.to_string().contains("DROP"));
        assert!(!err.to_string().contains("SELECT"));
    }

    #[test]
    fn test_empty_target_and_actions() {
        let config = GrantsConfig::default();
        assert!(matches!(
            validate_grant_request(&config, " , ", &["select"]),
            Err(AdminError::NoTarget)
        ));
        assert!(matches!(
            validate_grant_request(&config, "db=db1", &[" "]),
            Err(AdminError::NoActions)
        ));
    }

    #[test]
    fn test_uses_configured_hierarchy() {
        let config = GrantsConfig::default().with_hierarchy(Hierarchy::new(
            [AuthorizableKind::Database, AuthorizableKind::Table],
            [],
        ));
        let err = validate_grant_request(&config, "server=s1", &["select"]).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
