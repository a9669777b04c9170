//! End-to-end tests for the administrative grant path.
//!
//! These tests drive the parser and the explicit grant check together the
//! way a grant handler would: parse the target string, build privileges,
//! and check them against configuration.

use authz_grants::{
    check_explicit_grants_permitted, validate_grant_request, AdminError, GrantsConfig,
    PermittedActions, Privilege, EXPLICIT_GRANTS_PERMITTED_KEY,
};
use authz_resources::{parse_authorizables, AuthorizableKind};
use std::collections::{HashMap, HashSet};

/// Build a configuration from a key/value source.
fn config_with(permitted: Option<&str>) -> GrantsConfig {
    let mut source = HashMap::new();
    if let Some(value) = permitted {
        source.insert(EXPLICIT_GRANTS_PERMITTED_KEY.to_string(), value.to_string());
    }
    GrantsConfig::from_lookup(|key| source.get(key).cloned())
}

/// Privileges on one server for each action.
fn server_privileges(actions: &[&str]) -> HashSet<Privilege> {
    actions
        .iter()
        .map(|a| Privilege::new("server=server1".parse().unwrap(), *a))
        .collect()
}

#[test]
fn test_check_permitted_db_grants() {
    let config = config_with(None);
    assert!(config.check_explicit_grants(&HashSet::<Privilege>::new()).is_ok());

    let config = config_with(Some("all,*,select,insert"));
    assert!(config
        .check_explicit_grants(&server_privileges(&["select", "insert", "all", "*"]))
        .is_ok());

    let err = config
        .check_explicit_grants(&server_privileges(&["select", "create", "all"]))
        .unwrap_err();
    assert!(err.to_string().contains("CREATE"));
    assert!(!err.to_string().contains("SELECT"));
    assert!(!err.to_string().contains("ALL"));

    let config = config_with(Some("select,insert,create"));
    let err = config
        .check_explicit_grants(&server_privileges(&["alter", "create", "drop"]))
        .unwrap_err();
    assert!(err.to_string().contains("ALTER"));
    assert!(err.to_string().contains("DROP"));
    assert!(!err.to_string().contains("CREATE"));
}

#[test]
fn test_parse_authorizables_scenarios() {
    assert_eq!(
        parse_authorizables("db=db1->table=tb1,db=db1->table=tbl2")
            .unwrap()
            .len(),
        2
    );
    assert_eq!(parse_authorizables("uri=/path/for/test").unwrap().len(), 1);
    assert_eq!(
        parse_authorizables("db=db1->table=tb1,db=db1->table=tbl2,uri=/path/for/test")
            .unwrap()
            .len(),
        3
    );
    assert_eq!(
        parse_authorizables("db=db1->table=tb1 , db=db1->table=tbl2 , uri=/path/for/test")
            .unwrap()
            .len(),
        3
    );
    assert_eq!(
        parse_authorizables("db=db1->table=tb1,,,db=db1->table=tbl2")
            .unwrap()
            .len(),
        2
    );

    let failures = [
        ("db=db1->table=,db=db1->table=tbl1", "db=db1->table="),
        ("db=db1->table,db=db1->table=tbl1", "db=db1->table"),
        ("db=db1->table=tbl1,d=db1->table=tbl2", "d=db1->table=tbl2"),
        (
            "db=db1->table=tbl1,db=db1->table=tbl2db=db1->table=tbl3",
            "db=db1->table=tbl2db=db1->table=tbl3",
        ),
    ];
    for (input, fragment) in failures {
        let err = parse_authorizables(input).unwrap_err();
        assert_eq!(err.fragment, fragment, "input: {input}");
        assert!(err.to_string().contains(fragment), "input: {input}");
    }
}

#[test]
fn test_grant_handler_flow() {
    let config = config_with(Some("select,insert"));

    let targets = parse_authorizables("db=sales->table=orders,uri=s3://bucket/raw").unwrap();
    let requested: Vec<Privilege> = targets
        .iter()
        .map(|t| Privilege::new(t.clone(), "Select"))
        .collect();
    assert!(config.check_explicit_grants(&requested).is_ok());

    let privileges =
        validate_grant_request(&config, "db=sales->table=orders,uri=s3://bucket/raw", &["select"])
            .unwrap();
    assert_eq!(privileges.len(), 2);
    assert!(privileges
        .iter()
        .any(|p| p.target.get(AuthorizableKind::Uri) == Some("s3://bucket/raw")));
}

#[test]
fn test_admin_errors_surface_messages() {
    let config = config_with(Some("select"));

    let err = validate_grant_request(&config, "db=db1->table=", &["select"]).unwrap_err();
    assert!(matches!(err, AdminError::InvalidAuthorizable(_)));
    assert!(err.to_string().contains("db=db1->table="));

    let err = validate_grant_request(&config, "db=db1", &["select", "insert"]).unwrap_err();
    assert!(matches!(err, AdminError::GrantDenied(_)));
    assert_eq!(err.to_string(), "GRANT privilege for INSERT not permitted.");
}

#[tokio::test]
async fn test_concurrent_checks_are_independent() {
    let permitted = PermittedActions::parse("select,insert");

    let mut handles = Vec::new();
    for i in 0..16 {
        let permitted = permitted.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let input = format!("db=db{i}->table=t{i},uri=/data/{i}");
            let chains = parse_authorizables(&input).map(|c| c.len());
            let allowed = check_explicit_grants_permitted(&permitted, ["select"]).is_ok();
            let denied = check_explicit_grants_permitted(&permitted, ["drop"]).is_err();
            (chains, allowed, denied)
        }));
    }

    for handle in handles {
        let (chains, allowed, denied) = handle.await.unwrap();
        assert_eq!(chains.unwrap(), 2);
        assert!(allowed);
        assert!(denied);
    }
}
