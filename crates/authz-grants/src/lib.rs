//! # Explicit Grant Validation
//!
//! This crate provides the checks the authorization service runs on an
//! administrative grant request before anything is persisted.
//!
//! ## Overview
//!
//! The authz-grants crate handles:
//! - **Permitted actions**: The configured allow-list of actions that may be
//!   granted explicitly (empty means unrestricted)
//! - **Checking**: Rejecting requests that name actions outside the list
//! - **Configuration**: Loading the allow-list from the environment or an
//!   external key/value source
//! - **Admin validation**: Parsing a grant target and checking its actions
//!   in one call
//!
//! ## Matching
//!
//! Actions are compared case-insensitively but literally. `ALL` and `*` are
//! ordinary tokens: configuring `*` does not permit `SELECT`.
//!
//! ## Usage
//!
//! ```rust
//! use authz_grants::{check_explicit_grants_permitted, PermittedActions};
//!
//! let permitted = PermittedActions::parse("all,*,select,insert");
//!
//! let err = check_explicit_grants_permitted(&permitted, ["select", "create", "all"]).unwrap_err();
//! assert!(err.to_string().contains("CREATE"));
//! assert!(!err.to_string().contains("SELECT"));
//! ```
//!
//! ## Integration with authz-resources
//!
//! [`validate_grant_request`] parses the target with `authz-resources` using
//! the hierarchy from [`GrantsConfig`], then checks the actions.

pub mod actions;
pub mod admin;
pub mod checker;
pub mod config;
pub mod error;
pub mod privilege;

// Re-export main types
pub use actions::{normalize_action, PermittedActions};
pub use admin::validate_grant_request;
pub use checker::check_explicit_grants_permitted;
pub use config::{GrantsConfig, EXPLICIT_GRANTS_PERMITTED_ENV, EXPLICIT_GRANTS_PERMITTED_KEY};
pub use error::{AdminError, AdminResult, GrantDeniedError};
pub use privilege::{Privilege, PrivilegeRequest};
