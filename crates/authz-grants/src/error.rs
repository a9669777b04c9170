//! Error types for grant validation
//!
//! This module defines the errors an administrative grant request can
//! fail with before anything is persisted.

use authz_resources::ParseError;
use thiserror::Error;

/// One or more requested actions are not eligible for explicit grants.
///
/// The message lists exactly the disallowed actions, upper-cased and in
/// ascending order. Permitted actions from the same request never appear.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("GRANT privilege for {} not permitted.", .actions.join(", "))]
pub struct GrantDeniedError {
    actions: Vec<String>,
}

impl GrantDeniedError {
    /// Create a denial for the given normalized actions.
    pub fn new<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut actions: Vec<String> = actions.into_iter().collect();
        actions.sort();
        actions.dedup();
        Self { actions }
    }

    /// The disallowed actions, sorted and deduplicated.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

/// Administrative grant request errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The grant target specification is malformed
    #[error(transparent)]
    InvalidAuthorizable(#[from] ParseError),

    /// A requested action is not permitted for explicit grants
    #[error(transparent)]
    GrantDenied(#[from] GrantDeniedError),

    /// The target specification named no resources
    #[error("Grant request names no authorizable")]
    NoTarget,

    /// The request carries no actions
    #[error("Grant request names no actions")]
    NoActions,
}

/// Result type for administrative grant validation.
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AdminError::InvalidAuthorizable(_) | AdminError::NoTarget | AdminError::NoActions => {
                400
            }
            AdminError::GrantDenied(_) => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::InvalidAuthorizable(_) => "INVALID_AUTHORIZABLE",
            AdminError::GrantDenied(_) => "GRANT_DENIED",
            AdminError::NoTarget => "NO_TARGET",
            AdminError::NoActions => "NO_ACTIONS",
        }
    }
}
