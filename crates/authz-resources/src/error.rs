//! Error types for authorizable parsing
//!
//! A parse failure always names the top-level fragment that was rejected,
//! verbatim, so an administrator can see exactly which clause of the input
//! was malformed.

use thiserror::Error;

use crate::kinds::AuthorizableKind;

/// Reasons a single authorizable fragment can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A component has no `=` between key and value
    #[error("component `{0}` is not of the form key=value")]
    MissingSeparator(String),

    /// A component has a key but nothing after the `=`
    #[error("component `{0}` has an empty value")]
    EmptyValue(String),

    /// The key is not a known authorizable kind
    #[error("unknown authorizable key `{0}`")]
    UnknownKey(String),

    /// The key is known but cannot appear in a chained authorizable
    #[error("key `{0}` cannot be part of a resource chain")]
    NotInHierarchy(AuthorizableKind),

    /// The key appears more than once in the same chain
    #[error("key `{0}` is repeated")]
    DuplicateKey(AuthorizableKind),

    /// The key is less specific than the key before it
    #[error("key `{key}` cannot follow `{after}`")]
    OutOfOrder {
        /// The offending key.
        key: AuthorizableKind,
        /// The key it was placed after.
        after: AuthorizableKind,
    },
}

impl ParseErrorKind {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingSeparator(_) => "MISSING_SEPARATOR",
            ParseErrorKind::EmptyValue(_) => "EMPTY_VALUE",
            ParseErrorKind::UnknownKey(_) => "UNKNOWN_KEY",
            ParseErrorKind::NotInHierarchy(_) => "NOT_IN_HIERARCHY",
            ParseErrorKind::DuplicateKey(_) => "DUPLICATE_KEY",
            ParseErrorKind::OutOfOrder { .. } => "OUT_OF_ORDER",
        }
    }
}

/// A malformed authorizable specification.
///
/// The display message embeds the offending fragment verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid authorizable `{fragment}`: {kind}")]
pub struct ParseError {
    /// The trimmed top-level fragment that was rejected.
    pub fragment: String,
    /// Why the fragment was rejected.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create a parse error for a fragment.
    pub fn new(fragment: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            fragment: fragment.into(),
            kind,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
