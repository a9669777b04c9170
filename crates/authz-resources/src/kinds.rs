//! # Authorizable Kinds
//!
//! Defines the closed set of resource kinds that can appear in a grant target.
//! Kinds are either containers in the server/database/table/column hierarchy
//! or standalone resources such as URIs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of resources that privileges can be granted on.
///
/// - **Container kinds**: Server, Database, Table, Column (ordered from the
///   least to the most specific)
/// - **Standalone kinds**: Uri
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizableKind {
    /// A server instance.
    Server,
    /// A database within a server.
    Database,
    /// A table within a database.
    Table,
    /// A column within a table.
    Column,
    /// A storage location identified by URI.
    Uri,
}

impl AuthorizableKind {
    /// Get the canonical key used in the authorizable grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorizableKind::Server => "server",
            AuthorizableKind::Database => "db",
            AuthorizableKind::Table => "table",
            AuthorizableKind::Column => "column",
            AuthorizableKind::Uri => "uri",
        }
    }

    /// Parse a kind from its grammar key.
    ///
    /// # Arguments
    ///
    /// * `s` - Key to parse (case-insensitive, accepts `database` as an alias of `db`)
    ///
    /// # Returns
    ///
    /// `Some(AuthorizableKind)` if the key is recognized, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use authz_resources::kinds::AuthorizableKind;
    ///
    /// assert_eq!(AuthorizableKind::parse("db"), Some(AuthorizableKind::Database));
    /// assert_eq!(AuthorizableKind::parse("DATABASE"), Some(AuthorizableKind::Database));
    /// assert_eq!(AuthorizableKind::parse("d"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "server" => Some(AuthorizableKind::Server),
            "db" | "database" => Some(AuthorizableKind::Database),
            "table" => Some(AuthorizableKind::Table),
            "column" => Some(AuthorizableKind::Column),
            "uri" => Some(AuthorizableKind::Uri),
            _ => None,
        }
    }

    /// Get all kinds.
    pub fn all() -> Vec<Self> {
        vec![
            AuthorizableKind::Server,
            AuthorizableKind::Database,
            AuthorizableKind::Table,
            AuthorizableKind::Column,
            AuthorizableKind::Uri,
        ]
    }

    /// Check if this kind is part of the container hierarchy.
    pub fn is_container(&self) -> bool {
        !matches!(self, AuthorizableKind::Uri)
    }
}

impl fmt::Display for AuthorizableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
