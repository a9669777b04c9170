//! # Authorizable Resources
//!
//! This crate provides the resource model used by the authorization
//! service's administrative grant path, and the parser for the compact
//! authorizable syntax administrators use to name grant targets.
//!
//! ## Overview
//!
//! The authz-resources crate handles:
//! - **Kinds**: Server, Database, Table, Column and URI resources
//! - **Authorizables**: Typed `(kind, value)` nodes
//! - **Chains**: Ordered paths of nodes naming one grant target
//! - **Hierarchy**: Which kinds chain, in which order, and which stand alone
//! - **Parsing**: Compact specification → set of chains
//!
//! ## Syntax
//!
//! ```text
//! db=db1->table=tbl1,db=db1->table=tbl2,uri=hdfs:///data
//! ```
//!
//! - `,` separates grant targets; blank entries are ignored
//! - `->` separates components of a chained target
//! - `uri=...` is standalone; everything after the `=` is the value
//!
//! ## Usage
//!
//! ```rust
//! use authz_resources::{parse_authorizables, AuthorizableKind};
//!
//! let chains = parse_authorizables("db=db1->table=tb1,uri=/path/for/test").unwrap();
//! assert_eq!(chains.len(), 2);
//!
//! let table = chains
//!     .iter()
//!     .find(|c| c.leaf().kind() == AuthorizableKind::Table)
//!     .unwrap();
//! assert_eq!(table.get(AuthorizableKind::Database), Some("db1"));
//! ```
//!
//! ## Errors
//!
//! A malformed fragment fails the whole call. The [`ParseError`] names the
//! rejected fragment verbatim so run-together fragments (a missing comma)
//! are easy to spot.

pub mod authorizable;
pub mod error;
pub mod hierarchy;
pub mod kinds;
pub mod parser;

// Re-export main types for convenience
pub use authorizable::{flatten_nodes, Authorizable, AuthorizableChain};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use hierarchy::Hierarchy;
pub use kinds::AuthorizableKind;
pub use parser::{parse_authorizables, parse_authorizables_with};
