//! # Authorizables
//!
//! Typed resource nodes and the ordered chains that identify one grant target.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::hierarchy::Hierarchy;
use crate::kinds::AuthorizableKind;
use crate::parser;

/// One typed resource node, e.g. `table=sales`.
///
/// The value is never empty; [`Authorizable::new`] refuses to build one.
///
/// # Example
///
/// ```
/// use authz_resources::authorizable::Authorizable;
/// use authz_resources::kinds::AuthorizableKind;
///
/// let node = Authorizable::new(AuthorizableKind::Table, "sales").unwrap();
/// assert_eq!(node.to_string(), "table=sales");
///
/// assert!(Authorizable::new(AuthorizableKind::Table, "").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "AuthorizableRepr")]
pub struct Authorizable {
    kind: AuthorizableKind,
    value: String,
}

#[derive(Deserialize)]
struct AuthorizableRepr {
    kind: AuthorizableKind,
    value: String,
}

impl TryFrom<AuthorizableRepr> for Authorizable {
    type Error = String;

    fn try_from(repr: AuthorizableRepr) -> Result<Self, Self::Error> {
        Authorizable::new(repr.kind, repr.value)
            .ok_or_else(|| format!("{} authorizable has an empty value", repr.kind))
    }
}

impl Authorizable {
    /// Create a node, or `None` if `value` is empty.
    pub fn new(kind: AuthorizableKind, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        Some(Self { kind, value })
    }

    /// The node's kind.
    pub fn kind(&self) -> AuthorizableKind {
        self.kind
    }

    /// The node's value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Authorizable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}

/// An ordered, non-empty path of authorizables naming one grant target.
///
/// Chains come from one comma-delimited fragment of an authorizable
/// specification, such as `db=db1->table=tbl1` or `uri=hdfs:///data`.
/// Equality is structural, so identical chains collapse in a set.
///
/// # Example
///
/// ```
/// use authz_resources::authorizable::AuthorizableChain;
/// use authz_resources::kinds::AuthorizableKind;
///
/// let chain: AuthorizableChain = "db=db1->table=tbl1".parse().unwrap();
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.get(AuthorizableKind::Database), Some("db1"));
/// assert_eq!(chain.leaf().kind(), AuthorizableKind::Table);
/// assert_eq!(chain.to_string(), "db=db1->table=tbl1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Authorizable>", into = "Vec<Authorizable>")]
pub struct AuthorizableChain {
    nodes: Vec<Authorizable>,
}

impl AuthorizableChain {
    /// Build a chain from nodes, or `None` if there are none.
    ///
    /// Ordering is not checked here; use the parser for validated input.
    pub fn from_nodes(nodes: Vec<Authorizable>) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        Some(Self { nodes })
    }

    /// A chain of exactly one node.
    pub fn single(node: Authorizable) -> Self {
        Self { nodes: vec![node] }
    }

    /// Nodes from least to most specific.
    pub fn nodes(&self) -> &[Authorizable] {
        &self.nodes
    }

    /// The most specific node.
    pub fn leaf(&self) -> &Authorizable {
        // from_nodes and single guarantee at least one node
        &self.nodes[self.nodes.len() - 1]
    }

    /// Value of the node of the given kind, if present.
    pub fn get(&self, kind: AuthorizableKind) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.kind() == kind)
            .map(|n| n.value())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; chains are never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Authorizable> {
        self.nodes.iter()
    }
}

impl TryFrom<Vec<Authorizable>> for AuthorizableChain {
    type Error = &'static str;

    fn try_from(nodes: Vec<Authorizable>) -> Result<Self, Self::Error> {
        AuthorizableChain::from_nodes(nodes).ok_or("authorizable chain is empty")
    }
}

impl From<AuthorizableChain> for Vec<Authorizable> {
    fn from(chain: AuthorizableChain) -> Self {
        chain.nodes
    }
}

impl fmt::Display for AuthorizableChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(parser::CHAIN_SEPARATOR)?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

impl FromStr for AuthorizableChain {
    type Err = ParseError;

    /// Parse a single fragment against the default hierarchy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_chain(s, &Hierarchy::default())
    }
}

/// Union of all nodes across a set of chains.
///
/// Structurally identical nodes shared by several chains appear once.
///
/// # Example
///
/// ```
/// use authz_resources::{flatten_nodes, parse_authorizables};
///
/// let chains = parse_authorizables("db=db1->table=tb1,db=db1->table=tbl2").unwrap();
/// assert_eq!(chains.len(), 2);
/// assert_eq!(flatten_nodes(&chains).len(), 3);
/// ```
pub fn flatten_nodes<'a, I>(chains: I) -> HashSet<Authorizable>
where
    I: IntoIterator<Item = &'a AuthorizableChain>,
{
    chains
        .into_iter()
        .flat_map(|chain| chain.iter().cloned())
        .collect()
}
