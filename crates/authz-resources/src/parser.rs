//! # Authorizable Parser
//!
//! Turns a compact authorizable specification into a set of chains.
//!
//! ```text
//! input      = fragment *( "," fragment )
//! fragment   = standalone / chain          ; blank fragments are skipped
//! standalone = standalone-key "=" literal  ; literal may contain "=" or "->"
//! chain      = component *( "->" component )
//! component  = container-key "=" value     ; value non-empty
//! ```
//!
//! Container keys within one chain must follow the [`Hierarchy`] order
//! without repeats.

use std::collections::HashSet;
use tracing::debug;

use crate::authorizable::{Authorizable, AuthorizableChain};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::hierarchy::Hierarchy;
use crate::kinds::AuthorizableKind;

/// Separates top-level fragments.
pub const FRAGMENT_SEPARATOR: char = ',';

/// Separates components of a chained fragment.
pub const CHAIN_SEPARATOR: &str = "->";

/// Separates a key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Parse an authorizable specification against the default hierarchy.
///
/// # Arguments
///
/// * `input` - Comma-separated fragments, e.g. `db=db1->table=tbl1,uri=/data`
///
/// # Returns
///
/// The set of parsed chains, or a [`ParseError`] naming the first rejected
/// fragment verbatim. No partial result is returned.
///
/// # Example
///
/// ```
/// use authz_resources::parse_authorizables;
///
/// let chains = parse_authorizables("db=db1->table=tb1 , ,uri=/path/for/test").unwrap();
/// assert_eq!(chains.len(), 2);
///
/// let err = parse_authorizables("db=db1->table=tbl1,d=db1->table=tbl2").unwrap_err();
/// assert!(err.to_string().contains("d=db1->table=tbl2"));
/// ```
pub fn parse_authorizables(input: &str) -> ParseResult<HashSet<AuthorizableChain>> {
    parse_authorizables_with(input, &Hierarchy::default())
}

/// Parse an authorizable specification against a custom hierarchy.
pub fn parse_authorizables_with(
    input: &str,
    hierarchy: &Hierarchy,
) -> ParseResult<HashSet<AuthorizableChain>> {
    let mut chains = HashSet::new();

    for fragment in input
        .split(FRAGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|f| !f.is_empty())
    {
        chains.insert(parse_chain(fragment, hierarchy)?);
    }

    debug!(chains = chains.len(), "Parsed authorizables");
    Ok(chains)
}

/// Parse one top-level fragment into a chain.
pub(crate) fn parse_chain(fragment: &str, hierarchy: &Hierarchy) -> ParseResult<AuthorizableChain> {
    let fragment = fragment.trim();
    parse_fragment(fragment, hierarchy).map_err(|kind| {
        debug!(fragment = %fragment, reason = %kind, "Rejected authorizable fragment");
        ParseError::new(fragment, kind)
    })
}

fn parse_fragment(
    fragment: &str,
    hierarchy: &Hierarchy,
) -> Result<AuthorizableChain, ParseErrorKind> {
    if let Some(node) = parse_standalone(fragment, hierarchy)? {
        return Ok(AuthorizableChain::single(node));
    }

    let mut nodes: Vec<Authorizable> = Vec::new();
    let mut last_rank: Option<usize> = None;

    for component in fragment.split(CHAIN_SEPARATOR).map(str::trim) {
        let node = parse_component(component)?;
        let kind = node.kind();

        if nodes.iter().any(|n| n.kind() == kind) {
            return Err(ParseErrorKind::DuplicateKey(kind));
        }

        let rank = hierarchy
            .rank(kind)
            .ok_or(ParseErrorKind::NotInHierarchy(kind))?;

        if let (Some(previous), Some(prev_node)) = (last_rank, nodes.last()) {
            if rank <= previous {
                return Err(ParseErrorKind::OutOfOrder {
                    key: kind,
                    after: prev_node.kind(),
                });
            }
        }

        last_rank = Some(rank);
        nodes.push(node);
    }

    // split always yields at least one component
    AuthorizableChain::from_nodes(nodes)
        .ok_or_else(|| ParseErrorKind::MissingSeparator(fragment.to_string()))
}

/// A standalone fragment keeps everything after the first `=` as its value.
fn parse_standalone(
    fragment: &str,
    hierarchy: &Hierarchy,
) -> Result<Option<Authorizable>, ParseErrorKind> {
    let Some((key, value)) = fragment.split_once(KEY_VALUE_SEPARATOR) else {
        return Ok(None);
    };

    match AuthorizableKind::parse(key.trim()) {
        Some(kind) if hierarchy.is_standalone(kind) => Authorizable::new(kind, value.trim())
            .map(Some)
            .ok_or_else(|| ParseErrorKind::EmptyValue(fragment.to_string())),
        _ => Ok(None),
    }
}

fn parse_component(component: &str) -> Result<Authorizable, ParseErrorKind> {
    let (key, value) = component
        .split_once(KEY_VALUE_SEPARATOR)
        .ok_or_else(|| ParseErrorKind::MissingSeparator(component.to_string()))?;

    let key = key.trim();
    let kind =
        AuthorizableKind::parse(key).ok_or_else(|| ParseErrorKind::UnknownKey(key.to_string()))?;

    Authorizable::new(kind, value.trim())
        .ok_or_else(|| ParseErrorKind::EmptyValue(component.to_string()))
}
