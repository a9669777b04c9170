//! # Resource Hierarchy
//!
//! Describes which kinds may be chained, in which order, and which kinds
//! stand alone. The parser consults a [`Hierarchy`] rather than a fixed
//! list so deployments can narrow or reorder the container path.

use serde::{Deserialize, Serialize};

use crate::kinds::AuthorizableKind;

/// Ordered container kinds plus the set of standalone kinds.
///
/// Container kinds are listed from least to most specific. A chained
/// authorizable must use container keys in strictly increasing position.
/// A kind listed as standalone is always parsed as standalone, even if it
/// also appears among the containers.
///
/// # Example
///
/// ```
/// use authz_resources::hierarchy::Hierarchy;
/// use authz_resources::kinds::AuthorizableKind;
///
/// let hierarchy = Hierarchy::default();
/// assert!(hierarchy.rank(AuthorizableKind::Database) < hierarchy.rank(AuthorizableKind::Table));
/// assert!(hierarchy.is_standalone(AuthorizableKind::Uri));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    containers: Vec<AuthorizableKind>,
    standalone: Vec<AuthorizableKind>,
}

impl Default for Hierarchy {
    /// Server → Database → Table → Column, with URIs standing alone.
    fn default() -> Self {
        Self {
            containers: vec![
                AuthorizableKind::Server,
                AuthorizableKind::Database,
                AuthorizableKind::Table,
                AuthorizableKind::Column,
            ],
            standalone: vec![AuthorizableKind::Uri],
        }
    }
}

impl Hierarchy {
    /// Create a hierarchy from explicit container order and standalone kinds.
    ///
    /// Repeated container kinds keep their first position.
    pub fn new(
        containers: impl IntoIterator<Item = AuthorizableKind>,
        standalone: impl IntoIterator<Item = AuthorizableKind>,
    ) -> Self {
        let mut ordered: Vec<AuthorizableKind> = Vec::new();
        for kind in containers {
            if !ordered.contains(&kind) {
                ordered.push(kind);
            }
        }
        Self {
            containers: ordered,
            standalone: standalone.into_iter().collect(),
        }
    }

    /// Position of a kind in the container order, if it is a container.
    pub fn rank(&self, kind: AuthorizableKind) -> Option<usize> {
        self.containers.iter().position(|k| *k == kind)
    }

    /// Check if the kind is parsed as a standalone authorizable.
    pub fn is_standalone(&self, kind: AuthorizableKind) -> bool {
        self.standalone.contains(&kind)
    }

    /// Container kinds, least specific first.
    pub fn containers(&self) -> &[AuthorizableKind] {
        &self.containers
    }

    /// Standalone kinds.
    pub fn standalone(&self) -> &[AuthorizableKind] {
        &self.standalone
    }
}
