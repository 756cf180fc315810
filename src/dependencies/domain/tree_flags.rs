use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Flag carried by dependencies that were located during evaluation
pub const RESOLVED_REFERENCE: &str = "ResolvedReference";
/// Flag carried by dependencies that could not be located
pub const BROKEN_REFERENCE: &str = "BrokenReference";
pub const GENERIC_RESOLVED_DEPENDENCY: &str = "GenericResolvedDependency";
pub const GENERIC_UNRESOLVED_DEPENDENCY: &str = "GenericUnresolvedDependency";

/// TreeFlags - an opaque, ordered set of capability tags
///
/// Renderers use the tags to group and decorate tree nodes; this crate only
/// treats them as set members. Set operations return new values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeFlags(BTreeSet<String>);

impl TreeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags every resolved dependency carries
    pub fn resolved() -> Self {
        Self::from_iter([RESOLVED_REFERENCE, GENERIC_RESOLVED_DEPENDENCY])
    }

    /// Flags every unresolved dependency carries
    pub fn unresolved() -> Self {
        Self::from_iter([BROKEN_REFERENCE, GENERIC_UNRESOLVED_DEPENDENCY])
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Returns true if every flag of `other` is present
    pub fn contains_all(&self, other: &TreeFlags) -> bool {
        other.0.is_subset(&self.0)
    }

    /// Returns true if any flag of `other` is present
    pub fn contains_any(&self, other: &TreeFlags) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &TreeFlags) -> TreeFlags {
        TreeFlags(self.0.union(&other.0).cloned().collect())
    }

    pub fn except(&self, other: &TreeFlags) -> TreeFlags {
        TreeFlags(self.0.difference(&other.0).cloned().collect())
    }

    pub fn with(mut self, flag: impl Into<String>) -> TreeFlags {
        self.0.insert(flag.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TreeFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TreeFlags(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for TreeFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(" "))
    }
}
