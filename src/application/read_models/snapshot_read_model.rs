//! Snapshot read model for query operations
//!
//! Denormalized, render-ready view of every target's published snapshot.
//! Formatters only ever see this model.

use crate::dependencies::domain::{IconHandle, ProviderKind, TreeFlags};
use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model: the project and the dependency tree of each target
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReadModel {
    pub project: ProjectView,
    pub targets: Vec<TargetView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub display_name: String,
    pub project_file_path: String,
}

/// One target framework and its top-level dependencies
#[derive(Debug, Clone, Serialize)]
pub struct TargetView {
    pub full_name: String,
    pub short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    /// Generation of the snapshot this view was built from
    pub version: u64,
    /// RFC 3339 timestamp of the snapshot
    pub created_at: String,
    pub last_design_time_build_succeeded: bool,
    /// Number of dependencies in the snapshot, visible or not
    pub dependency_count: usize,
    /// Number of dependencies in the snapshot that are unresolved themselves
    pub unresolved_count: usize,
    pub dependencies: Vec<DependencyNodeView>,
}

/// A dependency as displayed in the tree
#[derive(Debug, Clone, Serialize)]
pub struct DependencyNodeView {
    pub id: String,
    pub top_level_id: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub provider_type: String,
    pub kind: ProviderKind,
    /// Resolved path, or the reported id when the dependency has none
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_item_type: Option<String>,
    pub priority: i32,
    pub resolved: bool,
    /// False when the dependency or anything beneath it is unresolved
    pub show_as_resolved: bool,
    pub implicit: bool,
    pub icon: IconHandle,
    pub expanded_icon: IconHandle,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    pub flags: TreeFlags,
    /// Set on a node that repeats one of its ancestors; its children are omitted
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
    /// Set on a node whose subtree was already rendered elsewhere in the target
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNodeView>,
}

impl SnapshotReadModel {
    /// Returns true if any displayed dependency shows as unresolved
    pub fn any_unresolved(&self) -> bool {
        self.targets
            .iter()
            .flat_map(|t| t.dependencies.iter())
            .any(DependencyNodeView::any_unresolved)
    }
}

impl DependencyNodeView {
    /// Returns true if this node or any node beneath it shows as unresolved
    pub fn any_unresolved(&self) -> bool {
        !self.show_as_resolved || self.children.iter().any(Self::any_unresolved)
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}
