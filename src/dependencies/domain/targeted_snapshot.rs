use super::identity::{make_id, DependencyIdentity};
use super::{DependencyModel, TargetFramework};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Answers whether anything beneath a dependency is unresolved
///
/// Implemented by whatever owns the full dependency graph of a target. The
/// snapshot query surface only delegates to it.
pub trait UnresolvedDependencyCheck {
    /// Returns true if some dependency reachable from `dependency` is unresolved
    fn check_for_unresolved_dependencies(&self, dependency: &DependencyModel) -> bool;
}

/// TargetedSnapshot aggregate - the dependency graph of one target at one point in time
///
/// Immutable once built; a new generation is produced by
/// `SnapshotBuilder::fold`. Unresolved-closure answers are memoized per
/// starting dependency.
#[derive(Debug)]
pub struct TargetedSnapshot {
    target_framework: TargetFramework,
    version: u64,
    created_at: DateTime<Utc>,
    dependencies: HashMap<DependencyIdentity, Arc<DependencyModel>>,
    unresolved_cache: DashMap<DependencyIdentity, bool>,
}

impl TargetedSnapshot {
    /// Generation zero: a target with no dependencies
    pub fn empty(target_framework: TargetFramework) -> Self {
        Self::new(target_framework, 0, HashMap::new())
    }

    pub(crate) fn new(
        target_framework: TargetFramework,
        version: u64,
        dependencies: HashMap<DependencyIdentity, Arc<DependencyModel>>,
    ) -> Self {
        Self {
            target_framework,
            version,
            created_at: Utc::now(),
            dependencies,
            unresolved_cache: DashMap::new(),
        }
    }

    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn get(&self, identity: &DependencyIdentity) -> Option<&Arc<DependencyModel>> {
        self.dependencies.get(identity)
    }

    pub fn contains(&self, identity: &DependencyIdentity) -> bool {
        self.dependencies.contains_key(identity)
    }

    /// All dependencies, in no particular order
    pub fn dependencies(&self) -> impl Iterator<Item = &Arc<DependencyModel>> {
        self.dependencies.values()
    }

    pub(crate) fn entries(&self) -> &HashMap<DependencyIdentity, Arc<DependencyModel>> {
        &self.dependencies
    }

    /// Visible top-level dependencies ordered by priority, then caption
    pub fn top_level_dependencies(&self) -> Vec<Arc<DependencyModel>> {
        let mut top_level: Vec<Arc<DependencyModel>> = self
            .dependencies
            .values()
            .filter(|d| d.top_level() && d.visible())
            .cloned()
            .collect();
        sort_for_display(&mut top_level);
        top_level
    }

    /// Children of `dependency` present in this snapshot, ordered like top-level nodes
    pub fn children_of(&self, dependency: &DependencyModel) -> Vec<Arc<DependencyModel>> {
        let mut children: Vec<Arc<DependencyModel>> = dependency
            .dependency_ids()
            .iter()
            .filter_map(|child| self.dependencies.get(&self.child_identity(dependency, child)))
            .cloned()
            .collect();
        sort_for_display(&mut children);
        children
    }

    /// Finds a top-level dependency by its top-level id
    pub fn find_top_level(&self, id: &str) -> Option<&Arc<DependencyModel>> {
        self.dependencies
            .values()
            .find(|d| d.top_level() && d.top_level_id_equals(id))
    }

    fn child_identity(&self, parent: &DependencyModel, child_id: &str) -> DependencyIdentity {
        make_id(&self.target_framework, parent.provider_type(), child_id)
    }

    /// Walks everything reachable from `dependency` looking for an unresolved node
    ///
    /// Children missing from the snapshot are skipped. The visited set keeps
    /// cyclic graphs finite.
    fn find_unresolved(&self, dependency: &DependencyModel) -> bool {
        let mut visited: HashSet<DependencyIdentity> = HashSet::new();
        visited.insert(dependency.identity().clone());

        let mut pending: Vec<DependencyIdentity> = dependency
            .dependency_ids()
            .iter()
            .map(|child| self.child_identity(dependency, child))
            .collect();

        while let Some(identity) = pending.pop() {
            if !visited.insert(identity.clone()) {
                continue;
            }
            let Some(child) = self.dependencies.get(&identity) else {
                continue;
            };
            if !child.resolved() {
                return true;
            }
            pending.extend(
                child
                    .dependency_ids()
                    .iter()
                    .map(|grandchild| self.child_identity(child, grandchild)),
            );
        }

        false
    }
}

impl UnresolvedDependencyCheck for TargetedSnapshot {
    fn check_for_unresolved_dependencies(&self, dependency: &DependencyModel) -> bool {
        if dependency.dependency_ids().is_empty() {
            return false;
        }

        // Only models stored in this snapshot are memoized; a caller may pass a
        // model with the same identity but different children.
        let stored = self
            .dependencies
            .get(dependency.identity())
            .is_some_and(|d| d.as_ref() == dependency);
        if !stored {
            return self.find_unresolved(dependency);
        }

        if let Some(cached) = self.unresolved_cache.get(dependency.identity()) {
            return *cached;
        }

        let result = self.find_unresolved(dependency);
        self.unresolved_cache
            .insert(dependency.identity().clone(), result);
        result
    }
}

fn sort_for_display(dependencies: &mut [Arc<DependencyModel>]) {
    dependencies.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.caption().to_lowercase().cmp(&b.caption().to_lowercase()))
    });
}
