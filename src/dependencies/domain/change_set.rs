use super::identity::{DependencyIdentity, RemovedDependencyIdentity};
use super::DependencyModel;
use indexmap::{IndexMap, IndexSet};
use parking_lot::Mutex;

/// ChangeSet - pending dependency mutations of one evaluation batch
///
/// Reporters running on different threads call `include_added` and
/// `include_removed` concurrently. Each collection has its own lock and no
/// operation holds both, so traffic on one never blocks the other. A later
/// report for an identity replaces the earlier one and moves to the end of
/// the insertion order.
///
/// Reads return point-in-time copies. `drain` consumes the change set, so a
/// batch can only be folded into a snapshot once.
#[derive(Debug, Default)]
pub struct ChangeSet {
    added: Mutex<IndexMap<DependencyIdentity, DependencyModel>>,
    removed: Mutex<IndexSet<RemovedDependencyIdentity>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an added or changed dependency
    ///
    /// Returns the model previously reported for the same identity in this
    /// batch, if any.
    pub fn include_added(&self, model: DependencyModel) -> Option<DependencyModel> {
        let mut added = self.added.lock();
        let previous = added.shift_remove(model.identity());
        added.insert(model.identity().clone(), model);
        previous
    }

    /// Records a removed dependency
    pub fn include_removed(&self, provider_type: &str, dependency_id: &str) {
        let identity = RemovedDependencyIdentity::new(provider_type, dependency_id);

        let mut removed = self.removed.lock();
        removed.shift_remove(&identity);
        removed.insert(identity);
    }

    /// Copy of the added models, in report order
    pub fn added_nodes(&self) -> Vec<DependencyModel> {
        self.added.lock().values().cloned().collect()
    }

    /// Copy of the removed identities, in report order
    pub fn removed_nodes(&self) -> Vec<RemovedDependencyIdentity> {
        self.removed.lock().iter().cloned().collect()
    }

    pub fn added_count(&self) -> usize {
        self.added.lock().len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.lock().len()
    }

    pub fn any_changes(&self) -> bool {
        self.added_count() != 0 || self.removed_count() != 0
    }

    /// Consumes the change set, returning its added models and removed identities
    pub fn drain(self) -> (Vec<DependencyModel>, Vec<RemovedDependencyIdentity>) {
        let added = self.added.into_inner().into_values().collect();
        let removed = self.removed.into_inner().into_iter().collect();
        (added, removed)
    }
}
