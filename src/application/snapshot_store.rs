use crate::dependencies::domain::{
    DependencyModel, RemovedDependencyIdentity, TargetFramework, TargetedProjectContext,
    TargetedSnapshot,
};
use crate::dependencies::services::SnapshotBuilder;
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Live state of one target framework
#[derive(Debug, Clone)]
struct TargetEntry {
    context: TargetedProjectContext,
    snapshot: Arc<TargetedSnapshot>,
    publish: Arc<Mutex<()>>,
}

/// SnapshotStore - the currently published snapshot and context of every target
///
/// Different targets update concurrently. Folding a batch into a target's
/// snapshot happens while holding that target's entry, so two batches for
/// the same target are applied one after the other and neither is lost.
///
/// Callers that hand the published snapshot to someone else hold the
/// target's publish lock (`publish_lock`) across `apply` and the handoff,
/// so generations leave the store in version order.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    targets: DashMap<TargetFramework, TargetEntry>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a target with an empty snapshot
    ///
    /// Registering an already known target replaces its context and keeps
    /// its snapshot.
    pub fn register_target(&self, context: TargetedProjectContext) {
        let target_framework = context.target_framework().clone();
        self.targets
            .entry(target_framework.clone())
            .and_modify(|entry| entry.context = context.clone())
            .or_insert_with(|| TargetEntry {
                context,
                snapshot: Arc::new(TargetedSnapshot::empty(target_framework)),
                publish: Arc::new(Mutex::new(())),
            });
    }

    pub fn contains(&self, target_framework: &TargetFramework) -> bool {
        self.targets.contains_key(target_framework)
    }

    /// Currently published snapshot of a target
    pub fn snapshot(&self, target_framework: &TargetFramework) -> Option<Arc<TargetedSnapshot>> {
        self.targets
            .get(target_framework)
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    pub fn context(&self, target_framework: &TargetFramework) -> Option<TargetedProjectContext> {
        self.targets
            .get(target_framework)
            .map(|entry| entry.context.clone())
    }

    /// Lock serializing publication of the target's generations
    ///
    /// Never acquire it while holding a reference into the store.
    pub fn publish_lock(&self, target_framework: &TargetFramework) -> Option<Arc<Mutex<()>>> {
        self.targets
            .get(target_framework)
            .map(|entry| Arc::clone(&entry.publish))
    }

    /// All registered targets, in no particular order
    pub fn targets(&self) -> Vec<TargetFramework> {
        self.targets.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Folds a drained batch into the target's snapshot and publishes the result
    ///
    /// # Errors
    /// Returns `SnapshotError::UnknownTarget` if the target was never
    /// registered, or the fold error if an added model belongs elsewhere.
    pub fn apply(
        &self,
        target_framework: &TargetFramework,
        added: Vec<DependencyModel>,
        removed: Vec<RemovedDependencyIdentity>,
    ) -> Result<Arc<TargetedSnapshot>> {
        let mut entry = self
            .targets
            .get_mut(target_framework)
            .ok_or_else(|| unknown_target(target_framework))?;

        let next = Arc::new(SnapshotBuilder::fold(&entry.snapshot, added, removed)?);
        entry.snapshot = Arc::clone(&next);
        Ok(next)
    }

    /// Updates the target's context in place and returns the updated copy
    pub fn update_context<F>(&self, target_framework: &TargetFramework, update: F) -> Result<TargetedProjectContext>
    where
        F: FnOnce(&mut TargetedProjectContext),
    {
        let mut entry = self
            .targets
            .get_mut(target_framework)
            .ok_or_else(|| unknown_target(target_framework))?;
        update(&mut entry.context);
        Ok(entry.context.clone())
    }
}

fn unknown_target(target_framework: &TargetFramework) -> anyhow::Error {
    SnapshotError::UnknownTarget {
        target: target_framework.to_string(),
    }
    .into()
}
