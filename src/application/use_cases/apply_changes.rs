use crate::application::dto::{BatchKind, ChangeBatchRequest, ChangeBatchResponse};
use crate::application::snapshot_store::SnapshotStore;
use crate::dependencies::domain::{DependencyModel, TargetFramework};
use crate::ports::outbound::{ProgressReporter, ProjectUpdate, WorkspaceContextApplier};
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use std::sync::Arc;

/// ApplyDependencyChangesUseCase - folds a completed batch into its target's snapshot
///
/// Drains the batch's change set, publishes the next snapshot generation
/// and hands it to the workspace context.
///
/// # Type Parameters
/// * `A` - WorkspaceContextApplier implementation
/// * `PR` - ProgressReporter implementation
pub struct ApplyDependencyChangesUseCase<A, PR> {
    store: Arc<SnapshotStore>,
    applier: A,
    progress_reporter: PR,
}

impl<A, PR> ApplyDependencyChangesUseCase<A, PR>
where
    A: WorkspaceContextApplier,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(store: Arc<SnapshotStore>, applier: A, progress_reporter: PR) -> Self {
        Self {
            store,
            applier,
            progress_reporter,
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Applies one batch
    ///
    /// A batch without changes publishes nothing and does not reach the
    /// workspace context. Batches for the same target are published and
    /// handed over one at a time, so the workspace sees versions in order. For build batches the target's
    /// `last_design_time_build_succeeded` records whether the workspace
    /// accepted the update.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the request was cancelled before anything was applied
    /// - the target is not registered with the store
    /// - an added model belongs to another target
    /// - the workspace context rejected the update
    pub fn execute(&self, request: ChangeBatchRequest) -> Result<ChangeBatchResponse> {
        let ChangeBatchRequest {
            target_framework,
            changes,
            kind,
            is_active_context,
            cancel,
        } = request;

        if cancel.is_cancelled() {
            return Err(SnapshotError::Cancelled {
                target: target_framework.to_string(),
            }
            .into());
        }

        if !changes.any_changes() {
            return self.unchanged_response(&target_framework, kind);
        }

        let publish = self
            .store
            .publish_lock(&target_framework)
            .ok_or_else(|| SnapshotError::UnknownTarget {
                target: target_framework.to_string(),
            })?;
        let _publishing = publish.lock();

        // Step 1: Drain and publish
        let (added, removed) = changes.drain();
        let added_identities = added.iter().map(|m| m.identity().clone()).collect::<Vec<_>>();
        let (added_count, removed_count) = (added.len(), removed.len());
        self.report_unresolved(&added);

        let snapshot = self.store.apply(&target_framework, added, removed.clone())?;
        self.progress_reporter.report(&format!(
            "📦 {} {} v{}: +{} -{} ({} dependencies)",
            target_framework,
            kind,
            snapshot.version(),
            added_count,
            removed_count,
            snapshot.len()
        ));

        // Step 2: Hand the snapshot to the workspace context
        let context = self
            .store
            .context(&target_framework)
            .ok_or_else(|| SnapshotError::UnknownTarget {
                target: target_framework.to_string(),
            })?;
        let update = ProjectUpdate {
            version: snapshot.version(),
            context,
            snapshot: Arc::clone(&snapshot),
            added: added_identities,
            removed,
        };

        let applied = match kind {
            BatchKind::Evaluation => {
                self.applier
                    .apply_project_evaluation(&update, is_active_context, &cancel)
            }
            BatchKind::Build => self.applier.apply_project_build(&update, is_active_context, &cancel),
        };

        // Step 3: Record the build outcome before surfacing any failure
        let context = if kind == BatchKind::Build {
            let succeeded = applied.is_ok();
            self.store
                .update_context(&target_framework, |c| c.set_last_design_time_build_succeeded(succeeded))?
        } else {
            update.context
        };

        if let Err(e) = applied {
            self.progress_reporter.report_error(&format!(
                "Workspace rejected {} v{} for {}: {}",
                kind,
                snapshot.version(),
                target_framework,
                e
            ));
            return Err(e);
        }

        Ok(ChangeBatchResponse {
            snapshot,
            context,
            changed: true,
            added_count,
            removed_count,
        })
    }

    fn unchanged_response(&self, target_framework: &TargetFramework, kind: BatchKind) -> Result<ChangeBatchResponse> {
        let unknown = || SnapshotError::UnknownTarget {
            target: target_framework.to_string(),
        };
        let snapshot = self.store.snapshot(target_framework).ok_or_else(unknown)?;
        let context = self.store.context(target_framework).ok_or_else(unknown)?;

        self.progress_reporter.report(&format!(
            "⏭️  {} {}: no changes, keeping v{}",
            target_framework,
            kind,
            snapshot.version()
        ));

        Ok(ChangeBatchResponse {
            snapshot,
            context,
            changed: false,
            added_count: 0,
            removed_count: 0,
        })
    }

    fn report_unresolved(&self, added: &[DependencyModel]) {
        for model in added.iter().filter(|m| !m.resolved()) {
            self.progress_reporter
                .report(&format!("⚠️  Unresolved: {}", model.id()));
        }
    }
}
