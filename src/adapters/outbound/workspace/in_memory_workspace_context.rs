use crate::application::dto::BatchKind;
use crate::dependencies::domain::TargetFramework;
use crate::ports::outbound::{ProjectUpdate, WorkspaceContextApplier};
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;

/// What the workspace last accepted for a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedState {
    pub version: u64,
    pub kind: BatchKind,
    pub is_active_context: bool,
    pub dependency_count: usize,
}

/// InMemoryWorkspaceContext adapter standing in for a language workspace
///
/// Keeps the last accepted update per target. Updates must arrive in
/// increasing version order per target; an older or repeated version is
/// rejected, as is an update whose cancellation token already fired.
#[derive(Debug, Default)]
pub struct InMemoryWorkspaceContext {
    applied: DashMap<TargetFramework, AppliedState>,
}

impl InMemoryWorkspaceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted state for a target
    pub fn applied(&self, target_framework: &TargetFramework) -> Option<AppliedState> {
        self.applied.get(target_framework).map(|s| s.clone())
    }

    fn accept(
        &self,
        kind: BatchKind,
        update: &ProjectUpdate,
        is_active_context: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let tf = update.context.target_framework();
        if cancel.is_cancelled() {
            return Err(SnapshotError::Cancelled {
                target: tf.to_string(),
            }
            .into());
        }

        let state = AppliedState {
            version: update.version,
            kind,
            is_active_context,
            dependency_count: update.snapshot.len(),
        };

        match self.applied.entry(tf.clone()) {
            Entry::Occupied(entry) if entry.get().version >= update.version => {
                anyhow::bail!(
                    "Workspace for {} already holds v{}; refusing stale v{}",
                    tf,
                    entry.get().version,
                    update.version
                );
            }
            Entry::Occupied(mut entry) => {
                entry.insert(state);
            }
            Entry::Vacant(entry) => {
                entry.insert(state);
            }
        }
        Ok(())
    }
}

impl WorkspaceContextApplier for InMemoryWorkspaceContext {
    fn apply_project_build(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.accept(BatchKind::Build, update, is_active_context, cancel)
    }

    fn apply_project_evaluation(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.accept(BatchKind::Evaluation, update, is_active_context, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::domain::{TargetedProjectContext, TargetedSnapshot};
    use crate::dependencies::services::SnapshotBuilder;
    use std::sync::Arc;

    fn update(version: u64) -> ProjectUpdate {
        let tf = TargetFramework::from_moniker("net8.0");
        let mut snapshot = TargetedSnapshot::empty(tf.clone());
        for _ in 0..version {
            snapshot = SnapshotBuilder::fold(&snapshot, vec![], vec![]).unwrap();
        }
        ProjectUpdate {
            version,
            context: TargetedProjectContext::new("App", "App.csproj", tf, None),
            snapshot: Arc::new(snapshot),
            added: vec![],
            removed: vec![],
        }
    }

    #[test]
    fn test_records_last_applied_state() {
        let workspace = InMemoryWorkspaceContext::new();
        let cancel = CancellationToken::new();

        workspace.apply_project_evaluation(&update(1), true, &cancel).unwrap();
        workspace.apply_project_build(&update(2), false, &cancel).unwrap();

        let state = workspace.applied(&TargetFramework::from_moniker("NET8.0")).unwrap();
        assert_eq!(state.version, 2);
        assert_eq!(state.kind, BatchKind::Build);
        assert!(!state.is_active_context);
    }

    #[test]
    fn test_rejects_stale_version() {
        let workspace = InMemoryWorkspaceContext::new();
        let cancel = CancellationToken::new();

        workspace.apply_project_evaluation(&update(2), true, &cancel).unwrap();
        let err = workspace.apply_project_evaluation(&update(1), true, &cancel).unwrap_err();

        assert!(err.to_string().contains("stale v1"));
        assert_eq!(workspace.applied(&TargetFramework::from_moniker("net8.0")).unwrap().version, 2);
    }

    #[test]
    fn test_rejects_cancelled_update() {
        let workspace = InMemoryWorkspaceContext::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = workspace.apply_project_build(&update(1), true, &cancel).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnapshotError>(),
            Some(SnapshotError::Cancelled { .. })
        ));
        assert!(workspace.applied(&TargetFramework::from_moniker("net8.0")).is_none());
    }
}
