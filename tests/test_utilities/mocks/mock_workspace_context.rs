use depsnap::prelude::*;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// One call received by the mock workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCall {
    pub kind: BatchKind,
    pub target: String,
    pub version: u64,
    pub is_active_context: bool,
    pub dependency_count: usize,
    pub added: usize,
    pub removed: usize,
}

/// Mock WorkspaceContextApplier recording every call
///
/// Build updates can be made to fail, to exercise the build outcome bookkeeping.
#[derive(Default, Clone)]
pub struct MockWorkspaceContext {
    pub calls: Arc<Mutex<Vec<AppliedCall>>>,
    fail_builds: bool,
}

impl MockWorkspaceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_builds() -> Self {
        Self {
            fail_builds: true,
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<AppliedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, kind: BatchKind, update: &ProjectUpdate, is_active_context: bool) {
        self.calls.lock().unwrap().push(AppliedCall {
            kind,
            target: update.context.target_framework().short_name().to_string(),
            version: update.version,
            is_active_context,
            dependency_count: update.snapshot.len(),
            added: update.added.len(),
            removed: update.removed.len(),
        });
    }
}

impl WorkspaceContextApplier for MockWorkspaceContext {
    fn apply_project_build(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        _cancel: &CancellationToken,
    ) -> Result<()> {
        self.record(BatchKind::Build, update, is_active_context);
        if self.fail_builds {
            anyhow::bail!("Mock workspace rejected the build");
        }
        Ok(())
    }

    fn apply_project_evaluation(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        _cancel: &CancellationToken,
    ) -> Result<()> {
        self.record(BatchKind::Evaluation, update, is_active_context);
        Ok(())
    }
}
