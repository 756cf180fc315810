use crate::dependencies::domain::{ChangeSet, TargetFramework};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// What produced a batch of dependency changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchKind {
    /// A project evaluation finished
    #[default]
    Evaluation,
    /// A design-time build finished
    Build,
}

impl std::fmt::Display for BatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchKind::Evaluation => write!(f, "evaluation"),
            BatchKind::Build => write!(f, "build"),
        }
    }
}

/// ChangeBatchRequest - one completed batch waiting to be applied
///
/// Owns the change set: applying the request drains it.
#[derive(Debug)]
pub struct ChangeBatchRequest {
    /// Target the batch was reported for
    pub target_framework: TargetFramework,
    /// Accumulated changes of the batch
    pub changes: ChangeSet,
    pub kind: BatchKind,
    /// Whether the target is the one the editor currently shows
    pub is_active_context: bool,
    pub cancel: CancellationToken,
}

impl ChangeBatchRequest {
    pub fn new(
        target_framework: TargetFramework,
        changes: ChangeSet,
        kind: BatchKind,
        is_active_context: bool,
    ) -> Self {
        Self {
            target_framework,
            changes,
            kind,
            is_active_context,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses `cancel` instead of a fresh, never-cancelled token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
