use crate::dependencies::domain::{TargetedProjectContext, TargetedSnapshot};
use std::sync::Arc;

/// ChangeBatchResponse - outcome of applying one batch
#[derive(Debug, Clone)]
pub struct ChangeBatchResponse {
    /// Snapshot published for the target after the batch
    pub snapshot: Arc<TargetedSnapshot>,
    /// Project context of the target after the batch
    pub context: TargetedProjectContext,
    /// False when the batch carried no changes and nothing was published
    pub changed: bool,
    pub added_count: usize,
    pub removed_count: usize,
}

/// ReplayResponse - final state after replaying a batch script
#[derive(Debug, Clone)]
pub struct ReplayResponse {
    /// Every target in declaration order with its final context and snapshot
    pub targets: Vec<(TargetedProjectContext, Arc<TargetedSnapshot>)>,
    /// Number of batches that published a new snapshot
    pub batches_applied: usize,
    /// Number of batches that carried no changes
    pub batches_skipped: usize,
}
