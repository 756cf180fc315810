use crate::dependencies::domain::{
    DependencyIdentity, RemovedDependencyIdentity, TargetedProjectContext, TargetedSnapshot,
};
use crate::shared::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// One applied batch, as handed to the workspace context
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    /// Generation of `snapshot`
    pub version: u64,
    /// The project as seen by the updated target
    pub context: TargetedProjectContext,
    /// The snapshot published for the batch
    pub snapshot: Arc<TargetedSnapshot>,
    /// Identities added or changed by the batch
    pub added: Vec<DependencyIdentity>,
    /// Identities removed by the batch
    pub removed: Vec<RemovedDependencyIdentity>,
}

/// WorkspaceContextApplier port for pushing published snapshots into a language workspace
///
/// The applier consumes snapshots; it never mutates them. Evaluation
/// batches and build batches are delivered through separate methods.
///
/// Implementations must be `Send + Sync`: different targets may publish
/// from different threads.
pub trait WorkspaceContextApplier: Send + Sync {
    /// Applies the result of a design-time build
    ///
    /// # Arguments
    /// * `update` - The applied batch
    /// * `is_active_context` - Whether the target is the one the editor currently shows
    /// * `cancel` - Signalled when the caller no longer needs the update applied
    ///
    /// # Errors
    /// Returns an error if the workspace rejected the update
    fn apply_project_build(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// Applies the result of a project evaluation
    fn apply_project_evaluation(
        &self,
        update: &ProjectUpdate,
        is_active_context: bool,
        cancel: &CancellationToken,
    ) -> Result<()>;
}
