use crate::dependencies::domain::{
    DependencyModel, RemovedDependencyIdentity, TargetedSnapshot,
};
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use std::sync::Arc;

/// SnapshotBuilder service - folds a drained change set into the next snapshot generation
///
/// Removals are applied before additions, so a dependency that was both
/// removed and re-added within one batch ends up present with the newly
/// reported model.
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Builds the generation following `previous`
    ///
    /// # Arguments
    /// * `previous` - The snapshot currently published for the target
    /// * `added` - Added or changed models, in report order
    /// * `removed` - Removed identities, in report order
    ///
    /// # Errors
    /// Returns `SnapshotError::TargetMismatch` if an added model belongs to a
    /// different target framework than `previous`.
    pub fn fold(
        previous: &TargetedSnapshot,
        added: Vec<DependencyModel>,
        removed: Vec<RemovedDependencyIdentity>,
    ) -> Result<TargetedSnapshot> {
        let target_framework = previous.target_framework();

        if let Some(foreign) = added
            .iter()
            .find(|m| m.target_framework() != target_framework)
        {
            return Err(SnapshotError::TargetMismatch {
                dependency: foreign.id(),
                expected: target_framework.to_string(),
                actual: foreign.target_framework().to_string(),
            }
            .into());
        }

        let mut dependencies = previous.entries().clone();

        for removal in &removed {
            dependencies.remove(&removal.to_identity(target_framework));
        }

        for model in added {
            dependencies.insert(model.identity().clone(), Arc::new(model));
        }

        Ok(TargetedSnapshot::new(
            target_framework.clone(),
            previous.version() + 1,
            dependencies,
        ))
    }
}
