use super::ApplyDependencyChangesUseCase;
use crate::application::dto::{
    BatchScript, ChangeBatchRequest, ReplayRequest, ReplayResponse, ScriptBatch, ScriptReporter,
};
use crate::application::snapshot_store::SnapshotStore;
use crate::dependencies::domain::{ChangeSet, ProviderTypes, TargetFramework, TargetedProjectContext};
use crate::ports::outbound::{BatchScriptReader, ProgressReporter, WorkspaceContextApplier};
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use anyhow::Context;
use std::sync::Arc;
use std::thread;

/// ReplayScriptUseCase - drives a project's targets through a scripted sequence of batches
///
/// Every reporter of a batch runs on its own thread against the batch's
/// change set; the batch is applied once all of them have finished.
///
/// # Type Parameters
/// * `R` - BatchScriptReader implementation
/// * `A` - WorkspaceContextApplier implementation
/// * `PR` - ProgressReporter implementation
pub struct ReplayScriptUseCase<R, A, PR> {
    script_reader: R,
    apply_changes: ApplyDependencyChangesUseCase<A, PR>,
}

impl<R, A, PR> ReplayScriptUseCase<R, A, PR>
where
    R: BatchScriptReader,
    A: WorkspaceContextApplier,
    PR: ProgressReporter,
{
    /// Creates a new ReplayScriptUseCase with injected dependencies
    pub fn new(script_reader: R, store: Arc<SnapshotStore>, applier: A, progress_reporter: PR) -> Self {
        Self {
            script_reader,
            apply_changes: ApplyDependencyChangesUseCase::new(store, applier, progress_reporter),
        }
    }

    /// Reads the script named by the request and replays it
    ///
    /// # Returns
    /// ReplayResponse with every declared target's final context and snapshot
    pub fn execute(&self, request: ReplayRequest) -> Result<ReplayResponse> {
        // Step 1: Validate the provider registry
        request.provider_types.validate()?;

        // Step 2: Load the script
        self.reporter().report(&format!(
            "📖 Loading batch script from: {}",
            request.script_path.display()
        ));
        let script = self.script_reader.read_script(&request.script_path)?;

        // Step 3: Replay
        self.replay(&script, &request.provider_types)
    }

    /// Replays an already loaded script
    ///
    /// # Errors
    /// Returns an error if the script is invalid or a batch cannot be applied.
    /// Batches before the failing one stay applied.
    pub fn replay(&self, script: &BatchScript, providers: &ProviderTypes) -> Result<ReplayResponse> {
        script.validate()?;

        let frameworks = self.register_targets(script);
        let store = self.apply_changes.store();
        let total = script.batches.len();
        let mut batches_applied = 0;
        let mut batches_skipped = 0;

        for (index, batch) in script.batches.iter().enumerate() {
            let target = script
                .find_target(&batch.target)
                .map(|t| t.target_framework())
                .ok_or_else(|| SnapshotError::UnknownTarget {
                    target: batch.target.clone(),
                })?;

            self.reporter().report_progress(
                index,
                total,
                Some(&format!("{} batch for {}", batch.kind, target)),
            );

            let changes = self.collect_changes(batch, &target, providers)?;
            let is_active_context = batch
                .active
                .unwrap_or_else(|| frameworks.first() == Some(&target));

            let response = self
                .apply_changes
                .execute(ChangeBatchRequest::new(target.clone(), changes, batch.kind, is_active_context))
                .with_context(|| format!("Failed to apply batch {} for {}", index + 1, target))?;

            if response.changed {
                batches_applied += 1;
            } else {
                batches_skipped += 1;
            }
        }

        if total > 0 {
            self.reporter().report_progress(total, total, None);
        }
        self.reporter().report_completion(&format!(
            "Replayed {} batch(es): {} applied, {} without changes",
            total, batches_applied, batches_skipped
        ));

        let targets = frameworks
            .iter()
            .map(|tf| {
                let unknown = || SnapshotError::UnknownTarget {
                    target: tf.to_string(),
                };
                Ok((
                    store.context(tf).ok_or_else(unknown)?,
                    store.snapshot(tf).ok_or_else(unknown)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ReplayResponse {
            targets,
            batches_applied,
            batches_skipped,
        })
    }

    /// Registers every declared target, returning them in declaration order
    fn register_targets(&self, script: &BatchScript) -> Vec<TargetFramework> {
        script
            .targets
            .iter()
            .map(|target| {
                let tf = target.target_framework();
                self.apply_changes.store().register_target(TargetedProjectContext::new(
                    &script.project.display_name,
                    &script.project.project_file_path,
                    tf.clone(),
                    target.target_path.clone(),
                ));
                tf
            })
            .collect()
    }

    /// Runs every reporter of the batch concurrently against one change set
    fn collect_changes(
        &self,
        batch: &ScriptBatch,
        target: &TargetFramework,
        providers: &ProviderTypes,
    ) -> Result<ChangeSet> {
        let changes = ChangeSet::new();
        let shared = &changes;

        let replaced = thread::scope(|scope| {
            let handles: Vec<_> = batch
                .reporters
                .iter()
                .map(|reporter| scope.spawn(move || run_reporter(reporter, shared, target, providers)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| anyhow::anyhow!("A reporter for {} panicked", target))
                })
                .collect::<Result<Vec<Vec<String>>>>()
        })?;

        for id in replaced.into_iter().flatten() {
            self.reporter()
                .report(&format!("🔁 {} was reported again; keeping the latest", id));
        }

        Ok(changes)
    }

    fn reporter(&self) -> &PR {
        self.apply_changes.progress_reporter()
    }
}

/// Feeds one reporter's changes into the set, returning the ids it overrode
fn run_reporter(
    reporter: &ScriptReporter,
    changes: &ChangeSet,
    target: &TargetFramework,
    providers: &ProviderTypes,
) -> Vec<String> {
    let mut replaced = Vec::new();
    for dependency in &reporter.added {
        if let Some(previous) = changes.include_added(dependency.to_model(target, providers)) {
            replaced.push(previous.id());
        }
    }
    for removal in &reporter.removed {
        changes.include_removed(&removal.provider_type, &removal.id);
    }
    replaced
}
