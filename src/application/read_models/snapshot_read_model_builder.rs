//! Builder for constructing SnapshotReadModel from published snapshots

use super::snapshot_read_model::{DependencyNodeView, ProjectView, SnapshotReadModel, TargetView};
use crate::dependencies::domain::{
    DependencyIdentity, DependencyModel, ProviderTypes, TargetedProjectContext, TargetedSnapshot,
};
use crate::dependencies::services::{has_same_target, to_view_model, top_level_id};
use std::collections::HashSet;
use std::sync::Arc;

pub struct SnapshotReadModelBuilder;

impl SnapshotReadModelBuilder {
    /// Builds the read model for the given targets, keeping their order
    ///
    /// The project view is taken from the first target's context.
    pub fn build(
        targets: &[(TargetedProjectContext, Arc<TargetedSnapshot>)],
        providers: &ProviderTypes,
    ) -> SnapshotReadModel {
        let project = targets
            .first()
            .map(|(context, _)| ProjectView {
                display_name: context.display_name().to_string(),
                project_file_path: context.project_file_path().display().to_string(),
            })
            .unwrap_or_else(|| ProjectView {
                display_name: String::new(),
                project_file_path: String::new(),
            });

        SnapshotReadModel {
            project,
            targets: targets
                .iter()
                .map(|(context, snapshot)| Self::build_target(context, snapshot, providers))
                .collect(),
        }
    }

    fn build_target(
        context: &TargetedProjectContext,
        snapshot: &TargetedSnapshot,
        providers: &ProviderTypes,
    ) -> TargetView {
        let tf = context.target_framework();
        let mut walk = Walk::default();

        TargetView {
            full_name: tf.full_name().to_string(),
            short_name: tf.short_name().to_string(),
            target_path: context.target_path().map(|p| p.display().to_string()),
            version: snapshot.version(),
            created_at: snapshot.created_at().to_rfc3339(),
            last_design_time_build_succeeded: context.last_design_time_build_succeeded(),
            dependency_count: snapshot.len(),
            unresolved_count: snapshot.dependencies().filter(|d| !d.resolved()).count(),
            dependencies: snapshot
                .top_level_dependencies()
                .iter()
                .map(|d| Self::build_node(d, snapshot, providers, &mut walk))
                .collect(),
        }
    }

    /// Builds a node and, the first time its identity is seen, its subtree
    ///
    /// Later occurrences of the same identity are emitted without children,
    /// so shared dependencies keep the tree linear in the snapshot size.
    fn build_node(
        dependency: &Arc<DependencyModel>,
        snapshot: &TargetedSnapshot,
        providers: &ProviderTypes,
        walk: &mut Walk,
    ) -> DependencyNodeView {
        let view = to_view_model(dependency, snapshot);
        let identity = dependency.identity();
        let cycle = walk.ancestors.contains(identity);
        let repeated = !cycle && walk.expanded.contains(identity);

        let children = if cycle || repeated {
            Vec::new()
        } else {
            walk.expanded.insert(identity.clone());
            walk.ancestors.push(identity.clone());
            let children = snapshot
                .children_of(dependency)
                .iter()
                .filter(|child| has_same_target(dependency, Some(child.as_ref())).unwrap_or(false))
                .map(|child| Self::build_node(child, snapshot, providers, walk))
                .collect();
            walk.ancestors.pop();
            children
        };

        DependencyNodeView {
            id: dependency.id(),
            top_level_id: top_level_id(dependency),
            caption: view.caption,
            version: dependency.version().map(str::to_string),
            provider_type: dependency.provider_type().to_string(),
            kind: providers.kind_of(dependency.provider_type()),
            file_path: dependency.path().map(str::to_string).unwrap_or(view.file_path),
            schema_name: view.schema_name,
            schema_item_type: view.schema_item_type,
            priority: view.priority,
            resolved: dependency.resolved(),
            show_as_resolved: view.show_as_resolved,
            implicit: dependency.implicit(),
            icon: view.icon,
            expanded_icon: view.expanded_icon,
            properties: view.properties,
            flags: view.flags,
            cycle,
            repeated,
            children,
        }
    }
}

/// Per-target traversal state
#[derive(Default)]
struct Walk {
    ancestors: Vec<DependencyIdentity>,
    expanded: HashSet<DependencyIdentity>,
}
