//! Read-only queries answered against a targeted snapshot
//!
//! This is where display policy is decided: a dependency that resolved
//! itself still shows as unresolved when anything beneath it did not.

use crate::dependencies::domain::{
    DependencyModel, DependencyViewModel, IconHandle, UnresolvedDependencyCheck,
};
use std::sync::Arc;

/// Returns true if there is an unresolved dependency somewhere beneath `dependency`
pub fn has_unresolved_dependency<S>(dependency: &DependencyModel, snapshot: &S) -> bool
where
    S: UnresolvedDependencyCheck + ?Sized,
{
    snapshot.check_for_unresolved_dependencies(dependency)
}

/// Returns true if `dependency` is unresolved itself or has an unresolved dependency beneath it
pub fn is_or_has_unresolved_dependency<S>(dependency: &DependencyModel, snapshot: &S) -> bool
where
    S: UnresolvedDependencyCheck + ?Sized,
{
    !dependency.resolved() || has_unresolved_dependency(dependency, snapshot)
}

/// Builds the view model of `dependency` as displayed within `snapshot`
pub fn to_view_model<S>(dependency: &Arc<DependencyModel>, snapshot: &S) -> DependencyViewModel
where
    S: UnresolvedDependencyCheck + ?Sized,
{
    let show_as_resolved = dependency.resolved() && !has_unresolved_dependency(dependency, snapshot);

    let (icon, expanded_icon) = if show_as_resolved {
        (dependency.icon(), dependency.expanded_icon())
    } else {
        (dependency.unresolved_icon(), dependency.unresolved_expanded_icon())
    };

    DependencyViewModel {
        caption: dependency.caption().to_string(),
        file_path: dependency.id(),
        schema_name: dependency.schema_name().map(str::to_string),
        schema_item_type: dependency.schema_item_type().map(str::to_string),
        priority: dependency.priority(),
        icon,
        expanded_icon,
        properties: dependency.properties().clone(),
        flags: dependency.flags().clone(),
        show_as_resolved,
        original_model: Arc::clone(dependency),
    }
}

/// All icons of `dependency`: icon, expanded, unresolved, unresolved expanded
pub fn get_icons(dependency: &DependencyModel) -> impl Iterator<Item = IconHandle> {
    [
        dependency.icon(),
        dependency.expanded_icon(),
        dependency.unresolved_icon(),
        dependency.unresolved_expanded_icon(),
    ]
    .into_iter()
}
