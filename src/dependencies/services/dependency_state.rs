//! Resolution state transitions and classification of dependency models
//!
//! Every function here is pure: models are taken by reference and new
//! models are returned.

use crate::dependencies::domain::{DependencyModel, ProviderKind, ProviderTypes, TreeFlags};
use crate::shared::error::SnapshotError;
use crate::shared::text::eq_ignore_case;
use crate::shared::Result;

/// Returns a resolved copy of `dependency`
///
/// Flags become `(flags ∪ resolved) \ unresolved`. `schema_name` and
/// `dependency_ids` replace the current values when given.
pub fn to_resolved(
    dependency: &DependencyModel,
    schema_name: Option<String>,
    dependency_ids: Option<Vec<String>>,
) -> DependencyModel {
    dependency.with_resolution(true, resolved_flags(dependency), schema_name, dependency_ids)
}

/// Returns an unresolved copy of `dependency`
///
/// Flags become `(flags ∪ unresolved) \ resolved`.
pub fn to_unresolved(
    dependency: &DependencyModel,
    schema_name: Option<String>,
    dependency_ids: Option<Vec<String>>,
) -> DependencyModel {
    dependency.with_resolution(false, unresolved_flags(dependency), schema_name, dependency_ids)
}

pub fn resolved_flags(dependency: &DependencyModel) -> TreeFlags {
    dependency
        .flags()
        .union(&TreeFlags::resolved())
        .except(&TreeFlags::unresolved())
}

pub fn unresolved_flags(dependency: &DependencyModel) -> TreeFlags {
    dependency
        .flags()
        .union(&TreeFlags::unresolved())
        .except(&TreeFlags::resolved())
}

/// Returns true if the dependency comes from the package provider
pub fn is_package(dependency: &DependencyModel, providers: &ProviderTypes) -> bool {
    eq_ignore_case(dependency.provider_type(), &providers.package)
}

/// Returns true if the dependency is a project reference
pub fn is_project(dependency: &DependencyModel, providers: &ProviderTypes) -> bool {
    eq_ignore_case(dependency.provider_type(), &providers.project)
}

pub fn kind_of(dependency: &DependencyModel, providers: &ProviderTypes) -> ProviderKind {
    providers.kind_of(dependency.provider_type())
}

/// Returns true if both dependencies belong to the same target framework
///
/// # Errors
/// Returns `SnapshotError::InvalidArgument` when `other` is absent.
pub fn has_same_target(dependency: &DependencyModel, other: Option<&DependencyModel>) -> Result<bool> {
    let other = other.ok_or(SnapshotError::InvalidArgument { name: "other" })?;
    Ok(dependency.target_framework() == other.target_framework())
}

/// Id of the dependency using its resolved path instead of the reported item spec
///
/// Falls back to the dependency's own id when it has no path.
pub fn top_level_id(dependency: &DependencyModel) -> String {
    dependency.top_level_id()
}

/// Returns true if `id` equals the dependency's top-level id, ignoring case
pub fn top_level_id_equals(dependency: &DependencyModel, id: &str) -> bool {
    dependency.top_level_id_equals(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::domain::tree_flags::{BROKEN_REFERENCE, RESOLVED_REFERENCE};
    use crate::dependencies::domain::TargetFramework;

    fn net8() -> TargetFramework {
        TargetFramework::new(".NETCoreApp,Version=v8.0", "net8.0")
    }

    fn model(flags: TreeFlags, resolved: bool) -> DependencyModel {
        DependencyModel::builder(&net8(), "NuGetDependency", "Serilog/3.1.1")
            .flags(flags)
            .resolved(resolved)
            .schema_name("PackageReference")
            .dependency_ids(["Serilog.Core/3.1.1"])
            .build()
    }

    fn samples() -> Vec<DependencyModel> {
        vec![
            model(TreeFlags::new(), true),
            model(TreeFlags::new(), false),
            model(TreeFlags::resolved(), false),
            model(TreeFlags::unresolved(), true),
            model(TreeFlags::resolved().union(&TreeFlags::unresolved()), true),
            model(TreeFlags::new().with("NuGetPackage").with(BROKEN_REFERENCE), false),
        ]
    }

    #[test]
    fn test_to_resolved() {
        let unresolved = model(TreeFlags::unresolved().with("NuGetPackage"), false);
        let resolved = to_resolved(&unresolved, None, None);

        assert!(resolved.resolved());
        assert!(resolved.flags().contains_all(&TreeFlags::resolved()));
        assert!(!resolved.flags().contains_any(&TreeFlags::unresolved()));
        assert!(resolved.flags().contains("NuGetPackage"));
        assert_eq!(resolved.schema_name(), Some("PackageReference"));
        assert_eq!(resolved.dependency_ids(), ["Serilog.Core/3.1.1".to_string()]);
        // The input is untouched
        assert!(!unresolved.resolved());
    }

    #[test]
    fn test_to_unresolved() {
        let resolved = model(TreeFlags::resolved(), true);
        let unresolved = to_unresolved(&resolved, None, None);

        assert!(!unresolved.resolved());
        assert!(unresolved.flags().contains(BROKEN_REFERENCE));
        assert!(!unresolved.flags().contains(RESOLVED_REFERENCE));
    }

    #[test]
    fn test_overrides_schema_and_children() {
        let resolved = to_resolved(
            &model(TreeFlags::new(), false),
            Some("ResolvedPackageReference".to_string()),
            Some(vec![]),
        );
        assert_eq!(resolved.schema_name(), Some("ResolvedPackageReference"));
        assert!(resolved.dependency_ids().is_empty());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        for m in samples() {
            let once = to_resolved(&m, None, None);
            assert_eq!(to_resolved(&once, None, None), once);

            let once = to_unresolved(&m, None, None);
            assert_eq!(to_unresolved(&once, None, None), once);
        }
    }

    #[test]
    fn test_resolution_flag_sets_are_mutually_exclusive() {
        for m in samples() {
            let resolved = to_resolved(&m, None, None);
            assert!(!resolved.flags().contains_any(&TreeFlags::unresolved()));

            let unresolved = to_unresolved(&m, None, None);
            assert!(!unresolved.flags().contains_any(&TreeFlags::resolved()));
        }
    }

    #[test]
    fn test_round_trip_restores_flags() {
        let start = model(TreeFlags::resolved().with("NuGetPackage"), true);
        let back = to_resolved(&to_unresolved(&start, None, None), None, None);
        assert_eq!(back, start);
    }

    #[test]
    fn test_is_package_and_is_project() {
        let providers = ProviderTypes::default();
        let package = DependencyModel::builder(&net8(), "nugetdependency", "Serilog").build();
        let project = DependencyModel::builder(&net8(), "PROJECTDEPENDENCY", "Lib").build();

        assert!(is_package(&package, &providers));
        assert!(!is_project(&package, &providers));
        assert!(is_project(&project, &providers));
        assert!(!is_package(&project, &providers));
        assert_eq!(kind_of(&project, &providers), ProviderKind::Project);
    }

    #[test]
    fn test_has_same_target() {
        let a = DependencyModel::builder(&net8(), "NuGetDependency", "A").build();
        let b = DependencyModel::builder(
            &TargetFramework::new(".netcoreapp,version=v8.0", "net8"),
            "NuGetDependency",
            "B",
        )
        .build();
        let c = DependencyModel::builder(&TargetFramework::from_moniker("net472"), "NuGetDependency", "A")
            .build();

        assert!(has_same_target(&a, Some(&b)).unwrap());
        assert!(!has_same_target(&a, Some(&c)).unwrap());
    }

    #[test]
    fn test_has_same_target_requires_other() {
        let a = DependencyModel::builder(&net8(), "NuGetDependency", "A").build();
        let err = has_same_target(&a, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnapshotError>(),
            Some(SnapshotError::InvalidArgument { name: "other" })
        ));
    }

    #[test]
    fn test_top_level_id_without_path() {
        let dependency = DependencyModel::builder(&net8(), "ProjectDependency", "..\\Lib\\Lib.csproj").build();
        assert_eq!(top_level_id(&dependency), dependency.id());
        assert!(top_level_id_equals(&dependency, &dependency.id().to_uppercase()));
    }

    #[test]
    fn test_top_level_id_with_path() {
        let dependency = DependencyModel::builder(&net8(), "ProjectDependency", "..\\Lib\\Lib.csproj")
            .path("/src/Lib/Lib.csproj")
            .build();

        assert_eq!(top_level_id(&dependency), "net8.0\\ProjectDependency\\/src/Lib/Lib.csproj");
        assert!(top_level_id_equals(&dependency, "NET8.0\\projectdependency\\/src/lib/LIB.csproj"));
        assert!(!top_level_id_equals(&dependency, &dependency.id()));
    }
}
