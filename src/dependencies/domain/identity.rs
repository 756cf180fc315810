use super::TargetFramework;
use crate::shared::text::{eq_ignore_case, hash_ignore_case, strip_prefix_ignore_case};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Separator between the segments of a rendered dependency id
const ID_SEPARATOR: char = '\\';

/// DependencyIdentity value object - the deduplication key for dependencies
///
/// Combines the target framework, the provider type and the item spec the
/// dependency was reported with. Provider type and item spec compare
/// ignoring case; target frameworks compare by their own value equality.
#[derive(Debug, Clone)]
pub struct DependencyIdentity {
    target_framework: TargetFramework,
    provider_type: String,
    item_spec: String,
}

impl DependencyIdentity {
    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn item_spec(&self) -> &str {
        &self.item_spec
    }

    /// Renders the canonical id: `{moniker}\{provider type}\{item spec}`
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Compares this identity against components without building a second identity
    pub fn matches(&self, target_framework: &TargetFramework, provider_type: &str, path: &str) -> bool {
        self.target_framework == *target_framework
            && eq_ignore_case(&self.provider_type, provider_type)
            && eq_ignore_case(&self.item_spec, normalize_item_spec(path))
    }
}

impl PartialEq for DependencyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.target_framework, &other.provider_type, &other.item_spec)
    }
}

impl Eq for DependencyIdentity {}

impl Hash for DependencyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_framework.hash(state);
        hash_ignore_case(&self.provider_type, state);
        hash_ignore_case(&self.item_spec, state);
    }
}

impl std::fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.target_framework.short_name(),
            self.provider_type,
            self.item_spec,
            sep = ID_SEPARATOR
        )
    }
}

/// Builds the identity of a dependency
///
/// Total over its inputs. Trailing separators are trimmed from `path` so
/// that `Foo\` and `Foo` identify the same dependency.
pub fn make_id(target_framework: &TargetFramework, provider_type: &str, path: &str) -> DependencyIdentity {
    DependencyIdentity {
        target_framework: target_framework.clone(),
        provider_type: provider_type.to_string(),
        item_spec: normalize_item_spec(path).to_string(),
    }
}

/// Returns true if `existing_id` is the rendered id of the given components
///
/// Walks `existing_id` segment by segment instead of rendering a new id.
pub fn id_equals(existing_id: &str, target_framework: &TargetFramework, provider_type: &str, path: &str) -> bool {
    let Some(rest) = strip_prefix_ignore_case(existing_id, target_framework.short_name()) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix(ID_SEPARATOR) else {
        return false;
    };
    let Some(rest) = strip_prefix_ignore_case(rest, provider_type) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix(ID_SEPARATOR) else {
        return false;
    };

    eq_ignore_case(rest, normalize_item_spec(path))
}

fn normalize_item_spec(path: &str) -> &str {
    path.trim_end_matches(ID_SEPARATOR)
}

/// Identity of a dependency reported as removed
///
/// Removals carry no target framework: the change set they are reported to
/// already belongs to one target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedDependencyIdentity {
    provider_type: String,
    dependency_id: String,
}

impl RemovedDependencyIdentity {
    pub fn new(provider_type: impl Into<String>, dependency_id: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            dependency_id: dependency_id.into(),
        }
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn dependency_id(&self) -> &str {
        &self.dependency_id
    }

    /// Identity of the removed dependency within the given target
    pub fn to_identity(&self, target_framework: &TargetFramework) -> DependencyIdentity {
        make_id(target_framework, &self.provider_type, &self.dependency_id)
    }
}

impl PartialEq for RemovedDependencyIdentity {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.provider_type, &other.provider_type)
            && eq_ignore_case(&self.dependency_id, &other.dependency_id)
    }
}

impl Eq for RemovedDependencyIdentity {}

impl Hash for RemovedDependencyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.provider_type, state);
        hash_ignore_case(&self.dependency_id, state);
    }
}
