use super::icon::{IconHandle, IconSet};
use crate::shared::text::eq_ignore_case;
use serde::{Deserialize, Serialize};

/// ProviderTypes - read-only registry of the well-known provider type names
///
/// Built once at startup (defaults, optionally overridden by the config
/// file) and passed explicitly to whatever needs to classify dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderTypes {
    pub package: String,
    pub project: String,
    pub assembly: String,
    pub sdk: String,
    pub analyzer: String,
    pub com: String,
    pub framework: String,
}

/// Coarse category of a provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Package,
    Project,
    Assembly,
    Sdk,
    Analyzer,
    Com,
    Framework,
    Other,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Package => "package",
            ProviderKind::Project => "project",
            ProviderKind::Assembly => "assembly",
            ProviderKind::Sdk => "sdk",
            ProviderKind::Analyzer => "analyzer",
            ProviderKind::Com => "com",
            ProviderKind::Framework => "framework",
            ProviderKind::Other => "other",
        }
    }

    /// Built-in icons for this kind of dependency
    pub fn default_icons(&self) -> IconSet {
        let (icon, expanded) = match self {
            ProviderKind::Package => (1, 2),
            ProviderKind::Project => (3, 3),
            ProviderKind::Assembly => (4, 4),
            ProviderKind::Sdk => (5, 6),
            ProviderKind::Analyzer => (7, 7),
            ProviderKind::Com => (8, 8),
            ProviderKind::Framework => (9, 10),
            ProviderKind::Other => (11, 11),
        };
        IconSet::new(
            IconHandle::builtin(icon),
            IconHandle::builtin(expanded),
            IconHandle::builtin(UNRESOLVED_ICON),
            IconHandle::builtin(UNRESOLVED_ICON),
        )
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const UNRESOLVED_ICON: i32 = 99;

impl Default for ProviderTypes {
    fn default() -> Self {
        Self {
            package: "NuGetDependency".to_string(),
            project: "ProjectDependency".to_string(),
            assembly: "AssemblyDependency".to_string(),
            sdk: "SdkDependency".to_string(),
            analyzer: "AnalyzerDependency".to_string(),
            com: "ComDependency".to_string(),
            framework: "FrameworkDependency".to_string(),
        }
    }
}

impl ProviderTypes {
    /// Classifies a provider type, ignoring case
    pub fn kind_of(&self, provider_type: &str) -> ProviderKind {
        [
            (&self.package, ProviderKind::Package),
            (&self.project, ProviderKind::Project),
            (&self.assembly, ProviderKind::Assembly),
            (&self.sdk, ProviderKind::Sdk),
            (&self.analyzer, ProviderKind::Analyzer),
            (&self.com, ProviderKind::Com),
            (&self.framework, ProviderKind::Framework),
        ]
        .into_iter()
        .find(|(name, _)| eq_ignore_case(name, provider_type))
        .map(|(_, kind)| kind)
        .unwrap_or(ProviderKind::Other)
    }

    /// Checks that every provider type name is non-empty and distinct
    pub fn validate(&self) -> crate::shared::Result<()> {
        let names = [
            ("package", &self.package),
            ("project", &self.project),
            ("assembly", &self.assembly),
            ("sdk", &self.sdk),
            ("analyzer", &self.analyzer),
            ("com", &self.com),
            ("framework", &self.framework),
        ];

        for (i, (field, name)) in names.iter().enumerate() {
            if name.trim().is_empty() {
                anyhow::bail!("provider_types.{} must not be empty", field);
            }
            if let Some((other, _)) = names[..i].iter().find(|(_, n)| eq_ignore_case(n, name)) {
                anyhow::bail!(
                    "provider_types.{} and provider_types.{} both use '{}'",
                    other,
                    field,
                    name
                );
            }
        }
        Ok(())
    }
}
