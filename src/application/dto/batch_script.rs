//! Batch script schema
//!
//! A batch script describes a project, its target frameworks and a sequence
//! of change batches. Each batch lists one or more reporters; during replay
//! every reporter runs on its own thread against the batch's change set.
//!
//! ```yaml
//! project:
//!   display_name: App
//!   project_file_path: /src/App/App.csproj
//! targets:
//!   - full_name: .NETCoreApp,Version=v8.0
//!     short_name: net8.0
//! batches:
//!   - target: net8.0
//!     kind: evaluation
//!     reporters:
//!       - added:
//!           - provider_type: NuGetDependency
//!             id: Serilog/3.1.1
//!         removed:
//!           - provider_type: NuGetDependency
//!             id: log4net/2.0.15
//! ```

use super::BatchKind;
use crate::dependencies::domain::{
    DependencyModel, IconSet, ProviderTypes, TargetFramework, TreeFlags,
};
use crate::dependencies::services::{to_resolved, to_unresolved};
use crate::shared::error::SnapshotError;
use crate::shared::text::eq_ignore_case;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchScript {
    pub project: ScriptProject,
    pub targets: Vec<ScriptTarget>,
    #[serde(default)]
    pub batches: Vec<ScriptBatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptProject {
    pub display_name: String,
    pub project_file_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptTarget {
    pub full_name: String,
    /// Moniker; defaults to the full name
    pub short_name: Option<String>,
    pub target_path: Option<PathBuf>,
}

impl ScriptTarget {
    pub fn target_framework(&self) -> TargetFramework {
        match &self.short_name {
            Some(short_name) => TargetFramework::new(&self.full_name, short_name),
            None => TargetFramework::from_moniker(&self.full_name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptBatch {
    /// Full name or moniker of a declared target
    pub target: String,
    #[serde(default)]
    pub kind: BatchKind,
    /// Whether the target is the active context; defaults to "first declared target"
    pub active: Option<bool>,
    #[serde(default)]
    pub reporters: Vec<ScriptReporter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptReporter {
    #[serde(default)]
    pub added: Vec<ScriptDependency>,
    #[serde(default)]
    pub removed: Vec<ScriptRemoval>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptDependency {
    pub provider_type: String,
    pub id: String,
    pub caption: Option<String>,
    pub path: Option<String>,
    pub version: Option<String>,
    #[serde(default = "default_true")]
    pub resolved: bool,
    #[serde(default = "default_true")]
    pub top_level: bool,
    #[serde(default)]
    pub implicit: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub schema_name: Option<String>,
    pub schema_item_type: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub dependency_ids: Vec<String>,
    /// Overrides the provider's built-in icons
    pub icons: Option<IconSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptRemoval {
    pub provider_type: String,
    pub id: String,
}

fn default_true() -> bool {
    true
}

impl ScriptDependency {
    /// Builds the reported model for `target_framework`
    ///
    /// Resolution flags are normalized through the state transitions, so a
    /// script only needs to state `resolved`.
    pub fn to_model(&self, target_framework: &TargetFramework, providers: &ProviderTypes) -> DependencyModel {
        let icons = self
            .icons
            .unwrap_or_else(|| providers.kind_of(&self.provider_type).default_icons());

        let mut builder = DependencyModel::builder(target_framework, &self.provider_type, &self.id)
            .resolved(self.resolved)
            .top_level(self.top_level)
            .implicit(self.implicit)
            .visible(self.visible)
            .priority(self.priority)
            .icons(icons)
            .properties(self.properties.clone())
            .flags(self.flags.iter().cloned().collect::<TreeFlags>())
            .dependency_ids(self.dependency_ids.iter().cloned());

        if let Some(caption) = &self.caption {
            builder = builder.caption(caption);
        }
        if let Some(path) = &self.path {
            builder = builder.path(path);
        }
        if let Some(version) = &self.version {
            builder = builder.version(version);
        }
        if let Some(schema_name) = &self.schema_name {
            builder = builder.schema_name(schema_name);
        }
        if let Some(schema_item_type) = &self.schema_item_type {
            builder = builder.schema_item_type(schema_item_type);
        }

        let model = builder.build();
        if self.resolved {
            to_resolved(&model, None, None)
        } else {
            to_unresolved(&model, None, None)
        }
    }
}

impl BatchScript {
    /// Checks the script for problems serde cannot express
    ///
    /// # Errors
    /// Returns `SnapshotError::Validation` for empty or duplicate targets
    /// (by full name or by short name) and
    /// for dependencies or removals without a provider type or id, and
    /// `SnapshotError::UnknownTarget` for batches naming an undeclared target.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(validation("at least one target must be declared"));
        }

        let frameworks: Vec<TargetFramework> =
            self.targets.iter().map(ScriptTarget::target_framework).collect();
        for (i, tf) in frameworks.iter().enumerate() {
            if tf.full_name().trim().is_empty() {
                return Err(validation(format!("targets[{}].full_name must not be empty", i)));
            }
            if frameworks[..i].contains(tf) {
                return Err(validation(format!("targets[{}] '{}' is declared twice", i, tf.full_name())));
            }
            if let Some(other) = frameworks[..i]
                .iter()
                .position(|earlier| eq_ignore_case(earlier.short_name(), tf.short_name()))
            {
                return Err(validation(format!(
                    "targets[{}] reuses the short name '{}' of targets[{}]",
                    i,
                    tf.short_name(),
                    other
                )));
            }
        }

        for (b, batch) in self.batches.iter().enumerate() {
            if self.find_target(&batch.target).is_none() {
                return Err(SnapshotError::UnknownTarget {
                    target: batch.target.clone(),
                }
                .into());
            }
            for (r, reporter) in batch.reporters.iter().enumerate() {
                for (d, dependency) in reporter.added.iter().enumerate() {
                    if dependency.provider_type.trim().is_empty() || dependency.id.trim().is_empty() {
                        return Err(validation(format!(
                            "batches[{}].reporters[{}].added[{}] needs a provider_type and an id",
                            b, r, d
                        )));
                    }
                }
                for (d, removal) in reporter.removed.iter().enumerate() {
                    if removal.provider_type.trim().is_empty() || removal.id.trim().is_empty() {
                        return Err(validation(format!(
                            "batches[{}].reporters[{}].removed[{}] needs a provider_type and an id",
                            b, r, d
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Finds a declared target by full name or moniker, ignoring case
    pub fn find_target(&self, name: &str) -> Option<&ScriptTarget> {
        self.targets.iter().find(|t| {
            eq_ignore_case(&t.full_name, name)
                || t.short_name.as_deref().is_some_and(|s| eq_ignore_case(s, name))
        })
    }
}

fn validation(message: impl Into<String>) -> anyhow::Error {
    SnapshotError::Validation {
        message: message.into(),
    }
    .into()
}
