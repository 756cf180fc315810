//! depsnap - per-target dependency snapshots for multi-targeted projects
//!
//! Dependency providers report added and removed dependencies for a target
//! framework into a [`ChangeSet`](dependencies::domain::ChangeSet). Once a
//! batch is complete it is drained into a new immutable
//! [`TargetedSnapshot`](dependencies::domain::TargetedSnapshot), handed to the
//! workspace, and rendered as a tree in which a dependency only shows as
//! resolved when everything beneath it resolved too.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependencies`): dependency models, identities, change sets and snapshots
//! - **Application Layer** (`application`): use cases, DTOs, read models and the snapshot store
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depsnap::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let use_case = ReplayScriptUseCase::new(
//!     FileSystemReader::new(),
//!     Arc::new(SnapshotStore::new()),
//!     InMemoryWorkspaceContext::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ReplayRequest::new("batches.yml", ProviderTypes::default()))?;
//! let model = SnapshotReadModelBuilder::build(&response.targets, &ProviderTypes::default());
//! println!("{}", TextFormatter::new(false).format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependencies;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::workspace::InMemoryWorkspaceContext;
    pub use crate::application::dto::{
        BatchKind, ChangeBatchRequest, ChangeBatchResponse, ReplayRequest, ReplayResponse,
    };
    pub use crate::application::read_models::{SnapshotReadModel, SnapshotReadModelBuilder};
    pub use crate::application::snapshot_store::SnapshotStore;
    pub use crate::application::use_cases::{ApplyDependencyChangesUseCase, ReplayScriptUseCase};
    pub use crate::dependencies::domain::{
        ChangeSet, DependencyIdentity, DependencyModel, ProviderTypes, RemovedDependencyIdentity,
        TargetFramework, TargetedProjectContext, TargetedSnapshot,
    };
    pub use crate::dependencies::services::{
        has_unresolved_dependency, is_or_has_unresolved_dependency, to_resolved, to_unresolved,
        to_view_model,
    };
    pub use crate::ports::outbound::{
        BatchScriptReader, OutputPresenter, ProgressReporter, ProjectUpdate, SnapshotFormatter,
        WorkspaceContextApplier,
    };
    pub use crate::shared::Result;
}
