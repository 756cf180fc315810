pub mod change_set;
pub mod dependency_model;
pub mod icon;
pub mod identity;
pub mod project_context;
pub mod provider_types;
pub mod target_framework;
pub mod targeted_snapshot;
pub mod tree_flags;
pub mod view_model;

pub use change_set::ChangeSet;
pub use dependency_model::{DependencyModel, DependencyModelBuilder};
pub use icon::{IconHandle, IconSet};
pub use identity::{id_equals, make_id, DependencyIdentity, RemovedDependencyIdentity};
pub use project_context::TargetedProjectContext;
pub use provider_types::{ProviderKind, ProviderTypes};
pub use target_framework::TargetFramework;
pub use targeted_snapshot::{TargetedSnapshot, UnresolvedDependencyCheck};
pub use tree_flags::TreeFlags;
pub use view_model::DependencyViewModel;
