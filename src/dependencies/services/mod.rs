pub mod dependency_state;
pub mod snapshot_query;
mod snapshot_builder;

pub use dependency_state::{
    has_same_target, is_package, is_project, resolved_flags, to_resolved, to_unresolved,
    top_level_id, top_level_id_equals, unresolved_flags,
};
pub use snapshot_builder::SnapshotBuilder;
pub use snapshot_query::{
    get_icons, has_unresolved_dependency, is_or_has_unresolved_dependency, to_view_model,
};
