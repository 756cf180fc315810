/// Workspace adapters receiving published snapshots
mod in_memory_workspace_context;

pub use in_memory_workspace_context::{AppliedState, InMemoryWorkspaceContext};
