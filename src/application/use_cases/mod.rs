/// Use cases module containing application business logic orchestration
mod apply_changes;
mod replay_script;

pub use apply_changes::ApplyDependencyChangesUseCase;
pub use replay_script::ReplayScriptUseCase;
