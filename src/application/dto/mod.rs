/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use cases and the adapters, keeping the
/// domain layer free of input and output concerns.
mod batch_script;
mod change_batch_request;
mod change_batch_response;
mod output_format;
mod replay_request;

pub use batch_script::{
    BatchScript, ScriptBatch, ScriptDependency, ScriptProject, ScriptRemoval, ScriptReporter,
    ScriptTarget,
};
pub use change_batch_request::{BatchKind, ChangeBatchRequest};
pub use change_batch_response::{ChangeBatchResponse, ReplayResponse};
pub use output_format::OutputFormat;
pub use replay_request::ReplayRequest;
