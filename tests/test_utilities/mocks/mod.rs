/// Mock implementations for testing
mod mock_batch_script_reader;
mod mock_progress_reporter;
mod mock_workspace_context;

pub use mock_batch_script_reader::MockBatchScriptReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_workspace_context::{AppliedCall, MockWorkspaceContext};
