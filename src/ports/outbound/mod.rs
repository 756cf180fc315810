/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, the language
/// workspace).
pub mod batch_script_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod workspace_context;

pub use batch_script_reader::BatchScriptReader;
pub use formatter::SnapshotFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use workspace_context::{ProjectUpdate, WorkspaceContextApplier};
