use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every batch applied, nothing unresolved (or not checked)
    Success = 0,
    /// Some dependency displays as unresolved and `--fail-on-unresolved` was given
    UnresolvedDependencies = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable script, unknown target, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedDependencies => write!(f, "Unresolved Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while maintaining dependency snapshots.
///
/// Identity construction and the state derivations are total, so most
/// variants belong to the layers around the core: script loading, output
/// and batch application.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A required argument was absent. This is a caller contract violation.
    #[error("Invalid argument: '{name}' must be provided")]
    InvalidArgument { name: &'static str },

    #[error("Dependency '{dependency}' targets '{actual}' but the snapshot targets '{expected}'")]
    TargetMismatch {
        dependency: String,
        expected: String,
        actual: String,
    },

    #[error("Unknown target framework: {target}\n\n💡 Hint: Declare the target under 'targets' before referencing it from a batch")]
    UnknownTarget { target: String },

    #[error("Applying changes for target '{target}' was cancelled")]
    Cancelled { target: String },

    #[error("Failed to parse batch script: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the script is valid YAML or JSON")]
    ScriptParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for script and config contents
    #[error("Validation error: {message}")]
    Validation { message: String },
}
