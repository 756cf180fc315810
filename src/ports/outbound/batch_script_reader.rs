use crate::application::dto::BatchScript;
use crate::shared::Result;
use std::path::Path;

/// BatchScriptReader port for loading a batch script
///
/// This port abstracts where replayed batches come from, so the replay use
/// case can be driven from a file or from memory.
pub trait BatchScriptReader {
    /// Reads and parses the batch script at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not a well-formed batch script
    fn read_script(&self, path: &Path) -> Result<BatchScript>;
}
