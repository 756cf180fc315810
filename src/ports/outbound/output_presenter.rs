use crate::shared::Result;

/// OutputPresenter port for presenting the formatted snapshot
///
/// Abstracts where the rendered output goes (stdout, a file, ...).
pub trait OutputPresenter {
    /// Presents the formatted content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
