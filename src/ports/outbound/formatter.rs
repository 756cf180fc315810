use crate::application::read_models::SnapshotReadModel;
use crate::shared::Result;

/// SnapshotFormatter port for rendering the dependency tree of every target
pub trait SnapshotFormatter {
    /// Formats the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SnapshotReadModel) -> Result<String>;
}
