use crate::dependencies::domain::ProviderTypes;
use std::path::PathBuf;

/// ReplayRequest - a batch script to replay and how to interpret it
#[derive(Debug, Clone)]
pub struct ReplayRequest {
    /// Path to the batch script (YAML, or JSON by `.json` extension)
    pub script_path: PathBuf,
    /// Provider type names used to classify reported dependencies
    pub provider_types: ProviderTypes,
}

impl ReplayRequest {
    pub fn new(script_path: impl Into<PathBuf>, provider_types: ProviderTypes) -> Self {
        Self {
            script_path: script_path.into(),
            provider_types,
        }
    }
}
