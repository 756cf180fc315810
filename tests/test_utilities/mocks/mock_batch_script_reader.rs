use depsnap::application::dto::BatchScript;
use depsnap::prelude::*;
use std::path::Path;

/// Mock BatchScriptReader serving a YAML script from memory
pub struct MockBatchScriptReader {
    content: String,
}

impl MockBatchScriptReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl BatchScriptReader for MockBatchScriptReader {
    fn read_script(&self, _path: &Path) -> Result<BatchScript> {
        Ok(serde_yaml_ng::from_str(&self.content)?)
    }
}
