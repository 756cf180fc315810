use crate::application::dto::BatchScript;
use crate::ports::outbound::BatchScriptReader;
use crate::shared::error::SnapshotError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading batch scripts from disk
///
/// `.json` files are parsed as JSON, everything else as YAML.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_description).map_err(|e| {
            SnapshotError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SnapshotError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl BatchScriptReader for FileSystemReader {
    fn read_script(&self, path: &Path) -> Result<BatchScript> {
        let content = self.safe_read_file(path, "batch script")?;

        let parsed = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml_ng::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|details| {
            SnapshotError::ScriptParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML: &str = "project:\n  display_name: App\n  project_file_path: App.csproj\ntargets:\n  - full_name: net8.0\n";

    #[test]
    fn test_read_yaml_script() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batches.yml");
        fs::write(&path, YAML).unwrap();

        let script = FileSystemReader::new().read_script(&path).unwrap();
        assert_eq!(script.project.display_name, "App");
        assert_eq!(script.targets.len(), 1);
        assert!(script.batches.is_empty());
    }

    #[test]
    fn test_read_json_script_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batches.JSON");
        fs::write(
            &path,
            r#"{"project":{"display_name":"App","project_file_path":"App.csproj"},"targets":[{"full_name":"net8.0"}],"batches":[{"target":"net8.0","kind":"build"}]}"#,
        )
        .unwrap();

        let script = FileSystemReader::new().read_script(&path).unwrap();
        assert_eq!(script.batches.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_script(&dir.path().join("missing.yml"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnapshotError>(),
            Some(SnapshotError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_malformed_script() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batches.yml");
        fs::write(&path, "project: [unclosed").unwrap();

        let err = FileSystemReader::new().read_script(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnapshotError>(),
            Some(SnapshotError::ScriptParseError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.yml");
        let link = dir.path().join("link.yml");
        fs::write(&real, YAML).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = FileSystemReader::new().read_script(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
