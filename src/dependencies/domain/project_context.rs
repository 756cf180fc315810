use super::TargetFramework;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// TargetedProjectContext - the project as seen by one target framework
///
/// Owned by the snapshot store alongside that target's snapshot. Only the
/// display name, the project file path and the build outcome change over
/// the lifetime of a context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetedProjectContext {
    display_name: String,
    project_file_path: PathBuf,
    target_framework: TargetFramework,
    target_path: Option<PathBuf>,
    last_design_time_build_succeeded: bool,
}

impl TargetedProjectContext {
    pub fn new(
        display_name: impl Into<String>,
        project_file_path: impl Into<PathBuf>,
        target_framework: TargetFramework,
        target_path: Option<PathBuf>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            project_file_path: project_file_path.into(),
            target_framework,
            target_path,
            last_design_time_build_succeeded: false,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn project_file_path(&self) -> &Path {
        &self.project_file_path
    }

    pub fn set_project_file_path(&mut self, project_file_path: impl Into<PathBuf>) {
        self.project_file_path = project_file_path.into();
    }

    pub fn target_framework(&self) -> &TargetFramework {
        &self.target_framework
    }

    /// Output assembly of this target, if known
    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }

    pub fn last_design_time_build_succeeded(&self) -> bool {
        self.last_design_time_build_succeeded
    }

    pub fn set_last_design_time_build_succeeded(&mut self, succeeded: bool) {
        self.last_design_time_build_succeeded = succeeded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_not_built() {
        let context = TargetedProjectContext::new(
            "App (net8.0)",
            "/src/App/App.csproj",
            TargetFramework::from_moniker("net8.0"),
            Some(PathBuf::from("bin/Debug/net8.0/App.dll")),
        );

        assert_eq!(context.display_name(), "App (net8.0)");
        assert_eq!(context.project_file_path(), Path::new("/src/App/App.csproj"));
        assert_eq!(context.target_path(), Some(Path::new("bin/Debug/net8.0/App.dll")));
        assert!(!context.last_design_time_build_succeeded());
    }

    #[test]
    fn test_setters() {
        let mut context = TargetedProjectContext::new(
            "App",
            "/src/App/App.csproj",
            TargetFramework::from_moniker("net8.0"),
            None,
        );
        context.set_display_name("Renamed");
        context.set_project_file_path("/src/Renamed/Renamed.csproj");
        context.set_last_design_time_build_succeeded(true);

        assert_eq!(context.display_name(), "Renamed");
        assert_eq!(context.project_file_path(), Path::new("/src/Renamed/Renamed.csproj"));
        assert!(context.last_design_time_build_succeeded());
    }
}
