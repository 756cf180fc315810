use crate::application::read_models::{DependencyNodeView, SnapshotReadModel, TargetView};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// TextFormatter adapter rendering each target's dependencies as a tree
///
/// Dependencies that show as unresolved are marked with `⚠`; colors are
/// optional so output can be piped or compared.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn render_target(&self, output: &mut String, target: &TargetView) {
        let heading = format!("{} ({})", target.short_name, target.full_name);
        let heading = if self.color {
            heading.bold().to_string()
        } else {
            heading
        };

        output.push_str(&format!(
            "{} v{} - {} dependencies, {} unresolved",
            heading, target.version, target.dependency_count, target.unresolved_count
        ));
        if target.last_design_time_build_succeeded {
            output.push_str(", last build succeeded");
        }
        output.push('\n');

        if target.dependencies.is_empty() {
            output.push_str("  (no dependencies)\n");
            return;
        }

        let count = target.dependencies.len();
        for (i, node) in target.dependencies.iter().enumerate() {
            self.render_node(output, node, "", i + 1 == count);
        }
    }

    fn render_node(&self, output: &mut String, node: &DependencyNodeView, prefix: &str, last: bool) {
        output.push_str(prefix);
        output.push_str(if last { LAST_BRANCH } else { BRANCH });
        output.push_str(&self.label(node));
        output.push('\n');

        let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.render_node(output, child, &child_prefix, i + 1 == count);
        }
    }

    fn label(&self, node: &DependencyNodeView) -> String {
        let mut caption = node.caption.clone();
        if let Some(version) = node.version.as_deref() {
            if !caption.contains(version) {
                caption = format!("{} {}", caption, version);
            }
        }

        let caption = match (node.show_as_resolved, self.color) {
            (true, _) => caption,
            (false, true) => format!("⚠ {}", caption).red().to_string(),
            (false, false) => format!("⚠ {}", caption),
        };

        let mut label = format!("{} [{}]", caption, node.kind);
        if node.implicit {
            label.push_str(" (implicit)");
        }
        let marker = if node.cycle {
            Some(" ↺ cycle")
        } else if node.repeated {
            Some(" (see above)")
        } else {
            None
        };
        if let Some(marker) = marker {
            if self.color {
                label.push_str(&marker.yellow().to_string());
            } else {
                label.push_str(marker);
            }
        }
        label
    }
}

impl SnapshotFormatter for TextFormatter {
    fn format(&self, model: &SnapshotReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "{} ({})\n",
            model.project.display_name, model.project.project_file_path
        ));

        for target in &model.targets {
            output.push('\n');
            self.render_target(&mut output, target);
        }

        Ok(output)
    }
}
