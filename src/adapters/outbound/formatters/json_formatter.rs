use crate::application::read_models::SnapshotReadModel;
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Version of the JSON document layout
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "formatVersion")]
    format_version: u32,
    tool: Tool,
    #[serde(flatten)]
    model: &'a SnapshotReadModel,
}

#[derive(Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

/// JsonFormatter adapter serializing the read model with `serde_json`
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for JsonFormatter {
    fn format(&self, model: &SnapshotReadModel) -> Result<String> {
        let document = Document {
            format_version: FORMAT_VERSION,
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            model,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SnapshotReadModelBuilder;
    use crate::dependencies::domain::{
        DependencyModel, ProviderKind, ProviderTypes, TargetFramework, TargetedProjectContext, TargetedSnapshot,
    };
    use crate::dependencies::services::SnapshotBuilder;
    use std::sync::Arc;

    #[test]
    fn test_json_document_shape() {
        let tf = TargetFramework::from_moniker("net472");
        let broken = DependencyModel::builder(&tf, "AssemblyDependency", "System.Xml")
            .icons(ProviderKind::Assembly.default_icons())
            .resolved(false)
            .build();
        let snapshot =
            SnapshotBuilder::fold(&TargetedSnapshot::empty(tf.clone()), vec![broken], vec![]).unwrap();
        let model = SnapshotReadModelBuilder::build(
            &[(
                TargetedProjectContext::new("Legacy", "Legacy.csproj", tf, None),
                Arc::new(snapshot),
            )],
            &ProviderTypes::default(),
        );

        let json = JsonFormatter::new().format(&model).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["formatVersion"], 1);
        assert_eq!(value["tool"]["name"], "depsnap");
        assert_eq!(value["project"]["display_name"], "Legacy");
        let node = &value["targets"][0]["dependencies"][0];
        assert_eq!(node["kind"], "assembly");
        assert_eq!(node["show_as_resolved"], false);
        assert_eq!(node["icon"]["id"], 99);
        assert!(node.get("children").is_none());
        assert!(node.get("cycle").is_none());
    }
}
