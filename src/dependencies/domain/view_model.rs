use super::{DependencyModel, IconHandle, TreeFlags};
use std::collections::BTreeMap;
use std::sync::Arc;

/// DependencyViewModel - what a tree renderer needs to draw one dependency
///
/// Produced by `snapshot_query::to_view_model`. Icons are already chosen
/// from the resolved or unresolved pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyViewModel {
    pub caption: String,
    pub file_path: String,
    pub schema_name: Option<String>,
    pub schema_item_type: Option<String>,
    pub priority: i32,
    pub icon: IconHandle,
    pub expanded_icon: IconHandle,
    pub properties: BTreeMap<String, String>,
    pub flags: TreeFlags,
    pub show_as_resolved: bool,
    pub original_model: Arc<DependencyModel>,
}
