use super::identity::{id_equals, make_id, DependencyIdentity};
use crate::shared::text::eq_ignore_case;
use super::{IconHandle, IconSet, TargetFramework, TreeFlags};
use std::collections::BTreeMap;

/// Default ordering weight for dependencies that do not specify one
pub const DEFAULT_PRIORITY: i32 = 0;

/// DependencyModel value object - one discovered dependency edge
///
/// Models are immutable. Resolution changes go through
/// `services::dependency_state`, which returns new instances.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyModel {
    identity: DependencyIdentity,
    path: Option<String>,
    caption: String,
    version: Option<String>,
    resolved: bool,
    top_level: bool,
    implicit: bool,
    visible: bool,
    schema_name: Option<String>,
    schema_item_type: Option<String>,
    priority: i32,
    icons: IconSet,
    properties: BTreeMap<String, String>,
    flags: TreeFlags,
    dependency_ids: Vec<String>,
}

impl DependencyModel {
    /// Starts building a model for the item `id` reported by `provider_type`
    pub fn builder(
        target_framework: &TargetFramework,
        provider_type: impl Into<String>,
        id: impl Into<String>,
    ) -> DependencyModelBuilder {
        DependencyModelBuilder::new(target_framework, provider_type.into(), id.into())
    }

    pub fn identity(&self) -> &DependencyIdentity {
        &self.identity
    }

    /// Rendered id of this dependency
    pub fn id(&self) -> String {
        self.identity.id()
    }

    /// The item spec the dependency was reported with
    pub fn original_item_spec(&self) -> &str {
        self.identity.item_spec()
    }

    pub fn target_framework(&self) -> &TargetFramework {
        self.identity.target_framework()
    }

    /// Id using the resolved path instead of the reported item spec
    ///
    /// Falls back to `id()` when the dependency has no path.
    pub fn top_level_id(&self) -> String {
        match self.path() {
            Some(path) => make_id(self.target_framework(), self.provider_type(), path).id(),
            None => self.id(),
        }
    }

    /// Returns true if `id` equals `top_level_id()`, ignoring case
    pub fn top_level_id_equals(&self, id: &str) -> bool {
        match self.path() {
            Some(path) => id_equals(id, self.target_framework(), self.provider_type(), path),
            None => eq_ignore_case(&self.id(), id),
        }
    }

    pub fn provider_type(&self) -> &str {
        self.identity.provider_type()
    }

    /// Resolved location of the dependency, if evaluation produced one
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    pub fn top_level(&self) -> bool {
        self.top_level
    }

    pub fn implicit(&self) -> bool {
        self.implicit
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn schema_item_type(&self) -> Option<&str> {
        self.schema_item_type.as_deref()
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn icon(&self) -> IconHandle {
        self.icons.icon
    }

    pub fn expanded_icon(&self) -> IconHandle {
        self.icons.expanded_icon
    }

    pub fn unresolved_icon(&self) -> IconHandle {
        self.icons.unresolved_icon
    }

    pub fn unresolved_expanded_icon(&self) -> IconHandle {
        self.icons.unresolved_expanded_icon
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn flags(&self) -> &TreeFlags {
        &self.flags
    }

    /// Item specs of this dependency's children (same provider type and target)
    pub fn dependency_ids(&self) -> &[String] {
        &self.dependency_ids
    }

    /// Copy of this model with the resolution-dependent fields replaced
    ///
    /// `schema_name` and `dependency_ids` are kept when `None`.
    pub(crate) fn with_resolution(
        &self,
        resolved: bool,
        flags: TreeFlags,
        schema_name: Option<String>,
        dependency_ids: Option<Vec<String>>,
    ) -> Self {
        Self {
            resolved,
            flags,
            schema_name: schema_name.or_else(|| self.schema_name.clone()),
            dependency_ids: dependency_ids.unwrap_or_else(|| self.dependency_ids.clone()),
            ..self.clone()
        }
    }
}

/// Builder for DependencyModel
///
/// Only the identity components are required; everything else has the
/// defaults a freshly reported, resolved, top-level dependency would have.
#[derive(Debug, Clone)]
pub struct DependencyModelBuilder {
    model: DependencyModel,
    caption: Option<String>,
}

impl DependencyModelBuilder {
    fn new(target_framework: &TargetFramework, provider_type: String, id: String) -> Self {
        let identity = make_id(target_framework, &provider_type, &id);
        Self {
            model: DependencyModel {
                identity,
                path: None,
                caption: String::new(),
                version: None,
                resolved: true,
                top_level: true,
                implicit: false,
                visible: true,
                schema_name: None,
                schema_item_type: None,
                priority: DEFAULT_PRIORITY,
                icons: IconSet::default(),
                properties: BTreeMap::new(),
                flags: TreeFlags::new(),
                dependency_ids: Vec::new(),
            },
            caption: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.model.path = Some(path.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.model.version = Some(version.into());
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.model.resolved = resolved;
        self
    }

    pub fn top_level(mut self, top_level: bool) -> Self {
        self.model.top_level = top_level;
        self
    }

    pub fn implicit(mut self, implicit: bool) -> Self {
        self.model.implicit = implicit;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.model.visible = visible;
        self
    }

    pub fn schema_name(mut self, schema_name: impl Into<String>) -> Self {
        self.model.schema_name = Some(schema_name.into());
        self
    }

    pub fn schema_item_type(mut self, schema_item_type: impl Into<String>) -> Self {
        self.model.schema_item_type = Some(schema_item_type.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.model.priority = priority;
        self
    }

    pub fn icons(mut self, icons: IconSet) -> Self {
        self.model.icons = icons;
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.model.properties.insert(key.into(), value.into());
        self
    }

    pub fn properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.model.properties = properties;
        self
    }

    pub fn flags(mut self, flags: TreeFlags) -> Self {
        self.model.flags = flags;
        self
    }

    pub fn dependency_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model.dependency_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Finishes the model; the caption defaults to the item spec
    pub fn build(self) -> DependencyModel {
        let mut model = self.model;
        model.caption = self
            .caption
            .unwrap_or_else(|| model.identity.item_spec().to_string());
        model
    }
}
