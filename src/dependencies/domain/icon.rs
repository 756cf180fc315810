use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog holding the icons of the built-in dependency providers
pub const DEPENDENCY_ICON_CATALOG: Uuid = Uuid::from_u128(0x6d7b_5c56_1b0e_4c4b_a2a6_2f3c_53e5_d1a0);

/// IconHandle - a reference to an image in an icon catalog
///
/// Handles are resolved to pixels by the renderer; here they are plain
/// values copied into view models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IconHandle {
    pub catalog: Uuid,
    pub id: i32,
}

impl IconHandle {
    pub const fn new(catalog: Uuid, id: i32) -> Self {
        Self { catalog, id }
    }

    /// Icon from the built-in dependency catalog
    pub const fn builtin(id: i32) -> Self {
        Self::new(DEPENDENCY_ICON_CATALOG, id)
    }
}

impl std::fmt::Display for IconHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.catalog, self.id)
    }
}

/// The four icons a dependency can be displayed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconSet {
    pub icon: IconHandle,
    pub expanded_icon: IconHandle,
    pub unresolved_icon: IconHandle,
    pub unresolved_expanded_icon: IconHandle,
}

impl IconSet {
    pub const fn new(
        icon: IconHandle,
        expanded_icon: IconHandle,
        unresolved_icon: IconHandle,
        unresolved_expanded_icon: IconHandle,
    ) -> Self {
        Self {
            icon,
            expanded_icon,
            unresolved_icon,
            unresolved_expanded_icon,
        }
    }

    /// Same icon whether collapsed or expanded
    pub const fn uniform(icon: IconHandle, unresolved_icon: IconHandle) -> Self {
        Self::new(icon, icon, unresolved_icon, unresolved_icon)
    }
}
