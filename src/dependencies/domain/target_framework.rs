use crate::shared::text::{eq_ignore_case, hash_ignore_case};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Full name used by the catch-all target
const ANY_TARGET: &str = "any";

/// TargetFramework value object
///
/// Identifies one build configuration's target (for example
/// `.NETStandard,Version=v2.0`, moniker `netstandard2.0`). Equality is by
/// value of the full name, ignoring case; the short name is only used when
/// rendering dependency ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetFramework {
    full_name: String,
    short_name: String,
}

impl TargetFramework {
    pub fn new(full_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
        }
    }

    /// Creates a target whose full name and moniker are the same string
    pub fn from_moniker(moniker: impl Into<String>) -> Self {
        let moniker = moniker.into();
        Self::new(moniker.clone(), moniker)
    }

    /// The catch-all target used when a project does not multi-target
    pub fn any() -> Self {
        Self::from_moniker(ANY_TARGET)
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns true if this is the catch-all target
    pub fn is_any(&self) -> bool {
        eq_ignore_case(&self.full_name, ANY_TARGET)
    }

    /// Returns true if `name` matches either the full name or the moniker
    pub fn matches_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.full_name, name) || eq_ignore_case(&self.short_name, name)
    }
}

impl PartialEq for TargetFramework {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.full_name, &other.full_name)
    }
}

impl Eq for TargetFramework {}

impl Hash for TargetFramework {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.full_name, state);
    }
}

impl std::fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name)
    }
}
