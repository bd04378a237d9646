//! Module and visibility map models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Feature area subject to visibility and permission gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    /// Always visible, never gated
    Dashboard,
    Navigation,
    Products,
    Categories,
    BrandPages,
    Media,
    Users,
    Settings,
}

impl ModuleId {
    /// Sidebar order
    pub const ALL: [ModuleId; 8] = [
        ModuleId::Dashboard,
        ModuleId::Navigation,
        ModuleId::Products,
        ModuleId::Categories,
        ModuleId::BrandPages,
        ModuleId::Media,
        ModuleId::Users,
        ModuleId::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Navigation => "navigation",
            ModuleId::Products => "products",
            ModuleId::Categories => "categories",
            ModuleId::BrandPages => "brand-pages",
            ModuleId::Media => "media",
            ModuleId::Users => "users",
            ModuleId::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::Navigation => "Navigation",
            ModuleId::Products => "Products",
            ModuleId::Categories => "Categories",
            ModuleId::BrandPages => "Brand Pages",
            ModuleId::Media => "Media Library",
            ModuleId::Users => "User Management",
            ModuleId::Settings => "Settings",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, ModuleId::Dashboard)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown module: {s}"))
    }
}

/// Shared module → visible override document
///
/// A missing key means "use the role default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleVisibilityMap(BTreeMap<ModuleId, bool>);

impl ModuleVisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded override, if any
    pub fn get(&self, module: ModuleId) -> Option<bool> {
        self.0.get(&module).copied()
    }

    pub fn contains(&self, module: ModuleId) -> bool {
        self.0.contains_key(&module)
    }

    /// True only when an override explicitly hides the module
    pub fn is_hidden(&self, module: ModuleId) -> bool {
        self.get(module) == Some(false)
    }

    pub fn set(&mut self, module: ModuleId, visible: bool) {
        self.0.insert(module, visible);
    }

    pub fn remove(&mut self, module: ModuleId) -> Option<bool> {
        self.0.remove(&module)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ModuleId, bool)> for ModuleVisibilityMap {
    fn from_iter<I: IntoIterator<Item = (ModuleId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_round_trip_str() {
        for m in ModuleId::ALL {
            assert_eq!(m.as_str().parse::<ModuleId>().unwrap(), m);
        }
        assert!("billing".parse::<ModuleId>().is_err());
    }

    #[test]
    fn test_visibility_map_serializes_as_plain_object() {
        let map: ModuleVisibilityMap =
            [(ModuleId::BrandPages, false), (ModuleId::Media, true)]
                .into_iter()
                .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"brand-pages":false,"media":true}"#);

        let parsed: ModuleVisibilityMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_absent_key_is_not_hidden() {
        let map = ModuleVisibilityMap::new();
        assert!(!map.is_hidden(ModuleId::Products));
        assert_eq!(map.get(ModuleId::Products), None);
    }
}
