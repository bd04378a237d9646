//! Sidebar entries and dashboard quick actions, filtered by module access

use serde::Serialize;
use shared::models::{ModuleId, ModuleVisibilityMap, Role};

use super::access::resolve_module_access;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub module: ModuleId,
    pub label: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub module: ModuleId,
    pub label: &'static str,
    pub path: String,
}

/// (module, label, path relative to the role's base path)
const QUICK_ACTIONS: &[(ModuleId, &str, &str)] = &[
    (ModuleId::BrandPages, "Create brand page", "brand-pages/new"),
    (ModuleId::Products, "Add product", "products/new"),
    (ModuleId::Media, "Upload media", "media/upload"),
    (ModuleId::Navigation, "Edit navigation", "navigation"),
    (ModuleId::Users, "Invite user", "users/invite"),
    (ModuleId::Settings, "Site settings", "settings"),
];

fn module_path(role: Role, module: ModuleId) -> String {
    if module.is_dashboard() {
        role.base_path().to_string()
    } else {
        format!("{}/{}", role.base_path(), module.as_str())
    }
}

pub fn navigation(role: Role, visibility: &ModuleVisibilityMap) -> Vec<NavItem> {
    ModuleId::ALL
        .into_iter()
        .filter(|m| resolve_module_access(role, *m, visibility).is_visible())
        .map(|module| NavItem {
            module,
            label: module.label(),
            path: module_path(role, module),
        })
        .collect()
}

pub fn quick_actions(role: Role, visibility: &ModuleVisibilityMap) -> Vec<QuickAction> {
    QUICK_ACTIONS
        .iter()
        .filter(|(m, _, _)| resolve_module_access(role, *m, visibility).is_visible())
        .map(|(module, label, rel)| QuickAction {
            module: *module,
            label: *label,
            path: format!("{}/{}", role.base_path(), rel),
        })
        .collect()
}
