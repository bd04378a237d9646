//! Module access resolution
//!
//! The one place that composes static role permissions with the shared
//! visibility map. Sidebar, dashboard and the page lifecycle all consume
//! [`resolve_module_access`]; none of them re-implement the precedence.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{ModuleId, ModuleVisibilityMap, Role};

use super::permissions::{can_delete, can_manage_users, static_permissions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleAccess {
    Visible,
    Hidden,
}

impl ModuleAccess {
    pub fn is_visible(&self) -> bool {
        matches!(self, ModuleAccess::Visible)
    }

    fn from_override(visible: Option<bool>) -> Self {
        if visible == Some(false) {
            ModuleAccess::Hidden
        } else {
            ModuleAccess::Visible
        }
    }
}

/// Two-tier resolution:
///
/// 1. dashboard is always visible
/// 2. the static role permission is a ceiling
/// 3. the elevated role defaults to visible unless the map hides the module
/// 4. other roles follow a recorded override, and otherwise keep their
///    static allowance
pub fn resolve_module_access(
    role: Role,
    module: ModuleId,
    visibility: &ModuleVisibilityMap,
) -> ModuleAccess {
    if module.is_dashboard() {
        return ModuleAccess::Visible;
    }
    if !static_permissions(role).allows(module) {
        return ModuleAccess::Hidden;
    }
    if role.is_elevated() {
        return ModuleAccess::from_override(visibility.get(module));
    }
    if visibility.contains(module) {
        return ModuleAccess::from_override(visibility.get(module));
    }
    ModuleAccess::Visible
}

/// Visible modules for `role`, in sidebar order
pub fn visible_modules(role: Role, visibility: &ModuleVisibilityMap) -> Vec<ModuleId> {
    ModuleId::ALL
        .into_iter()
        .filter(|m| resolve_module_access(role, *m, visibility).is_visible())
        .collect()
}

/// Creating, cloning and editing brand pages needs the brand-pages module
pub fn can_create_pages(role: Role, visibility: &ModuleVisibilityMap) -> bool {
    resolve_module_access(role, ModuleId::BrandPages, visibility).is_visible()
}

/// Refuse with `PermissionDenied` unless `module` resolves visible
pub fn require_module(
    role: Role,
    module: ModuleId,
    visibility: &ModuleVisibilityMap,
) -> AppResult<()> {
    if resolve_module_access(role, module, visibility).is_visible() {
        Ok(())
    } else {
        Err(AppError::permission_denied(format!(
            "Module {} is not available to role {}",
            module, role
        ))
        .with_detail("module", module.as_str())
        .with_detail("role", role.as_str()))
    }
}

/// Everything an actor may see or do, resolved once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub role: Role,
    pub modules: Vec<ModuleId>,
    pub can_create_pages: bool,
    pub can_delete: bool,
    pub can_manage_users: bool,
    pub can_manage_visibility: bool,
}

pub fn capabilities(role: Role, visibility: &ModuleVisibilityMap) -> Capabilities {
    Capabilities {
        role,
        modules: visible_modules(role, visibility),
        can_create_pages: can_create_pages(role, visibility),
        can_delete: can_delete(role),
        can_manage_users: can_manage_users(role),
        can_manage_visibility: role.is_elevated(),
    }
}
