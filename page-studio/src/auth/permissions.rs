//! Permission Definitions
//!
//! Static, build-time capability record per role. The dynamic visibility map
//! can only narrow what is listed here, never widen it.

use shared::models::{ModuleId, Role};

/// Static capability record for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePermissions {
    pub allowed_modules: &'static [ModuleId],
    pub can_delete: bool,
    pub can_manage_users: bool,
}

impl RolePermissions {
    pub fn allows(&self, module: ModuleId) -> bool {
        self.allowed_modules.contains(&module)
    }
}

/// Super admin: every module, every sensitive action
pub const SUPER_ADMIN_PERMISSIONS: RolePermissions = RolePermissions {
    allowed_modules: &ModuleId::ALL,
    can_delete: true,
    can_manage_users: true,
};

/// Admin: everything except user management
pub const ADMIN_PERMISSIONS: RolePermissions = RolePermissions {
    allowed_modules: &[
        ModuleId::Dashboard,
        ModuleId::Navigation,
        ModuleId::Products,
        ModuleId::Categories,
        ModuleId::BrandPages,
        ModuleId::Media,
        ModuleId::Settings,
    ],
    can_delete: true,
    can_manage_users: false,
};

/// Editor: content modules only, no deletes
pub const EDITOR_PERMISSIONS: RolePermissions = RolePermissions {
    allowed_modules: &[
        ModuleId::Dashboard,
        ModuleId::Navigation,
        ModuleId::Products,
        ModuleId::BrandPages,
        ModuleId::Media,
    ],
    can_delete: false,
    can_manage_users: false,
};

pub fn static_permissions(role: Role) -> &'static RolePermissions {
    match role {
        Role::SuperAdmin => &SUPER_ADMIN_PERMISSIONS,
        Role::Admin => &ADMIN_PERMISSIONS,
        Role::Editor => &EDITOR_PERMISSIONS,
    }
}

/// Not affected by the visibility map
pub fn can_delete(role: Role) -> bool {
    static_permissions(role).can_delete
}

/// Not affected by the visibility map
pub fn can_manage_users(role: Role) -> bool {
    static_permissions(role).can_manage_users
}
