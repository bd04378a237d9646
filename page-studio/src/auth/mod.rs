//! Access model
//!
//! - [`permissions`] - static capability record per role
//! - [`access`] - two-tier module access resolution
//! - [`navigation`] - sidebar and dashboard quick actions
//! - [`identity`] - current-actor collaborator

pub mod access;
pub mod identity;
pub mod navigation;
pub mod permissions;

pub use access::{
    Capabilities, ModuleAccess, can_create_pages, capabilities, require_module,
    resolve_module_access, visible_modules,
};
pub use identity::{IdentityProvider, StaticIdentity, require_actor};
pub use navigation::{NavItem, QuickAction, navigation, quick_actions};
pub use permissions::{RolePermissions, can_delete, can_manage_users, static_permissions};
