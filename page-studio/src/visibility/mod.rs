//! Module visibility store adapter
//!
//! Reads of the shared visibility document never fail: a missing document or
//! an unreachable store both resolve to the all-defaults map. Writes are
//! restricted to the elevated role and merge a single key into the freshly
//! read document before writing it back.

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Actor, ModuleId, ModuleVisibilityMap};
use tokio::sync::Mutex;

use crate::security_log;
use crate::storage::VisibilityDocumentStore;

pub struct VisibilityService {
    store: Arc<dyn VisibilityDocumentStore>,
    /// Serializes read-modify-write cycles issued from this process
    write_lock: Mutex<()>,
}

impl VisibilityService {
    pub fn new(store: Arc<dyn VisibilityDocumentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current map, or all-defaults when absent or unreadable
    pub async fn load(&self) -> ModuleVisibilityMap {
        match self.store.load_visibility_map().await {
            Ok(Some(map)) => map,
            Ok(None) => ModuleVisibilityMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Visibility map unavailable, using role defaults");
                ModuleVisibilityMap::new()
            }
        }
    }

    /// Record `module -> visible` for every actor
    pub async fn set_module_visibility(
        &self,
        actor: &Actor,
        module: ModuleId,
        visible: bool,
    ) -> AppResult<ModuleVisibilityMap> {
        self.read_modify_write(actor, module, |map| map.set(module, visible))
            .await
    }

    /// Drop the override so every role falls back to its static default
    pub async fn clear_module_override(
        &self,
        actor: &Actor,
        module: ModuleId,
    ) -> AppResult<ModuleVisibilityMap> {
        self.read_modify_write(actor, module, |map| {
            map.remove(module);
        })
        .await
    }

    async fn read_modify_write(
        &self,
        actor: &Actor,
        module: ModuleId,
        change: impl FnOnce(&mut ModuleVisibilityMap),
    ) -> AppResult<ModuleVisibilityMap> {
        if !actor.role.is_elevated() {
            security_log!(
                "WARN",
                "visibility_write_denied",
                actor = actor.id.as_str(),
                role = actor.role.as_str(),
                module = module.as_str()
            );
            return Err(AppError::with_message(
                ErrorCode::ElevatedRoleRequired,
                format!("Role {} cannot change module visibility", actor.role),
            ));
        }
        if module.is_dashboard() {
            return Err(AppError::new(ErrorCode::DashboardNotConfigurable));
        }

        let _guard = self.write_lock.lock().await;

        // Strict read: writing back defaults over an unreadable document
        // would clobber other keys.
        let mut map = self
            .store
            .load_visibility_map()
            .await?
            .unwrap_or_default();
        change(&mut map);
        self.store.save_visibility_map(&map).await?;

        tracing::info!(
            actor = %actor.id,
            module = %module,
            visible = ?map.get(module),
            "Module visibility updated"
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::models::Role;

    fn service() -> (Arc<MemoryStore>, VisibilityService) {
        let store = Arc::new(MemoryStore::new());
        let service = VisibilityService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_missing_document_loads_defaults() {
        let (_, service) = service();
        assert!(service.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_store_loads_defaults() {
        let (store, service) = service();
        store.set_offline(true);
        assert!(service.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_merges_single_key() {
        let (_, service) = service();
        let admin = Actor::new("root", Role::SuperAdmin);

        service
            .set_module_visibility(&admin, ModuleId::Media, false)
            .await
            .unwrap();
        let map = service
            .set_module_visibility(&admin, ModuleId::Products, false)
            .await
            .unwrap();

        assert_eq!(map.get(ModuleId::Media), Some(false));
        assert_eq!(map.get(ModuleId::Products), Some(false));
        assert_eq!(service.load().await, map);
    }

    #[tokio::test]
    async fn test_clear_override_removes_key() {
        let (_, service) = service();
        let admin = Actor::new("root", Role::SuperAdmin);
        service
            .set_module_visibility(&admin, ModuleId::Media, false)
            .await
            .unwrap();
        let map = service
            .clear_module_override(&admin, ModuleId::Media)
            .await
            .unwrap();
        assert!(!map.contains(ModuleId::Media));
    }

    #[tokio::test]
    async fn test_non_elevated_write_refused_without_storage_change() {
        let (_, service) = service();
        let editor = Actor::new("ed", Role::Editor);
        let err = service
            .set_module_visibility(&editor, ModuleId::Media, false)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ElevatedRoleRequired);
        assert!(service.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_key_rejected() {
        let (_, service) = service();
        let admin = Actor::new("root", Role::SuperAdmin);
        let err = service
            .set_module_visibility(&admin, ModuleId::Dashboard, false)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DashboardNotConfigurable);
    }

    #[tokio::test]
    async fn test_write_surfaces_unreachable_store() {
        let (store, service) = service();
        store.set_offline(true);
        let admin = Actor::new("root", Role::SuperAdmin);
        let err = service
            .set_module_visibility(&admin, ModuleId::Media, false)
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
