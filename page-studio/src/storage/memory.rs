//! In-memory document store
//!
//! Pages are kept as raw JSON documents so reads go through the same decode
//! and shape checks a real document store would need.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::Value;
use shared::models::{BrandPage, BrandPageSummary, BrandPageUpdate, ModuleVisibilityMap};

use super::{PageStore, RepoError, RepoResult, VisibilityDocumentStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: DashMap<String, Value>,
    visibility: RwLock<Option<ModuleVisibilityMap>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an unreachable store; every call fails with `Unavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Insert a raw document, bypassing encoding (imports, fixtures)
    pub fn insert_raw(&self, id: impl Into<String>, doc: Value) {
        self.pages.insert(id.into(), doc);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn check_online(&self) -> RepoResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepoError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }

    fn decode(id: &str, doc: &Value) -> RepoResult<BrandPage> {
        let mut page = BrandPage::from_document(doc.clone())
            .map_err(|e| RepoError::Corrupted(format!("page {id}: {e}")))?;
        page.id = Some(id.to_string());
        Ok(page)
    }

    fn encode(page: &BrandPage) -> RepoResult<Value> {
        serde_json::to_value(page).map_err(|e| RepoError::Validation(e.to_string()))
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn list_pages(&self) -> RepoResult<Vec<BrandPageSummary>> {
        self.check_online()?;
        let mut summaries = Vec::with_capacity(self.pages.len());
        for entry in self.pages.iter() {
            match Self::decode(entry.key(), entry.value()) {
                Ok(page) => summaries.extend(page.summary()),
                Err(e) => {
                    tracing::warn!(page_id = %entry.key(), error = %e, "Skipping undecodable page");
                }
            }
        }
        summaries.sort_by(|a, b| a.brand_name.cmp(&b.brand_name).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }

    async fn load_page(&self, id: &str) -> RepoResult<Option<BrandPage>> {
        self.check_online()?;
        match self.pages.get(id) {
            Some(doc) => Self::decode(id, doc.value()).map(Some),
            None => Ok(None),
        }
    }

    async fn save_page(&self, mut page: BrandPage) -> RepoResult<String> {
        self.check_online()?;
        page.validate()
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        let now = now_millis();
        let id = match page.id.take() {
            Some(id) => {
                let created_at = self
                    .pages
                    .get(&id)
                    .and_then(|doc| doc.get("createdAt").and_then(Value::as_i64));
                page.created_at = created_at.or(page.created_at).or(Some(now));
                id
            }
            None => {
                page.created_at = Some(now);
                uuid::Uuid::new_v4().to_string()
            }
        };
        page.updated_at = Some(now);

        let doc = Self::encode(&page)?;
        self.pages.insert(id.clone(), doc);
        tracing::debug!(page_id = %id, brand_id = %page.brand_id, "Brand page saved");
        Ok(id)
    }

    async fn update_page(&self, id: &str, update: BrandPageUpdate) -> RepoResult<BrandPage> {
        self.check_online()?;
        let mut entry = self
            .pages
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("page {id}")))?;

        let mut page = Self::decode(id, entry.value())?;
        if let Some(enabled) = update.enabled {
            page.enabled = enabled;
        }
        page.updated_at = Some(now_millis());

        let mut doc = Self::encode(&page)?;
        if let Some(obj) = doc.as_object_mut() {
            obj.remove("id");
        }
        *entry.value_mut() = doc;
        Ok(page)
    }

    async fn delete_page(&self, id: &str) -> RepoResult<bool> {
        self.check_online()?;
        Ok(self.pages.remove(id).is_some())
    }
}

#[async_trait]
impl VisibilityDocumentStore for MemoryStore {
    async fn load_visibility_map(&self) -> RepoResult<Option<ModuleVisibilityMap>> {
        self.check_online()?;
        Ok(self.visibility.read().clone())
    }

    async fn save_visibility_map(&self, map: &ModuleVisibilityMap) -> RepoResult<()> {
        self.check_online()?;
        *self.visibility.write() = Some(map.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::{Brand, ModuleId};

    fn page(brand_id: &str, name: &str) -> BrandPage {
        BrandPage::new(&Brand::new(brand_id, name))
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let id = store.save_page(page("soil-king", "Soil King")).await.unwrap();

        let loaded = store.load_page(&id).await.unwrap().unwrap();
        assert_eq!(loaded.id.as_deref(), Some(id.as_str()));
        assert!(loaded.created_at.is_some());
        assert!(loaded.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_resave_keeps_id_and_created_at() {
        let store = MemoryStore::new();
        let id = store.save_page(page("a", "A")).await.unwrap();
        let mut loaded = store.load_page(&id).await.unwrap().unwrap();
        let created = loaded.created_at;

        loaded.brand_name = "A2".into();
        let again = store.save_page(loaded).await.unwrap();
        assert_eq!(again, id);
        assert_eq!(store.page_count(), 1);

        let reloaded = store.load_page(&id).await.unwrap().unwrap();
        assert_eq!(reloaded.brand_name, "A2");
        assert_eq!(reloaded.created_at, created);
    }

    #[tokio::test]
    async fn test_update_page_flips_enabled() {
        let store = MemoryStore::new();
        let id = store.save_page(page("a", "A")).await.unwrap();
        let updated = store
            .update_page(
                &id,
                BrandPageUpdate {
                    enabled: Some(false),
                },
            )
            .await
            .unwrap();
        assert!(!updated.enabled);
        assert!(!store.load_page(&id).await.unwrap().unwrap().enabled);
    }

    #[tokio::test]
    async fn test_corrupted_document_is_reported() {
        let store = MemoryStore::new();
        store.insert_raw("bad", json!({ "brandName": 42 }));
        let err = store.load_page("bad").await.unwrap_err();
        assert!(matches!(err, RepoError::Corrupted(_)));

        // Listing skips it rather than failing
        assert!(store.list_pages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(matches!(
            store.list_pages().await,
            Err(RepoError::Unavailable(_))
        ));
        assert!(matches!(
            store.load_visibility_map().await,
            Err(RepoError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_visibility_document_created_lazily() {
        let store = MemoryStore::new();
        assert!(store.load_visibility_map().await.unwrap().is_none());

        let mut map = ModuleVisibilityMap::new();
        map.set(ModuleId::Media, false);
        store.save_visibility_map(&map).await.unwrap();
        assert_eq!(store.load_visibility_map().await.unwrap(), Some(map));
    }

    #[tokio::test]
    async fn test_list_sorted_by_brand_name() {
        let store = MemoryStore::new();
        store.save_page(page("z", "Zest")).await.unwrap();
        store.save_page(page("a", "Acorn")).await.unwrap();
        let names: Vec<_> = store
            .list_pages()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.brand_name)
            .collect();
        assert_eq!(names, vec!["Acorn", "Zest"]);
    }
}
