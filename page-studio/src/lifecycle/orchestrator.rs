//! Page lifecycle orchestrator
//!
//! Owns one editor's workflow and mediates every call to storage, identity,
//! visibility and asset resolution. Access decisions come from
//! [`crate::auth`]; this type only asks for them.

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Actor, Brand, BrandPage, BrandPageSummary, BrandPageUpdate, ModuleId, ModuleVisibilityMap,
};

use super::workflow::{EditOrigin, PageWorkflow, WorkflowState};
use crate::assets::{AssetSession, ResolvedAssets};
use crate::auth::{
    Capabilities, IdentityProvider, NavItem, QuickAction, can_delete, capabilities, navigation,
    quick_actions, require_actor, require_module,
};
use crate::core::Config;
use crate::pages::{LegacyPage, RenderedPage, TemplateLevel, import_legacy, render_page};
use crate::security_log;
use crate::storage::{PageStore, RepoError};
use crate::visibility::VisibilityService;

pub struct PageLifecycle {
    store: Arc<dyn PageStore>,
    identity: Arc<dyn IdentityProvider>,
    visibility: Arc<VisibilityService>,
    assets: Option<Arc<AssetSession>>,
    config: Config,
    workflow: PageWorkflow,
}

impl PageLifecycle {
    pub fn new(
        store: Arc<dyn PageStore>,
        identity: Arc<dyn IdentityProvider>,
        visibility: Arc<VisibilityService>,
        config: Config,
    ) -> Self {
        Self {
            store,
            identity,
            visibility,
            assets: None,
            config,
            workflow: PageWorkflow::new(),
        }
    }

    /// Attach an asset session used by [`Self::preview`]
    pub fn with_assets(mut self, session: Arc<AssetSession>) -> Self {
        self.assets = Some(session);
        self
    }

    pub fn state(&self) -> &WorkflowState {
        self.workflow.state()
    }

    pub fn document(&self) -> Option<&BrandPage> {
        self.workflow.document()
    }

    pub fn document_mut(&mut self) -> AppResult<&mut BrandPage> {
        self.workflow.document_mut()
    }

    pub fn origin(&self) -> Option<&EditOrigin> {
        self.workflow.origin()
    }

    // ========== Access ==========

    async fn actor_and_visibility(&self) -> AppResult<(Actor, ModuleVisibilityMap)> {
        let actor = require_actor(self.identity.as_ref()).await?;
        let visibility = self.visibility.load().await;
        Ok((actor, visibility))
    }

    /// Current actor, provided the brand-pages module is visible to them
    async fn authorize_pages(&self, operation: &str) -> AppResult<Actor> {
        let (actor, visibility) = self.actor_and_visibility().await?;
        if let Err(e) = require_module(actor.role, ModuleId::BrandPages, &visibility) {
            security_log!(
                "WARN",
                "page_access_denied",
                actor = actor.id.as_str(),
                role = actor.role.as_str(),
                operation = operation
            );
            return Err(e);
        }
        Ok(actor)
    }

    pub async fn capabilities(&self) -> AppResult<Capabilities> {
        let (actor, visibility) = self.actor_and_visibility().await?;
        Ok(capabilities(actor.role, &visibility))
    }

    pub async fn navigation(&self) -> AppResult<Vec<NavItem>> {
        let (actor, visibility) = self.actor_and_visibility().await?;
        Ok(navigation(actor.role, &visibility))
    }

    pub async fn quick_actions(&self) -> AppResult<Vec<QuickAction>> {
        let (actor, visibility) = self.actor_and_visibility().await?;
        Ok(quick_actions(actor.role, &visibility))
    }

    pub async fn set_module_visibility(
        &self,
        module: ModuleId,
        visible: bool,
    ) -> AppResult<ModuleVisibilityMap> {
        let actor = require_actor(self.identity.as_ref()).await?;
        self.visibility
            .set_module_visibility(&actor, module, visible)
            .await
    }

    pub async fn clear_module_override(&self, module: ModuleId) -> AppResult<ModuleVisibilityMap> {
        let actor = require_actor(self.identity.as_ref()).await?;
        self.visibility.clear_module_override(&actor, module).await
    }

    // ========== Workflow ==========

    /// Idle → BrandSelection
    pub async fn create_new(&mut self) -> AppResult<()> {
        self.authorize_pages("create_page").await?;
        self.workflow.start_new()
    }

    /// Idle → CloneSourceSelection
    pub async fn begin_clone(&mut self) -> AppResult<()> {
        self.authorize_pages("clone_page").await?;
        self.workflow.start_clone()
    }

    /// Load the page to clone from and move on to brand selection
    pub async fn select_clone_source(&mut self, page_id: &str) -> AppResult<()> {
        if !matches!(self.workflow.state(), WorkflowState::CloneSourceSelection) {
            return Err(AppError::invalid_state(format!(
                "Cannot select a clone source while {}",
                self.workflow.state().name()
            )));
        }
        self.authorize_pages("clone_page").await?;

        let source = match self.store.load_page(page_id).await {
            Ok(Some(page)) => page,
            Ok(None) | Err(RepoError::NotFound(_)) => {
                return Err(AppError::source_not_found(page_id));
            }
            Err(RepoError::Corrupted(msg)) => {
                return Err(AppError::malformed_source(msg).with_detail("pageId", page_id));
            }
            Err(e) => return Err(e.into()),
        };
        self.workflow.select_source(source)
    }

    /// BrandSelection → TemplateSelection, or Editing when cloning
    pub fn choose_brand(&mut self, brand: Brand) -> AppResult<()> {
        self.workflow
            .choose_brand(brand, &self.config.fallback_brand_name)
    }

    /// TemplateSelection → Editing
    pub fn choose_level(&mut self, level: TemplateLevel) -> AppResult<()> {
        self.workflow.choose_level(level)
    }

    /// Idle → Editing with a stored page
    pub async fn edit_existing(&mut self, page_id: &str) -> AppResult<()> {
        if !self.workflow.state().is_idle() {
            return Err(AppError::invalid_state(format!(
                "Cannot open a page while {}",
                self.workflow.state().name()
            )));
        }
        self.authorize_pages("edit_page").await?;

        let page = self
            .store
            .load_page(page_id)
            .await?
            .ok_or_else(|| AppError::page_not_found(page_id))?;
        self.workflow.open(
            page,
            EditOrigin::Existing {
                page_id: page_id.to_string(),
            },
        )
    }

    /// Idle → Editing with a converted legacy export
    pub async fn import_legacy(&mut self, legacy: &LegacyPage) -> AppResult<()> {
        if !self.workflow.state().is_idle() {
            return Err(AppError::invalid_state(format!(
                "Cannot import a page while {}",
                self.workflow.state().name()
            )));
        }
        self.authorize_pages("import_page").await?;
        let page = import_legacy(legacy)?;
        self.workflow.open(page, EditOrigin::Import)
    }

    /// Persist the edited document and return to Idle.
    ///
    /// An opened page is always written back under the id it was opened
    /// with. On failure the workflow stays in Editing with the document
    /// intact so the save can be retried.
    pub async fn save(&mut self) -> AppResult<String> {
        let mut document = self
            .workflow
            .document()
            .ok_or_else(|| {
                AppError::invalid_state(format!(
                    "Cannot save while {}",
                    self.workflow.state().name()
                ))
            })?
            .clone();
        if let Some(EditOrigin::Existing { page_id }) = self.workflow.origin() {
            document.id = Some(page_id.clone());
        }
        let actor = self.authorize_pages("save_page").await?;

        document
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let brand_id = document.brand_id.clone();
        let id = match self.store.save_page(document).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(brand_id = %brand_id, error = %e, "Brand page save failed");
                return Err(e.into());
            }
        };

        self.workflow.finish_save()?;
        self.reset_assets();
        tracing::info!(page_id = %id, brand_id = %brand_id, actor = %actor.id, "Brand page saved");
        Ok(id)
    }

    /// Any state → Idle, discarding unsaved edits
    pub fn cancel(&mut self) {
        if !self.workflow.state().is_idle() {
            tracing::debug!(state = self.workflow.state().name(), "Workflow cancelled");
        }
        self.workflow.cancel();
        self.reset_assets();
    }

    fn reset_assets(&self) {
        if let Some(session) = &self.assets {
            session.reset();
        }
    }

    // ========== Page index ==========

    pub async fn list_pages(&self) -> AppResult<Vec<BrandPageSummary>> {
        self.authorize_pages("list_pages").await?;
        Ok(self.store.list_pages().await?)
    }

    /// Delete a stored page. Roles without delete rights are refused before
    /// storage is touched.
    pub async fn delete_page(&self, page_id: &str) -> AppResult<()> {
        let actor = require_actor(self.identity.as_ref()).await?;
        if !can_delete(actor.role) {
            security_log!(
                "WARN",
                "page_delete_denied",
                actor = actor.id.as_str(),
                role = actor.role.as_str(),
                page_id = page_id
            );
            return Err(AppError::permission_denied(format!(
                "Role {} cannot delete brand pages",
                actor.role
            ))
            .with_detail("pageId", page_id));
        }
        self.authorize_pages("delete_page").await?;

        if !self.store.delete_page(page_id).await? {
            return Err(AppError::page_not_found(page_id));
        }
        security_log!(
            "INFO",
            "page_deleted",
            actor = actor.id.as_str(),
            page_id = page_id
        );
        Ok(())
    }

    /// Flip `enabled` and persist immediately
    pub async fn toggle_enabled(&self, page_id: &str) -> AppResult<BrandPage> {
        let actor = self.authorize_pages("toggle_page").await?;
        let page = self
            .store
            .load_page(page_id)
            .await?
            .ok_or_else(|| AppError::page_not_found(page_id))?;

        let update = BrandPageUpdate {
            enabled: Some(!page.enabled),
        };
        let updated = self.store.update_page(page_id, update).await?;
        tracing::info!(
            page_id = %page_id,
            enabled = updated.enabled,
            actor = %actor.id,
            "Brand page visibility toggled"
        );
        Ok(updated)
    }

    /// Public lookup by routing key; disabled pages are never returned
    pub async fn find_enabled_by_brand(&self, brand_id: &str) -> AppResult<Option<BrandPage>> {
        let summaries = self.store.list_pages().await?;
        for summary in summaries
            .iter()
            .filter(|s| s.enabled && s.brand_id == brand_id)
        {
            if let Some(page) = self.store.load_page(&summary.id).await?
                && page.enabled
            {
                return Ok(Some(page));
            }
        }
        Ok(None)
    }

    // ========== Preview ==========

    /// Render the document being edited with its images resolved.
    ///
    /// Without an asset session, or when a newer preview superseded this
    /// one, images render as placeholders.
    pub async fn preview(&self) -> AppResult<RenderedPage> {
        let document = self.workflow.document().ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidWorkflowState,
                format!("Nothing to preview while {}", self.workflow.state().name()),
            )
        })?;

        let assets = match &self.assets {
            Some(session) => session.resolve_for(document).await,
            None => None,
        };
        let placeholder = ResolvedAssets::default();
        let assets = assets.as_deref().unwrap_or(&placeholder);
        Ok(render_page(document, assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticIdentity;
    use crate::storage::MemoryStore;
    use shared::models::Role;

    fn lifecycle(role: Role) -> (Arc<MemoryStore>, Arc<StaticIdentity>, PageLifecycle) {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(StaticIdentity::signed_in("u1", role));
        let visibility = Arc::new(VisibilityService::new(store.clone()));
        let lifecycle = PageLifecycle::new(
            store.clone(),
            identity.clone(),
            visibility,
            Config::with_overrides(1000, "Goodness"),
        );
        (store, identity, lifecycle)
    }

    #[tokio::test]
    async fn test_create_and_save() {
        let (store, _, mut lc) = lifecycle(Role::Editor);
        lc.create_new().await.unwrap();
        lc.choose_brand(Brand::new("soil-king", "Soil King")).unwrap();
        lc.choose_level(TemplateLevel::Standard).unwrap();
        lc.document_mut().unwrap().brand_name = "Soil King Ltd".into();

        let id = lc.save().await.unwrap();
        assert!(lc.state().is_idle());
        let stored = store.load_page(&id).await.unwrap().unwrap();
        assert_eq!(stored.brand_name, "Soil King Ltd");
    }

    #[tokio::test]
    async fn test_hidden_module_blocks_create() {
        let (_, identity, mut lc) = lifecycle(Role::SuperAdmin);
        lc.set_module_visibility(ModuleId::BrandPages, false)
            .await
            .unwrap();
        identity.sign_in(Actor::new("ed", Role::Editor));

        let err = lc.create_new().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert!(lc.state().is_idle());
    }

    #[tokio::test]
    async fn test_missing_clone_source() {
        let (_, _, mut lc) = lifecycle(Role::Admin);
        lc.begin_clone().await.unwrap();
        let err = lc.select_clone_source("nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceNotFound);
        assert!(matches!(lc.state(), WorkflowState::CloneSourceSelection));
    }

    #[tokio::test]
    async fn test_corrupted_clone_source() {
        let (store, _, mut lc) = lifecycle(Role::Admin);
        store.insert_raw("bad", serde_json::json!({"brandId": 7}));
        lc.begin_clone().await.unwrap();
        let err = lc.select_clone_source("bad").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedSource);
    }

    #[tokio::test]
    async fn test_edit_existing_missing_page() {
        let (_, _, mut lc) = lifecycle(Role::Admin);
        let err = lc.edit_existing("ghost").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PageNotFound);
        assert!(lc.state().is_idle());
    }

    #[tokio::test]
    async fn test_opened_page_saves_under_its_own_id() {
        let (store, _, mut lc) = lifecycle(Role::Editor);
        lc.create_new().await.unwrap();
        lc.choose_brand(Brand::new("x", "X")).unwrap();
        lc.choose_level(TemplateLevel::Blank).unwrap();
        let id = lc.save().await.unwrap();

        lc.edit_existing(&id).await.unwrap();
        lc.document_mut().unwrap().id = None;
        assert_eq!(lc.save().await.unwrap(), id);
        assert_eq!(store.page_count(), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_document() {
        let (store, _, mut lc) = lifecycle(Role::Editor);
        lc.create_new().await.unwrap();
        lc.choose_brand(Brand::new("x", "X")).unwrap();
        lc.choose_level(TemplateLevel::Blank).unwrap();
        lc.cancel();
        assert!(lc.document().is_none());
        assert_eq!(store.page_count(), 0);
    }

    #[tokio::test]
    async fn test_preview_without_session_uses_placeholders() {
        let (_, _, mut lc) = lifecycle(Role::Editor);
        lc.create_new().await.unwrap();
        lc.choose_brand(Brand::new("x", "X")).unwrap();
        lc.choose_level(TemplateLevel::Standard).unwrap();
        let rendered = lc.preview().await.unwrap();
        assert_eq!(rendered.sections.len(), 5);
        assert_eq!(rendered.sections[0].background_urls, vec![None, None]);
    }

    #[tokio::test]
    async fn test_find_enabled_by_brand_skips_disabled() {
        let (_, _, mut lc) = lifecycle(Role::Admin);
        lc.create_new().await.unwrap();
        lc.choose_brand(Brand::new("soil-king", "Soil King")).unwrap();
        lc.choose_level(TemplateLevel::Minimal).unwrap();
        let id = lc.save().await.unwrap();

        assert!(lc.find_enabled_by_brand("soil-king").await.unwrap().is_some());
        lc.toggle_enabled(&id).await.unwrap();
        assert!(lc.find_enabled_by_brand("soil-king").await.unwrap().is_none());
        assert!(lc.find_enabled_by_brand("other").await.unwrap().is_none());
    }
}
