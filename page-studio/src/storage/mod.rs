//! Storage Module
//!
//! Collaborator contracts for the document store plus an in-memory
//! implementation used by the binary and the tests.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{BrandPage, BrandPageSummary, BrandPageUpdate, ModuleVisibilityMap};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupted document: {0}")]
    Corrupted(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => AppError::not_found(what),
            RepoError::Unavailable(msg) => AppError::storage_unavailable(msg),
            RepoError::Corrupted(msg) => AppError::with_message(ErrorCode::StorageCorrupted, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Brand page document store
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn list_pages(&self) -> RepoResult<Vec<BrandPageSummary>>;

    /// `Ok(None)` when no document has this id
    async fn load_page(&self, id: &str) -> RepoResult<Option<BrandPage>>;

    /// Insert when `page.id` is absent, otherwise replace. Returns the id.
    async fn save_page(&self, page: BrandPage) -> RepoResult<String>;

    async fn update_page(&self, id: &str, update: BrandPageUpdate) -> RepoResult<BrandPage>;

    /// `Ok(false)` when nothing was deleted
    async fn delete_page(&self, id: &str) -> RepoResult<bool>;
}

/// Single shared module-visibility document
#[async_trait]
pub trait VisibilityDocumentStore: Send + Sync {
    /// `Ok(None)` until the document is first written
    async fn load_visibility_map(&self) -> RepoResult<Option<ModuleVisibilityMap>>;

    /// Full-document upsert
    async fn save_visibility_map(&self, map: &ModuleVisibilityMap) -> RepoResult<()>;
}
