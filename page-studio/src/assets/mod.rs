//! Asset resolution
//!
//! Image references on a page are either direct URLs or storage keys that an
//! [`AssetResolver`] turns into displayable URLs. Resolution runs once per
//! page snapshot, concurrently, and per-reference failures degrade to a
//! placeholder rather than failing the page.

pub mod classify;
pub mod fanout;
pub mod session;

use async_trait::async_trait;
use shared::error::AppResult;

pub use classify::{AssetSlot, DIRECT_URL_PREFIXES, collect_references, is_direct_url};
pub use fanout::{ResolvedAssets, resolve_page_assets};
pub use session::AssetSession;

/// Turns a storage reference into a displayable URL.
///
/// `Ok(None)` means the reference is unknown to the asset store.
#[async_trait]
pub trait AssetResolver: Send + Sync {
    async fn resolve(&self, reference: &str) -> AppResult<Option<String>>;
}

/// Joins storage references onto a fixed base URL
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base_url: String,
}

impl BaseUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AssetResolver for BaseUrlResolver {
    async fn resolve(&self, reference: &str) -> AppResult<Option<String>> {
        let key = reference.trim().trim_start_matches('/');
        if key.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("{}/{}", self.base_url, key)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_url_resolver_joins_once() {
        let resolver = BaseUrlResolver::new("https://cdn.example.com/");
        assert_eq!(
            resolver.resolve("brands/hero.jpg").await.unwrap().as_deref(),
            Some("https://cdn.example.com/brands/hero.jpg")
        );
        assert_eq!(resolver.resolve("  ").await.unwrap(), None);
    }
}
