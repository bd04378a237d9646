//! Concurrent asset resolution for one page snapshot

use std::collections::BTreeMap;
use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use shared::models::BrandPage;

use super::AssetResolver;
use super::classify::{collect_references, is_direct_url};

/// Slot key -> URL. `None` means "render a placeholder".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedAssets {
    /// Bumped per resolution request within a session; 0 for one-off calls
    pub generation: u64,
    pub page_id: Option<String>,
    pub brand_id: String,
    pub urls: BTreeMap<String, Option<String>>,
}

impl ResolvedAssets {
    pub fn url(&self, key: &str) -> Option<&str> {
        self.urls.get(key).and_then(|u| u.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.urls.contains_key(key)
    }
}

async fn resolve_one(
    resolver: &dyn AssetResolver,
    key: String,
    reference: String,
    timeout: Duration,
) -> (String, Option<String>) {
    if is_direct_url(&reference) {
        return (key, Some(reference));
    }
    let url = match tokio::time::timeout(timeout, resolver.resolve(&reference)).await {
        Ok(Ok(url)) => url,
        Ok(Err(e)) => {
            tracing::warn!(key = %key, reference = %reference, error = %e, "Asset resolution failed");
            None
        }
        Err(_) => {
            tracing::warn!(
                key = %key,
                reference = %reference,
                timeout_ms = timeout.as_millis() as u64,
                "Asset resolution timed out"
            );
            None
        }
    };
    (key, url)
}

/// Resolve every image on `page` concurrently. Never fails: a reference that
/// cannot be resolved maps to `None` without affecting the others.
pub async fn resolve_page_assets(
    resolver: &dyn AssetResolver,
    page: &BrandPage,
    timeout: Duration,
) -> ResolvedAssets {
    let pending = collect_references(page)
        .into_iter()
        .map(|(slot, reference)| resolve_one(resolver, slot.key(), reference, timeout));
    let urls = join_all(pending).await.into_iter().collect();

    ResolvedAssets {
        generation: 0,
        page_id: page.id.clone(),
        brand_id: page.brand_id.clone(),
        urls,
    }
}
