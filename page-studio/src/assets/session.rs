//! Per-editor asset session with last-page-wins publication

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use shared::models::BrandPage;

use super::AssetResolver;
use super::fanout::{ResolvedAssets, resolve_page_assets};

/// Holds the resolved assets for whichever page was requested most recently.
///
/// Each request bumps a generation counter and clears the published map
/// before resolving. A resolution publishes only if no newer request started
/// while it was in flight, so a slow lookup for page A can never overwrite
/// the assets of page B.
pub struct AssetSession {
    resolver: Arc<dyn AssetResolver>,
    timeout: Duration,
    generation: AtomicU64,
    current: RwLock<Option<Arc<ResolvedAssets>>>,
}

impl AssetSession {
    pub fn new(resolver: Arc<dyn AssetResolver>, timeout: Duration) -> Self {
        Self {
            resolver,
            timeout,
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Generation of the latest request
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Published assets, if the latest request has completed
    pub fn current(&self) -> Option<Arc<ResolvedAssets>> {
        self.current.read().clone()
    }

    /// Resolve `page` and publish the result.
    ///
    /// Returns `None` when a newer request superseded this one.
    pub async fn resolve_for(&self, page: &BrandPage) -> Option<Arc<ResolvedAssets>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.write() = None;

        let mut assets = resolve_page_assets(self.resolver.as_ref(), page, self.timeout).await;
        assets.generation = generation;

        let mut current = self.current.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                generation,
                brand_id = %page.brand_id,
                "Discarding superseded asset resolution"
            );
            return None;
        }
        let assets = Arc::new(assets);
        *current = Some(assets.clone());
        Some(assets)
    }

    /// Drop published assets and invalidate anything in flight
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.current.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::error::AppResult;
    use shared::models::{Brand, HeroSection};
    use tokio::sync::Notify;

    /// Blocks references starting with `slow/` until the gate opens
    struct GatedResolver {
        gate: Notify,
    }

    #[async_trait]
    impl AssetResolver for GatedResolver {
        async fn resolve(&self, reference: &str) -> AppResult<Option<String>> {
            if reference.starts_with("slow/") {
                self.gate.notified().await;
            }
            Ok(Some(format!("https://cdn/{reference}")))
        }
    }

    fn page(brand: &str, image: &str) -> BrandPage {
        let mut page = BrandPage::new(&Brand::new(brand, brand));
        page.hero = Some(HeroSection {
            background_image: Some(image.into()),
            ..Default::default()
        });
        page
    }

    #[tokio::test]
    async fn test_publishes_latest_resolution() {
        let resolver = Arc::new(GatedResolver { gate: Notify::new() });
        let session = AssetSession::new(resolver, Duration::from_secs(1));

        let assets = session.resolve_for(&page("a", "a.jpg")).await.unwrap();
        assert_eq!(assets.generation, 1);
        assert_eq!(assets.url("hero-bg1"), Some("https://cdn/a.jpg"));
        assert_eq!(session.current().unwrap().brand_id, "a");
    }

    #[tokio::test]
    async fn test_stale_resolution_is_discarded() {
        let resolver = Arc::new(GatedResolver { gate: Notify::new() });
        let session = AssetSession::new(resolver.clone(), Duration::from_secs(5));
        let page_a = page("a", "slow/a.jpg");
        let page_b = page("b", "b.jpg");

        let (a, b, _) = tokio::join!(
            session.resolve_for(&page_a),
            session.resolve_for(&page_b),
            async {
                tokio::task::yield_now().await;
                resolver.gate.notify_one();
            }
        );

        assert!(a.is_none());
        let b = b.unwrap();
        assert_eq!(b.brand_id, "b");
        let current = session.current().unwrap();
        assert_eq!(current.brand_id, "b");
        assert_eq!(current.url("hero-bg1"), Some("https://cdn/b.jpg"));
    }

    #[tokio::test]
    async fn test_reset_clears_published_assets() {
        let resolver = Arc::new(GatedResolver { gate: Notify::new() });
        let session = AssetSession::new(resolver, Duration::from_secs(1));
        session.resolve_for(&page("a", "a.jpg")).await;
        session.reset();
        assert!(session.current().is_none());
        assert_eq!(session.generation(), 2);
    }
}
