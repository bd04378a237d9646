//! Image reference discovery and direct-URL classification

use shared::models::BrandPage;

/// References starting with one of these are usable as-is
pub const DIRECT_URL_PREFIXES: &[&str] = &["http://", "https://", "data:", "blob:", "/"];

/// True when `reference` can be rendered without asking the resolver
pub fn is_direct_url(reference: &str) -> bool {
    let reference = reference.trim_start();
    DIRECT_URL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Stable position of an image on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetSlot {
    HeroPrimary,
    HeroSecondary,
    Product(usize),
}

impl AssetSlot {
    /// Key used in the resolved-asset map
    pub fn key(&self) -> String {
        match self {
            AssetSlot::HeroPrimary => "hero-bg1".to_string(),
            AssetSlot::HeroSecondary => "hero-bg2".to_string(),
            AssetSlot::Product(index) => format!("product-{index}"),
        }
    }
}

fn non_blank(reference: Option<&String>) -> Option<&str> {
    reference.map(String::as_str).filter(|r| !r.trim().is_empty())
}

/// Every non-blank image reference on `page`, hero slots first
pub fn collect_references(page: &BrandPage) -> Vec<(AssetSlot, String)> {
    let mut refs = Vec::new();
    if let Some(hero) = &page.hero {
        if let Some(r) = non_blank(hero.background_image.as_ref()) {
            refs.push((AssetSlot::HeroPrimary, r.to_string()));
        }
        if let Some(r) = non_blank(hero.background_image_secondary.as_ref()) {
            refs.push((AssetSlot::HeroSecondary, r.to_string()));
        }
    }
    if let Some(products) = &page.products {
        for (index, item) in products.items.iter().enumerate() {
            if let Some(r) = non_blank(item.image.as_ref()) {
                refs.push((AssetSlot::Product(index), r.to_string()));
            }
        }
    }
    refs
}
