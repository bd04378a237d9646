//! Import of pages exported from the old static brand site

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Brand, BrandPage, HeroSection, ProductItem, ProductsSection, Section, SectionStyles,
};

use super::template::products_link;

/// Brand page as exported by the legacy site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyPage {
    pub slug: String,
    pub name: String,
    pub headline: Option<String>,
    pub tagline: Option<String>,
    pub hero_image: Option<String>,
    pub hero_image_alt: Option<String>,
    /// Rendered HTML blocks, in page order
    pub blocks: Vec<LegacyBlock>,
    pub products: Vec<LegacyProductCard>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyBlock {
    pub heading: Option<String>,
    pub html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyProductCard {
    pub sku: Option<String>,
    pub name: String,
    /// HTML fragment
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
}

/// Opening or closing block tags, each of which ends a paragraph
static BLOCK_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:p|br|div|li|h[1-4]|ul|ol)\b[^>]*>").unwrap()
});

/// Any other markup. A tag must start with a letter, so a bare `<` in body
/// text is kept as text.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->|</?[A-Za-z][^>]*>").unwrap());

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#39|nbsp);").unwrap());

static NON_SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

fn decode_entity(entity: &str) -> &'static str {
    match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" | "#39" => "'",
        _ => " ",
    }
}

/// Strip markup, marking block boundaries with a blank line
fn flatten_html(html: &str) -> String {
    let text = BLOCK_TAG_PATTERN.replace_all(html, "\n\n");
    let text = TAG_PATTERN.replace_all(&text, "");
    ENTITY_PATTERN
        .replace_all(&text, |caps: &Captures| decode_entity(&caps[1]))
        .into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain text of an HTML fragment on a single line
pub fn strip_tags(html: &str) -> String {
    collapse_whitespace(&flatten_html(html))
}

/// Plain-text paragraphs of an HTML fragment, in document order
pub fn split_paragraphs(html: &str) -> Vec<String> {
    flatten_html(html)
        .split("\n\n")
        .map(collapse_whitespace)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Lowercase, dash-separated routing key
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG_PATTERN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn block_section(block: &LegacyBlock) -> Section {
    Section {
        eyebrow: non_blank(block.heading.as_ref()).map(|h| strip_tags(&h)),
        paragraphs: split_paragraphs(&block.html),
        ..Default::default()
    }
}

fn import_products(cards: &[LegacyProductCard], brand_id: &str) -> Vec<ProductItem> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let base = non_blank(card.sku.as_ref())
                .map(|sku| slugify(&sku))
                .filter(|s| !s.is_empty())
                .or_else(|| Some(slugify(&card.name)).filter(|s| !s.is_empty()))
                .unwrap_or_else(|| format!("item-{index}"));
            let mut id = base.clone();
            let mut suffix = 2;
            while !seen.insert(id.clone()) {
                id = format!("{base}-{suffix}");
                suffix += 1;
            }
            ProductItem {
                id,
                title: strip_tags(&card.name),
                blurb: strip_tags(&card.description),
                image: non_blank(card.image.as_ref()),
                cta_text: "Learn more".to_string(),
                href: non_blank(card.url.as_ref()).or_else(|| Some(products_link(brand_id))),
            }
        })
        .collect()
}

/// Convert a legacy export into an unsaved brand page.
///
/// Blocks fill `about`, `standFor` and `why` in order; any further blocks
/// are folded into `why`.
pub fn import_legacy(legacy: &LegacyPage) -> AppResult<BrandPage> {
    let name = collapse_whitespace(&legacy.name);
    let id = match slugify(&legacy.slug) {
        slug if !slug.is_empty() => slug,
        _ => slugify(&name),
    };
    if id.is_empty() || name.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::LegacyImportFailed,
            "Legacy page has neither a usable slug nor a name",
        ));
    }
    let brand = Brand::new(id, name);
    let mut page = BrandPage::new(&brand);
    page.enabled = legacy.published.unwrap_or(true);

    page.hero = Some(HeroSection {
        content: Section {
            title: Some(
                non_blank(legacy.headline.as_ref())
                    .map(|h| strip_tags(&h))
                    .unwrap_or_else(|| brand.name.clone()),
            ),
            paragraphs: legacy
                .tagline
                .as_deref()
                .map(split_paragraphs)
                .unwrap_or_default(),
            cta_text: Some("Shop the range".to_string()),
            cta_link: Some(products_link(&brand.id)),
            styles: SectionStyles::default(),
            ..Default::default()
        },
        background_image: non_blank(legacy.hero_image.as_ref()),
        background_image_secondary: non_blank(legacy.hero_image_alt.as_ref()),
    });

    let mut blocks = legacy.blocks.iter().map(block_section);
    page.about = blocks.next();
    page.stand_for = blocks.next();
    page.why = blocks.next();
    for extra in blocks {
        if let Some(why) = page.why.as_mut() {
            why.paragraphs.extend(extra.eyebrow);
            why.paragraphs.extend(extra.paragraphs);
        }
    }

    if !legacy.products.is_empty() {
        page.products = Some(ProductsSection {
            title: Some(format!("{} products", brand.name)),
            items: import_products(&legacy.products, &brand.id),
            ..Default::default()
        });
    }

    page.validate().map_err(|e| {
        AppError::with_message(ErrorCode::LegacyImportFailed, e.to_string())
            .with_detail("slug", legacy.slug.as_str())
    })?;

    tracing::info!(
        brand_id = %brand.id,
        sections = page.section_count(),
        "Imported legacy brand page"
    );
    Ok(page)
}
