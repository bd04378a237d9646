//! Brand Page Model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use super::styles::SectionStyles;

fn default_true() -> bool {
    true
}

/// Brand identity used for routing and copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

impl Brand {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Named content blocks of a brand page, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Hero,
    About,
    StandFor,
    Why,
    Products,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::StandFor,
        SectionKind::Why,
        SectionKind::Products,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::StandFor => "standFor",
            SectionKind::Why => "why",
            SectionKind::Products => "products",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text section (about / standFor / why, and the body of hero)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Continuation line rendered under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_line2: Option<String>,
    /// Body paragraphs, order significant
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    pub styles: SectionStyles,
}

/// Hero section: text body plus two background image slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(flatten)]
    pub content: Section,
    /// Opaque asset reference or direct URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_secondary: Option<String>,
}

/// Product card shown in the products section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductItem {
    pub id: String,
    pub title: String,
    pub blurb: String,
    /// Opaque asset reference or direct URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub cta_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<ProductItem>,
    pub styles: SectionStyles,
}

/// Brand page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPage {
    /// Storage-assigned; absent until first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Public routing key
    pub brand_id: String,
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_for: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductsSection>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Epoch millis, stamped by storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Structural problems that make a document unusable as a brand page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageShapeError {
    #[error("brand page document could not be decoded: {0}")]
    Decode(String),

    #[error("brand page has a blank brand id")]
    BlankBrandId,

    #[error("product item {index} has a blank id")]
    BlankProductId { index: usize },

    #[error("product id {0} appears more than once")]
    DuplicateProductId(String),
}

impl BrandPage {
    /// Empty, unsaved page for `brand`
    pub fn new(brand: &Brand) -> Self {
        Self {
            id: None,
            brand_id: brand.id.clone(),
            brand_name: brand.name.clone(),
            hero: None,
            about: None,
            stand_for: None,
            why: None,
            products: None,
            enabled: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Parse a raw stored document and check its shape
    pub fn from_document(doc: serde_json::Value) -> Result<Self, PageShapeError> {
        let page: BrandPage =
            serde_json::from_value(doc).map_err(|e| PageShapeError::Decode(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    pub fn validate(&self) -> Result<(), PageShapeError> {
        if self.brand_id.trim().is_empty() {
            return Err(PageShapeError::BlankBrandId);
        }
        if let Some(products) = &self.products {
            let mut seen = HashSet::new();
            for (index, item) in products.items.iter().enumerate() {
                if item.id.trim().is_empty() {
                    return Err(PageShapeError::BlankProductId { index });
                }
                if !seen.insert(item.id.as_str()) {
                    return Err(PageShapeError::DuplicateProductId(item.id.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn brand(&self) -> Brand {
        Brand::new(self.brand_id.clone(), self.brand_name.clone())
    }

    /// Text section for about / standFor / why
    pub fn text_section(&self, kind: SectionKind) -> Option<&Section> {
        match kind {
            SectionKind::Hero => self.hero.as_ref().map(|h| &h.content),
            SectionKind::About => self.about.as_ref(),
            SectionKind::StandFor => self.stand_for.as_ref(),
            SectionKind::Why => self.why.as_ref(),
            SectionKind::Products => None,
        }
    }

    pub fn styles(&self, kind: SectionKind) -> Option<&SectionStyles> {
        match kind {
            SectionKind::Products => self.products.as_ref().map(|p| &p.styles),
            other => self.text_section(other).map(|s| &s.styles),
        }
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.styles(kind).is_some()
    }

    pub fn section_count(&self) -> usize {
        SectionKind::ALL
            .iter()
            .filter(|k| self.has_section(**k))
            .count()
    }

    pub fn summary(&self) -> Option<BrandPageSummary> {
        let id = self.id.clone()?;
        Some(BrandPageSummary {
            id,
            brand_id: self.brand_id.clone(),
            brand_name: self.brand_name.clone(),
            enabled: self.enabled,
            section_count: self.section_count(),
            updated_at: self.updated_at,
        })
    }
}

/// Listing row for the page index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPageSummary {
    pub id: String,
    pub brand_id: String,
    pub brand_name: String,
    pub enabled: bool,
    pub section_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPageUpdate {
    pub enabled: Option<bool>,
}
