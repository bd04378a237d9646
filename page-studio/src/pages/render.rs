//! Resolved view of a page, ready for a renderer

use serde::Serialize;
use shared::models::{BrandPage, SectionKind, SectionStyles, fill_defaults};

use super::template::products_link;
use crate::assets::{AssetSlot, ResolvedAssets};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCta {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedProduct {
    pub id: String,
    pub title: String,
    pub blurb: String,
    /// `None` renders a placeholder
    pub image_url: Option<String>,
    pub cta_text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub title_line2: Option<String>,
    pub paragraphs: Vec<String>,
    pub cta: Option<RenderedCta>,
    /// Every property populated
    pub styles: SectionStyles,
    /// Hero only
    pub background_urls: Vec<Option<String>>,
    /// Products only
    pub products: Vec<RenderedProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub brand_id: String,
    pub brand_name: String,
    pub sections: Vec<RenderedSection>,
}

fn image_url(page: &BrandPage, assets: &ResolvedAssets, slot: AssetSlot) -> Option<String> {
    // Assets resolved for another page must not leak into this one
    if assets.brand_id != page.brand_id {
        return None;
    }
    assets.url(&slot.key()).map(str::to_string)
}

/// Assemble every present section in render order with default-filled
/// styles and resolved image URLs.
pub fn render_page(page: &BrandPage, assets: &ResolvedAssets) -> RenderedPage {
    let fallback_link = products_link(&page.brand_id);
    let mut sections = Vec::new();

    for kind in SectionKind::ALL {
        if kind == SectionKind::Products {
            let Some(products) = &page.products else {
                continue;
            };
            sections.push(RenderedSection {
                kind,
                eyebrow: products.eyebrow.clone(),
                title: products.title.clone(),
                title_line2: None,
                paragraphs: Vec::new(),
                cta: None,
                styles: fill_defaults(kind, &products.styles),
                background_urls: Vec::new(),
                products: products
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| RenderedProduct {
                        id: item.id.clone(),
                        title: item.title.clone(),
                        blurb: item.blurb.clone(),
                        image_url: image_url(page, assets, AssetSlot::Product(index)),
                        cta_text: item.cta_text.clone(),
                        href: item
                            .href
                            .clone()
                            .filter(|h| !h.trim().is_empty())
                            .unwrap_or_else(|| fallback_link.clone()),
                    })
                    .collect(),
            });
            continue;
        }

        let Some(section) = page.text_section(kind) else {
            continue;
        };
        let cta = section
            .cta_text
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .map(|text| RenderedCta {
                text: text.clone(),
                link: section
                    .cta_link
                    .clone()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| fallback_link.clone()),
            });
        let background_urls = if kind == SectionKind::Hero {
            vec![
                image_url(page, assets, AssetSlot::HeroPrimary),
                image_url(page, assets, AssetSlot::HeroSecondary),
            ]
        } else {
            Vec::new()
        };

        sections.push(RenderedSection {
            kind,
            eyebrow: section.eyebrow.clone(),
            title: section.title.clone(),
            title_line2: section.title_line2.clone(),
            paragraphs: section.paragraphs.clone(),
            cta,
            styles: fill_defaults(kind, &section.styles),
            background_urls,
            products: Vec::new(),
        });
    }

    RenderedPage {
        brand_id: page.brand_id.clone(),
        brand_name: page.brand_name.clone(),
        sections,
    }
}
