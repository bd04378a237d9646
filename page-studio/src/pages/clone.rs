//! Derive a new brand's page from an existing one

use regex::{Captures, Regex};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Brand, BrandPage, ProductsSection, Section};

use super::template::products_link;

/// Brand name assumed when the source page carries none
pub const FALLBACK_BRAND_NAME: &str = "Goodness";

/// Substitutions applied to every copied field
struct Retarget<'a> {
    from_name: &'a str,
    to_name: &'a str,
    from_id: &'a str,
    to_id: &'a str,
    /// Source brand id as a whole path segment or query value
    id_token: Option<Regex>,
}

impl<'a> Retarget<'a> {
    fn new(from_name: &'a str, to_name: &'a str, from_id: &'a str, to_id: &'a str) -> Self {
        let id_token = (!from_id.is_empty())
            .then(|| {
                let id = regex::escape(from_id);
                Regex::new(&format!(r"/{id}(?:[/?#]|$)|={id}(?:[&#]|$)")).ok()
            })
            .flatten();
        Self {
            from_name,
            to_name,
            from_id,
            to_id,
            id_token,
        }
    }

    fn text(&self, value: &mut String) {
        if self.from_name.is_empty() || self.from_name == self.to_name {
            return;
        }
        if value.contains(self.from_name) {
            *value = value.replace(self.from_name, self.to_name);
        }
    }

    fn opt_text(&self, value: &mut Option<String>) {
        if let Some(v) = value {
            self.text(v);
        }
    }

    /// Links keep their shape when the source brand id appears in them as a
    /// whole segment or query value, otherwise they point at the target's
    /// product listing. Ids embedded in longer tokens are left alone.
    fn link(&self, value: &mut Option<String>) {
        let Some(link) = value.as_mut() else {
            return;
        };
        if link.trim().is_empty() {
            *value = None;
            return;
        }
        match &self.id_token {
            Some(token) if token.is_match(link) => {
                let rewritten = token
                    .replace_all(link, |caps: &Captures| {
                        // Keep the leading delimiter and whatever terminated the id
                        let whole = &caps[0];
                        format!(
                            "{}{}{}",
                            &whole[..1],
                            self.to_id,
                            &whole[1 + self.from_id.len()..]
                        )
                    })
                    .into_owned();
                *link = rewritten;
            }
            _ => *link = products_link(self.to_id),
        }
    }

    fn section(&self, section: &mut Section) {
        self.opt_text(&mut section.eyebrow);
        self.opt_text(&mut section.title);
        self.opt_text(&mut section.title_line2);
        self.opt_text(&mut section.cta_text);
        for paragraph in &mut section.paragraphs {
            self.text(paragraph);
        }
        self.link(&mut section.cta_link);
    }

    fn products(&self, products: &mut ProductsSection) {
        self.opt_text(&mut products.eyebrow);
        self.opt_text(&mut products.title);
        for item in &mut products.items {
            self.text(&mut item.title);
            self.text(&mut item.blurb);
            self.text(&mut item.cta_text);
            self.link(&mut item.href);
        }
    }
}

fn regenerate_eyebrow(section: Option<&mut Section>, prefix: &str, name: &str) {
    if let Some(section) = section
        && section.eyebrow.as_deref().is_some_and(|e| !e.trim().is_empty())
    {
        section.eyebrow = Some(format!("{prefix} {name}"));
    }
}

/// Copy `source` onto `target`, rewriting brand-specific copy and links.
///
/// The result is a new unsaved document; `source` is never modified.
pub fn clone_page(
    source: Option<&BrandPage>,
    target: &Brand,
    fallback_name: &str,
) -> AppResult<BrandPage> {
    let source = source.ok_or_else(|| {
        AppError::with_message(ErrorCode::SourceNotFound, "No page selected to clone")
    })?;
    source
        .validate()
        .map_err(|e| AppError::malformed_source(e.to_string()))?;

    if target.id.trim().is_empty() || target.name.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::InvalidTargetBrand,
            "Target brand needs both an id and a name",
        )
        .with_detail("brandId", target.id.as_str()));
    }

    let from_name = match source.brand_name.trim() {
        "" => fallback_name,
        name => name,
    };
    let retarget = Retarget::new(from_name, &target.name, source.brand_id.trim(), &target.id);

    let mut page = source.clone();
    page.id = None;
    page.brand_id = target.id.clone();
    page.brand_name = target.name.clone();
    page.enabled = true;
    page.created_at = None;
    page.updated_at = None;

    if let Some(hero) = &mut page.hero {
        retarget.section(&mut hero.content);
    }
    for section in [&mut page.about, &mut page.stand_for, &mut page.why]
        .into_iter()
        .flatten()
    {
        retarget.section(section);
    }
    if let Some(products) = &mut page.products {
        retarget.products(products);
    }

    regenerate_eyebrow(page.about.as_mut(), "About", &target.name);
    regenerate_eyebrow(page.why.as_mut(), "Why", &target.name);

    tracing::debug!(
        from_brand = %source.brand_id,
        to_brand = %target.id,
        "Cloned brand page"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::template::{TemplateLevel, generate};
    use shared::models::{ProductItem, SectionKind};

    fn soil_king() -> Brand {
        Brand::new("soil-king", "Soil King")
    }

    fn wellness() -> Brand {
        Brand::new("wellness", "Wellness Co")
    }

    fn saved_standard() -> BrandPage {
        let mut page = generate(&soil_king(), TemplateLevel::Standard);
        page.id = Some("page-1".into());
        page.created_at = Some(1);
        page.updated_at = Some(2);
        page.enabled = false;
        page
    }

    #[test]
    fn test_clone_retargets_identity() {
        let source = saved_standard();
        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        assert!(page.id.is_none());
        assert_eq!(page.brand_id, "wellness");
        assert_eq!(page.brand_name, "Wellness Co");
        assert!(page.enabled);
        assert!(page.created_at.is_none());
        assert_eq!(source.id.as_deref(), Some("page-1"));
    }

    #[test]
    fn test_clone_replaces_brand_name_everywhere() {
        let page = clone_page(Some(&saved_standard()), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("Soil King"));
        assert!(!json.contains("soil-king"));
        assert_eq!(
            page.hero.as_ref().unwrap().content.title.as_deref(),
            Some("Wellness Co")
        );
        assert_eq!(page.about.as_ref().unwrap().eyebrow.as_deref(), Some("About Wellness Co"));
        assert_eq!(page.why.as_ref().unwrap().eyebrow.as_deref(), Some("Why Wellness Co"));
    }

    #[test]
    fn test_clone_preserves_paragraph_order() {
        let source = saved_standard();
        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        let before = &source.about.as_ref().unwrap().paragraphs;
        let after = &page.about.as_ref().unwrap().paragraphs;
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after) {
            assert_eq!(b.replace("Soil King", "Wellness Co"), *a);
        }
    }

    #[test]
    fn test_links_rewritten_or_synthesized() {
        let mut source = saved_standard();
        source.products = Some(ProductsSection {
            items: vec![
                ProductItem {
                    id: "a".into(),
                    href: Some("/brands/soil-king/potting-mix".into()),
                    ..Default::default()
                },
                ProductItem {
                    id: "b".into(),
                    href: Some("https://elsewhere.example/item".into()),
                    ..Default::default()
                },
                ProductItem {
                    id: "c".into(),
                    href: None,
                    ..Default::default()
                },
            ],
            ..Default::default()
        });

        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        let items = &page.products.unwrap().items;
        assert_eq!(items[0].href.as_deref(), Some("/brands/wellness/potting-mix"));
        assert_eq!(items[1].href.as_deref(), Some("/products?brand=wellness"));
        assert_eq!(items[2].href, None);
    }

    #[test]
    fn test_brand_id_inside_product_slug_is_kept() {
        let mut source = generate(&Brand::new("mix", "Mix"), TemplateLevel::Blank);
        source.products = Some(ProductsSection {
            items: vec![
                ProductItem {
                    id: "a".into(),
                    href: Some("/shop/potting-mix-pro?brand=mix".into()),
                    ..Default::default()
                },
                ProductItem {
                    id: "b".into(),
                    href: Some("/brands/mix/mixers?ref=mix#top".into()),
                    ..Default::default()
                },
                ProductItem {
                    id: "c".into(),
                    href: Some("/shop/remix".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });

        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        let items = &page.products.unwrap().items;
        assert_eq!(
            items[0].href.as_deref(),
            Some("/shop/potting-mix-pro?brand=wellness")
        );
        assert_eq!(
            items[1].href.as_deref(),
            Some("/brands/wellness/mixers?ref=wellness#top")
        );
        assert_eq!(items[2].href.as_deref(), Some("/products?brand=wellness"));
    }

    #[test]
    fn test_padded_source_name_is_replaced() {
        let mut source = saved_standard();
        source.brand_name = " Soil King ".into();
        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        let json = serde_json::to_string(&page).unwrap();
        assert!(!json.contains("Soil King"));
        assert_eq!(
            page.hero.as_ref().unwrap().content.title.as_deref(),
            Some("Wellness Co")
        );
    }

    #[test]
    fn test_blank_source_clones_without_spurious_changes() {
        let source = generate(&soil_king(), TemplateLevel::Blank);
        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        assert!(page.id.is_none());
        for kind in [SectionKind::About, SectionKind::Why] {
            let section = page.text_section(kind).unwrap();
            assert!(section.eyebrow.is_none());
            assert!(section.paragraphs.is_empty());
        }
    }

    #[test]
    fn test_nameless_source_uses_fallback() {
        let mut source = generate(&soil_king(), TemplateLevel::Minimal);
        source.brand_name = String::new();
        source.hero.as_mut().unwrap().content.title = Some("Goodness Grows".into());

        let page = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap();
        assert_eq!(
            page.hero.unwrap().content.title.as_deref(),
            Some("Wellness Co Grows")
        );
    }

    #[test]
    fn test_missing_source() {
        let err = clone_page(None, &wellness(), FALLBACK_BRAND_NAME).unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceNotFound);
    }

    #[test]
    fn test_malformed_source() {
        let mut source = saved_standard();
        source.brand_id = " ".into();
        let err = clone_page(Some(&source), &wellness(), FALLBACK_BRAND_NAME).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedSource);
    }

    #[test]
    fn test_blank_target_rejected() {
        let err = clone_page(Some(&saved_standard()), &Brand::new("", "X"), FALLBACK_BRAND_NAME)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTargetBrand);
    }
}
