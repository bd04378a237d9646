//! Starter documents for a new brand page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::models::{
    Brand, BrandPage, HeroSection, ProductsSection, Section, SectionStyles,
};

/// How much placeholder content a new page starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLevel {
    /// Every section with placeholder copy
    Standard,
    /// Hero and about only
    Minimal,
    /// Every section present, all content empty
    Blank,
}

impl TemplateLevel {
    pub const ALL: [TemplateLevel; 3] = [
        TemplateLevel::Standard,
        TemplateLevel::Minimal,
        TemplateLevel::Blank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateLevel::Standard => "standard",
            TemplateLevel::Minimal => "minimal",
            TemplateLevel::Blank => "blank",
        }
    }
}

impl fmt::Display for TemplateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(TemplateLevel::Standard),
            "minimal" => Ok(TemplateLevel::Minimal),
            "blank" => Ok(TemplateLevel::Blank),
            other => Err(format!("unknown template level: {other}")),
        }
    }
}

/// Default CTA target for a brand's products
pub fn products_link(brand_id: &str) -> String {
    format!("/products?brand={brand_id}")
}

/// Build a fresh, unsaved page for `brand`.
pub fn generate(brand: &Brand, level: TemplateLevel) -> BrandPage {
    let mut page = BrandPage::new(brand);
    match level {
        TemplateLevel::Standard => {
            page.hero = Some(hero(brand));
            page.about = Some(about(brand));
            page.stand_for = Some(stand_for(brand));
            page.why = Some(why(brand));
            page.products = Some(products(brand));
        }
        TemplateLevel::Minimal => {
            page.hero = Some(hero(brand));
            page.about = Some(about(brand));
        }
        TemplateLevel::Blank => {
            page.hero = Some(HeroSection::default());
            page.about = Some(Section::default());
            page.stand_for = Some(Section::default());
            page.why = Some(Section::default());
            page.products = Some(ProductsSection::default());
        }
    }
    page
}

fn hero(brand: &Brand) -> HeroSection {
    HeroSection {
        content: Section {
            eyebrow: Some("Introducing".to_string()),
            title: Some(brand.name.clone()),
            title_line2: Some("Made to grow with you".to_string()),
            paragraphs: vec![format!(
                "Discover what makes {} different, from the first ingredient to the last.",
                brand.name
            )],
            cta_text: Some("Shop the range".to_string()),
            cta_link: Some(products_link(&brand.id)),
            styles: SectionStyles::default(),
        },
        background_image: None,
        background_image_secondary: None,
    }
}

fn about(brand: &Brand) -> Section {
    Section {
        eyebrow: Some(format!("About {}", brand.name)),
        title: Some("Our story".to_string()),
        paragraphs: vec![
            format!("{} started with a simple idea.", brand.name),
            format!("Today {} is trusted by growers everywhere.", brand.name),
        ],
        ..Default::default()
    }
}

fn stand_for(brand: &Brand) -> Section {
    Section {
        eyebrow: Some("What we stand for".to_string()),
        title: Some("Quality you can see".to_string()),
        paragraphs: vec![format!(
            "Every {} product is made with care and tested before it reaches you.",
            brand.name
        )],
        ..Default::default()
    }
}

fn why(brand: &Brand) -> Section {
    Section {
        eyebrow: Some(format!("Why {}", brand.name)),
        title: Some("Results that speak for themselves".to_string()),
        paragraphs: vec![format!(
            "Choose {} for honest ingredients and dependable results.",
            brand.name
        )],
        cta_text: Some("See all products".to_string()),
        cta_link: Some(products_link(&brand.id)),
        ..Default::default()
    }
}

fn products(brand: &Brand) -> ProductsSection {
    ProductsSection {
        eyebrow: Some("The range".to_string()),
        title: Some(format!("{} products", brand.name)),
        items: Vec::new(),
        styles: SectionStyles::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SectionKind;

    fn soil_king() -> Brand {
        Brand::new("soil-king", "Soil King")
    }

    #[test]
    fn test_standard_has_all_sections() {
        let page = generate(&soil_king(), TemplateLevel::Standard);
        assert_eq!(page.section_count(), 5);
        assert!(page.id.is_none());
        assert!(page.enabled);
        assert!(page.hero.as_ref().unwrap().content.title.as_deref().unwrap().contains("Soil King"));
        assert!(!page.about.as_ref().unwrap().paragraphs.is_empty());
        assert!(page.products.as_ref().unwrap().items.is_empty());
        assert_eq!(
            page.hero.unwrap().content.cta_link.as_deref(),
            Some("/products?brand=soil-king")
        );
    }

    #[test]
    fn test_minimal_has_hero_and_about() {
        let page = generate(&soil_king(), TemplateLevel::Minimal);
        assert!(page.has_section(SectionKind::Hero));
        assert!(page.has_section(SectionKind::About));
        assert!(!page.has_section(SectionKind::StandFor));
        assert!(!page.has_section(SectionKind::Why));
        assert!(!page.has_section(SectionKind::Products));
    }

    #[test]
    fn test_blank_sections_are_empty() {
        let page = generate(&soil_king(), TemplateLevel::Blank);
        assert_eq!(page.section_count(), 5);
        for kind in [SectionKind::Hero, SectionKind::About, SectionKind::StandFor, SectionKind::Why] {
            let section = page.text_section(kind).unwrap();
            assert!(section.title.is_none());
            assert!(section.paragraphs.is_empty());
            assert!(section.styles.is_empty());
        }
        assert!(page.products.unwrap().items.is_empty());
    }

    #[test]
    fn test_generated_pages_validate() {
        for level in TemplateLevel::ALL {
            assert!(generate(&soil_king(), level).validate().is_ok(), "{level}");
        }
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("Standard".parse::<TemplateLevel>(), Ok(TemplateLevel::Standard));
        assert_eq!("blank".parse::<TemplateLevel>(), Ok(TemplateLevel::Blank));
        assert!("fancy".parse::<TemplateLevel>().is_err());
    }
}
