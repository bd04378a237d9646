//! Section style records and their documented defaults
//!
//! Every style property has exactly one default per section kind. Lookups go
//! through [`effective_style`]; the base table is an exhaustive match so a new
//! [`StyleKey`] cannot be added without a default.

use serde::{Deserialize, Serialize};

use super::brand_page::SectionKind;

/// A style property addressable on any section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    BackgroundColor,
    TextColor,
    TitleColor,
    EyebrowColor,
    AccentColor,
    TitleFontSize,
    BodyFontSize,
    TextAlign,
    PaddingY,
    MaxWidth,
    CtaBackgroundColor,
    CtaTextColor,
    OverlayColor,
    OverlayOpacity,
    MinHeight,
    CardBackgroundColor,
    CardRadius,
    Columns,
}

impl StyleKey {
    pub const ALL: [StyleKey; 18] = [
        StyleKey::BackgroundColor,
        StyleKey::TextColor,
        StyleKey::TitleColor,
        StyleKey::EyebrowColor,
        StyleKey::AccentColor,
        StyleKey::TitleFontSize,
        StyleKey::BodyFontSize,
        StyleKey::TextAlign,
        StyleKey::PaddingY,
        StyleKey::MaxWidth,
        StyleKey::CtaBackgroundColor,
        StyleKey::CtaTextColor,
        StyleKey::OverlayColor,
        StyleKey::OverlayOpacity,
        StyleKey::MinHeight,
        StyleKey::CardBackgroundColor,
        StyleKey::CardRadius,
        StyleKey::Columns,
    ];
}

/// Authored style overrides for one section
///
/// Absent or blank values fall back to the section's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,
}

impl SectionStyles {
    fn slot(&self, key: StyleKey) -> &Option<String> {
        match key {
            StyleKey::BackgroundColor => &self.background_color,
            StyleKey::TextColor => &self.text_color,
            StyleKey::TitleColor => &self.title_color,
            StyleKey::EyebrowColor => &self.eyebrow_color,
            StyleKey::AccentColor => &self.accent_color,
            StyleKey::TitleFontSize => &self.title_font_size,
            StyleKey::BodyFontSize => &self.body_font_size,
            StyleKey::TextAlign => &self.text_align,
            StyleKey::PaddingY => &self.padding_y,
            StyleKey::MaxWidth => &self.max_width,
            StyleKey::CtaBackgroundColor => &self.cta_background_color,
            StyleKey::CtaTextColor => &self.cta_text_color,
            StyleKey::OverlayColor => &self.overlay_color,
            StyleKey::OverlayOpacity => &self.overlay_opacity,
            StyleKey::MinHeight => &self.min_height,
            StyleKey::CardBackgroundColor => &self.card_background_color,
            StyleKey::CardRadius => &self.card_radius,
            StyleKey::Columns => &self.columns,
        }
    }

    fn slot_mut(&mut self, key: StyleKey) -> &mut Option<String> {
        match key {
            StyleKey::BackgroundColor => &mut self.background_color,
            StyleKey::TextColor => &mut self.text_color,
            StyleKey::TitleColor => &mut self.title_color,
            StyleKey::EyebrowColor => &mut self.eyebrow_color,
            StyleKey::AccentColor => &mut self.accent_color,
            StyleKey::TitleFontSize => &mut self.title_font_size,
            StyleKey::BodyFontSize => &mut self.body_font_size,
            StyleKey::TextAlign => &mut self.text_align,
            StyleKey::PaddingY => &mut self.padding_y,
            StyleKey::MaxWidth => &mut self.max_width,
            StyleKey::CtaBackgroundColor => &mut self.cta_background_color,
            StyleKey::CtaTextColor => &mut self.cta_text_color,
            StyleKey::OverlayColor => &mut self.overlay_color,
            StyleKey::OverlayOpacity => &mut self.overlay_opacity,
            StyleKey::MinHeight => &mut self.min_height,
            StyleKey::CardBackgroundColor => &mut self.card_background_color,
            StyleKey::CardRadius => &mut self.card_radius,
            StyleKey::Columns => &mut self.columns,
        }
    }

    /// Authored value, if present and non-blank
    pub fn authored(&self, key: StyleKey) -> Option<&str> {
        self.slot(key)
            .as_deref()
            .filter(|v| !v.trim().is_empty())
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<String>) {
        *self.slot_mut(key) = Some(value.into());
    }

    pub fn is_empty(&self) -> bool {
        StyleKey::ALL.iter().all(|k| self.slot(*k).is_none())
    }
}

/// Defaults shared by every section unless overridden below
const fn base_default(key: StyleKey) -> &'static str {
    match key {
        StyleKey::BackgroundColor => "#ffffff",
        StyleKey::TextColor => "#333333",
        StyleKey::TitleColor => "#1a1a1a",
        StyleKey::EyebrowColor => "#6b8e23",
        StyleKey::AccentColor => "#6b8e23",
        StyleKey::TitleFontSize => "2.5rem",
        StyleKey::BodyFontSize => "1.125rem",
        StyleKey::TextAlign => "left",
        StyleKey::PaddingY => "80px",
        StyleKey::MaxWidth => "1200px",
        StyleKey::CtaBackgroundColor => "#6b8e23",
        StyleKey::CtaTextColor => "#ffffff",
        StyleKey::OverlayColor => "#000000",
        StyleKey::OverlayOpacity => "0",
        StyleKey::MinHeight => "auto",
        StyleKey::CardBackgroundColor => "#ffffff",
        StyleKey::CardRadius => "12px",
        StyleKey::Columns => "1",
    }
}

const HERO_DEFAULTS: &[(StyleKey, &str)] = &[
    (StyleKey::BackgroundColor, "#1f3d2b"),
    (StyleKey::TextColor, "#f5f5f0"),
    (StyleKey::TitleColor, "#ffffff"),
    (StyleKey::EyebrowColor, "#c9e265"),
    (StyleKey::TitleFontSize, "4rem"),
    (StyleKey::TextAlign, "center"),
    (StyleKey::PaddingY, "120px"),
    (StyleKey::OverlayOpacity, "0.45"),
    (StyleKey::MinHeight, "80vh"),
    (StyleKey::CtaBackgroundColor, "#c9e265"),
    (StyleKey::CtaTextColor, "#1f3d2b"),
];

const ABOUT_DEFAULTS: &[(StyleKey, &str)] = &[
    (StyleKey::BackgroundColor, "#faf8f2"),
    (StyleKey::Columns, "2"),
];

const STAND_FOR_DEFAULTS: &[(StyleKey, &str)] = &[
    (StyleKey::BackgroundColor, "#1f3d2b"),
    (StyleKey::TextColor, "#e8efe4"),
    (StyleKey::TitleColor, "#ffffff"),
    (StyleKey::EyebrowColor, "#c9e265"),
    (StyleKey::TextAlign, "center"),
    (StyleKey::Columns, "3"),
];

const WHY_DEFAULTS: &[(StyleKey, &str)] = &[
    (StyleKey::AccentColor, "#c9e265"),
    (StyleKey::Columns, "2"),
];

const PRODUCTS_DEFAULTS: &[(StyleKey, &str)] = &[
    (StyleKey::BackgroundColor, "#f4f1ea"),
    (StyleKey::TitleFontSize, "2.25rem"),
    (StyleKey::TextAlign, "center"),
    (StyleKey::Columns, "3"),
];

fn section_table(kind: SectionKind) -> &'static [(StyleKey, &'static str)] {
    match kind {
        SectionKind::Hero => HERO_DEFAULTS,
        SectionKind::About => ABOUT_DEFAULTS,
        SectionKind::StandFor => STAND_FOR_DEFAULTS,
        SectionKind::Why => WHY_DEFAULTS,
        SectionKind::Products => PRODUCTS_DEFAULTS,
    }
}

/// Documented default for `key` on a section of `kind`
pub fn default_style(kind: SectionKind, key: StyleKey) -> &'static str {
    section_table(kind)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or_else(|| base_default(key))
}

/// Effective value used at render time: authored if non-blank, else default
pub fn effective_style(kind: SectionKind, styles: &SectionStyles, key: StyleKey) -> &str {
    styles
        .authored(key)
        .unwrap_or_else(|| default_style(kind, key))
}

/// Fully populated copy of `styles` with every property set to its effective value
pub fn fill_defaults(kind: SectionKind, styles: &SectionStyles) -> SectionStyles {
    let mut filled = SectionStyles::default();
    for key in StyleKey::ALL {
        filled.set(key, effective_style(kind, styles, key));
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_styles_use_section_defaults() {
        let styles = SectionStyles::default();
        assert_eq!(
            effective_style(SectionKind::Hero, &styles, StyleKey::MinHeight),
            "80vh"
        );
        assert_eq!(
            effective_style(SectionKind::About, &styles, StyleKey::MinHeight),
            "auto"
        );
        assert_eq!(
            effective_style(SectionKind::Products, &styles, StyleKey::Columns),
            "3"
        );
    }

    #[test]
    fn test_authored_value_wins() {
        let mut styles = SectionStyles::default();
        styles.set(StyleKey::BackgroundColor, "#123456");
        assert_eq!(
            effective_style(SectionKind::Hero, &styles, StyleKey::BackgroundColor),
            "#123456"
        );
    }

    #[test]
    fn test_blank_value_falls_back() {
        let mut styles = SectionStyles::default();
        styles.set(StyleKey::TextAlign, "   ");
        assert_eq!(
            effective_style(SectionKind::StandFor, &styles, StyleKey::TextAlign),
            "center"
        );
    }

    #[test]
    fn test_every_key_has_a_default_for_every_section() {
        for kind in SectionKind::ALL {
            for key in StyleKey::ALL {
                assert!(!default_style(kind, key).is_empty(), "{kind:?} {key:?}");
            }
        }
    }

    #[test]
    fn test_fill_defaults_is_idempotent() {
        let mut styles = SectionStyles::default();
        styles.set(StyleKey::TitleColor, "#ff0000");
        styles.set(StyleKey::Columns, "");

        let once = fill_defaults(SectionKind::Why, &styles);
        let twice = fill_defaults(SectionKind::Why, &once);
        assert_eq!(once, twice);
        assert_eq!(once.title_color.as_deref(), Some("#ff0000"));
        assert_eq!(once.columns.as_deref(), Some("2"));
    }

    #[test]
    fn test_empty_styles_serialize_to_empty_object() {
        let json = serde_json::to_string(&SectionStyles::default()).unwrap();
        assert_eq!(json, "{}");

        let parsed: SectionStyles =
            serde_json::from_str(r##"{"backgroundColor":"#000"}"##).unwrap();
        assert_eq!(parsed.background_color.as_deref(), Some("#000"));
        assert!(!parsed.is_empty());
    }
}
