//! Page document transforms
//!
//! - [`template`] - starter documents per [`TemplateLevel`]
//! - [`clone`] - retarget an existing page onto another brand
//! - [`import`] - legacy static-site export conversion
//! - [`render`] - default-filled, asset-resolved view

pub mod clone;
pub mod import;
pub mod render;
pub mod template;

pub use clone::{FALLBACK_BRAND_NAME, clone_page};
pub use import::{LegacyBlock, LegacyPage, LegacyProductCard, import_legacy};
pub use render::{RenderedCta, RenderedPage, RenderedProduct, RenderedSection, render_page};
pub use template::{TemplateLevel, generate, products_link};
