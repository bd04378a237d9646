//! Data models
//!
//! Shared between the page studio engine and any transport layer in front of it.

pub mod brand_page;
pub mod module;
pub mod role;
pub mod styles;

// Re-exports
pub use brand_page::*;
pub use module::*;
pub use role::*;
pub use styles::*;
