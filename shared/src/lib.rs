//! Shared types for the brand page studio
//!
//! Page schema, role and module models, and the unified error types used by
//! the engine and any transport layer in front of it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
