//! Utilities - logging setup and error re-exports
//!
//! - [`AppError`] - unified error type (from shared::error)
//! - [`logger`] - tracing subscriber setup

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorNotice};
