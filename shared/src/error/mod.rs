//! Unified error system for the page studio
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorNotice`]: Operator-facing, dismissible notice
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Brand page errors
//! - 4xxx: Module visibility errors
//! - 5xxx: Asset errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorNotice};
//!
//! let err = AppError::new(ErrorCode::PageNotFound);
//!
//! let err = AppError::malformed_source("product item without id")
//!     .with_detail("index", 2);
//!
//! let notice = ErrorNotice::from(&err);
//! assert!(!notice.retryable);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorNotice};
