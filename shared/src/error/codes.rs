//! Unified error codes for the page studio
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Brand page errors
//! - 4xxx: Module visibility errors
//! - 5xxx: Asset errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Auth ====================
    /// No authenticated actor
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Elevated role required
    ElevatedRoleRequired = 2003,

    // ==================== 3xxx: Brand page ====================
    /// Brand page not found
    PageNotFound = 3001,
    /// Clone source not found
    SourceNotFound = 3002,
    /// Clone source is structurally invalid
    MalformedSource = 3003,
    /// Target brand is missing an id or name
    InvalidTargetBrand = 3004,
    /// Workflow transition not allowed from the current state
    InvalidWorkflowState = 3005,
    /// Legacy page could not be converted
    LegacyImportFailed = 3006,

    // ==================== 4xxx: Module visibility ====================
    /// Dashboard visibility cannot be overridden
    DashboardNotConfigurable = 4002,

    // ==================== 5xxx: Asset ====================
    /// Asset reference could not be resolved
    AssetResolutionFailed = 5001,

    // ==================== 9xxx: System ====================
    /// Storage collaborator unreachable
    StorageUnavailable = 9002,
    /// Stored document could not be decoded
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Transient failures: the operation may be retried unchanged
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, ErrorCode::StorageUnavailable)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::ElevatedRoleRequired => "Elevated role required",

            // Brand page
            ErrorCode::PageNotFound => "Brand page not found",
            ErrorCode::SourceNotFound => "Clone source not found",
            ErrorCode::MalformedSource => "Clone source is malformed",
            ErrorCode::InvalidTargetBrand => "Target brand requires an id and a name",
            ErrorCode::InvalidWorkflowState => "Operation not allowed in the current workflow state",
            ErrorCode::LegacyImportFailed => "Legacy page could not be imported",

            // Module visibility
            ErrorCode::DashboardNotConfigurable => "Dashboard visibility cannot be changed",

            // Asset
            ErrorCode::AssetResolutionFailed => "Asset could not be resolved",

            // System
            ErrorCode::StorageUnavailable => "Storage is unavailable, please retry",
            ErrorCode::StorageCorrupted => "Stored document is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::ElevatedRoleRequired),

            // Brand page
            3001 => Ok(ErrorCode::PageNotFound),
            3002 => Ok(ErrorCode::SourceNotFound),
            3003 => Ok(ErrorCode::MalformedSource),
            3004 => Ok(ErrorCode::InvalidTargetBrand),
            3005 => Ok(ErrorCode::InvalidWorkflowState),
            3006 => Ok(ErrorCode::LegacyImportFailed),

            // Module visibility
            4002 => Ok(ErrorCode::DashboardNotConfigurable),

            // Asset
            5001 => Ok(ErrorCode::AssetResolutionFailed),

            // System
            9002 => Ok(ErrorCode::StorageUnavailable),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
