//! Unified error system for the roster workspace
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation)
//! - 2xxx: Permission errors (capability flag)
//! - 8xxx: Employee errors
//! - 9xxx: System errors (storage)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::invalid_fields("name must not be empty", ["name"]);
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.code.code(), 2);
//! assert_eq!(err.field_errors(), vec!["name"]);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, FIELDS_DETAIL};
