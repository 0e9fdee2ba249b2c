//! Error types

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Detail key listing the fields that failed validation
pub const FIELDS_DETAIL: &str = "fields";

/// Application error with structured error code and details
///
/// This is the primary error type of the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (failing fields, resource ids, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a validation error naming every failing field
    pub fn invalid_fields<I, S>(msg: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Value> = fields
            .into_iter()
            .map(|f| Value::String(f.into()))
            .collect();
        Self::validation(msg).with_detail(FIELDS_DETAIL, Value::Array(fields))
    }

    /// Create a capability denied error (viewer attempted a write)
    pub fn admin_required(operation: impl Into<String>) -> Self {
        let op = operation.into();
        Self::with_message(
            ErrorCode::AdminRequired,
            format!("Switch to admin to {}", op),
        )
        .with_detail("operation", op)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::SerializationError, msg)
    }

    /// Create a storage unavailable error
    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageUnavailable, msg)
    }

    // ==================== Classification ====================

    /// Whether this error reports invalid caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed
                | ErrorCode::RequiredField
                | ErrorCode::InvalidFormat
                | ErrorCode::EmployeeCodeExists
        )
    }

    /// Whether this error reports a write attempted without write capability
    pub fn is_capability_denied(&self) -> bool {
        self.category() == ErrorCategory::Permission
    }

    /// Whether the storage medium itself failed
    pub fn is_storage_unavailable(&self) -> bool {
        self.code == ErrorCode::StorageUnavailable
    }

    /// Field names listed under the `fields` detail, if any
    pub fn field_errors(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|d| d.get(FIELDS_DETAIL))
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::serialization(err.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "email")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_invalid_fields() {
        let err = AppError::invalid_fields("2 fields invalid", ["name", "contact.email"]);
        assert!(err.is_validation());
        assert!(!err.is_capability_denied());
        assert_eq!(err.field_errors(), vec!["name", "contact.email"]);
    }

    #[test]
    fn test_admin_required_is_distinct_from_validation() {
        let err = AppError::admin_required("create employees");
        assert!(err.is_capability_denied());
        assert!(!err.is_validation());
        assert_eq!(err.message, "Switch to admin to create employees");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_storage_unavailable() {
        let err = AppError::storage_unavailable("disk full");
        assert!(err.is_storage_unavailable());
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Employee not found");
        assert_eq!(format!("{}", err), "Employee not found");
    }
}
