//! Input validation helpers
//!
//! Centralized text length constants and a collector that gathers every
//! failing field before reporting, so the caller can highlight all of them.

use shared::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Display names, supervisor and emergency contact names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: employee code, phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321 length)
pub const MAX_EMAIL_LEN: usize = 254;

/// Photo: URL or embedded data URI
pub const MAX_PHOTO_LEN: usize = 2 * 1024 * 1024;

// ── Field checks ────────────────────────────────────────────────────

/// A required string must be present, non-blank and within the length limit.
pub fn check_required_text(value: Option<&str>, max_len: usize) -> Result<(), String> {
    match value {
        None => Err("is required".to_string()),
        Some(v) if v.trim().is_empty() => Err("must not be empty".to_string()),
        Some(v) => check_length(v, max_len),
    }
}

/// An optional string, if present, must be within the length limit.
pub fn check_optional_text(value: Option<&str>, max_len: usize) -> Result<(), String> {
    value.map_or(Ok(()), |v| check_length(v, max_len))
}

fn check_length(value: &str, max_len: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len > max_len {
        return Err(format!("is too long ({len} chars, max {max_len})"));
    }
    Ok(())
}

/// Collects field-level failures
#[derive(Debug, Default)]
pub struct FieldViolations {
    items: Vec<(String, String)>,
}

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the failure of a check, if any; returns whether it passed
    pub fn check(&mut self, field: &str, result: Result<(), String>) -> bool {
        match result {
            Ok(()) => true,
            Err(reason) => {
                self.items.push((field.to_string(), reason));
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Ok(())` when nothing failed, otherwise a ValidationFailed error
    /// listing every failing field
    pub fn into_result(self) -> AppResult<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        let message = self
            .items
            .iter()
            .map(|(field, reason)| format!("{field} {reason}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::invalid_fields(
            message,
            self.items.into_iter().map(|(field, _)| field),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(check_required_text(Some("Ada"), MAX_NAME_LEN).is_ok());
        assert_eq!(
            check_required_text(Some("   "), MAX_NAME_LEN),
            Err("must not be empty".to_string())
        );
        assert_eq!(
            check_required_text(None, MAX_NAME_LEN),
            Err("is required".to_string())
        );
        assert!(check_required_text(Some(&"x".repeat(201)), MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(check_optional_text(None, 3).is_ok());
        assert!(check_optional_text(Some("abc"), 3).is_ok());
        assert!(check_optional_text(Some("abcd"), 3).is_err());
    }

    #[test]
    fn test_violations_collect_every_field() {
        let mut v = FieldViolations::new();
        assert!(!v.check("name", check_required_text(Some(""), MAX_NAME_LEN)));
        assert!(!v.is_empty());
        v.check("employeeId", check_required_text(None, MAX_SHORT_TEXT_LEN));
        v.check("contact.phone", Ok(()));

        let err = v.into_result().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field_errors(), vec!["name", "employeeId"]);
        assert_eq!(err.message, "name must not be empty; employeeId is required");
    }

    #[test]
    fn test_no_violations_is_ok() {
        assert!(FieldViolations::new().into_result().is_ok());
    }
}
