//! Schema error types
//!
//! A single error code:
//! - EVENTDB_VALIDATION_FAILED: one or more fields of a record violated
//!   their rules; the error enumerates every violation.
//!
//! Validation errors reject the whole batch they occur in. The validator
//! never recovers internally; callers translate the error upward.

use std::fmt;

/// Error code string for a failed validation.
pub const VALIDATION_FAILED: &str = "EVENTDB_VALIDATION_FAILED";

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name (e.g. "date"), or "$root" when the record is not an object
    pub field: String,
    /// Human-readable reason the rule failed
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation failure carrying every violated field.
///
/// Construction guarantees at least one violation.
#[derive(Debug, Clone)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Create a validation error from collected violations.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Create a validation error for a single violated field.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, reason)],
        }
    }

    /// Returns the error code string.
    pub fn code(&self) -> &'static str {
        VALIDATION_FAILED
    }

    /// Returns every violation, in field evaluation order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns whether the named field is among the violations.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: event record rejected ({} violation{}): ",
            VALIDATION_FAILED,
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" }
        )?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = ValidationError::single("id", "id must start with e");
        assert_eq!(err.code(), "EVENTDB_VALIDATION_FAILED");
    }

    #[test]
    fn test_display_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldViolation::new("id", "id must start with e"),
            FieldViolation::new("date", "date should be in YYYY-MM-DD format"),
        ]);
        let display = format!("{}", err);
        assert!(display.contains("EVENTDB_VALIDATION_FAILED"));
        assert!(display.contains("2 violations"));
        assert!(display.contains("id must start with e"));
        assert!(display.contains("date should be in YYYY-MM-DD format"));
    }

    #[test]
    fn test_names_field() {
        let err = ValidationError::single("date", "date is required");
        assert!(err.names_field("date"));
        assert!(!err.names_field("title"));
    }
}
