//! Error types for the FitTrack schema layer

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable reason code for a single field violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// A required field had no supplied value and no default
    RequiredMissing,
    /// The supplied value is not convertible to the declared type
    TypeMismatch,
    /// The value converted but falls outside the declared range
    OutOfRange,
    /// The value is not one of the declared literals
    InvalidEnumValue,
}

impl ViolationReason {
    /// Get the wire code, matching the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            ViolationReason::RequiredMissing => "required_missing",
            ViolationReason::TypeMismatch => "type_mismatch",
            ViolationReason::OutOfRange => "out_of_range",
            ViolationReason::InvalidEnumValue => "invalid_enum_value",
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub reason: ViolationReason,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: ViolationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation failure for one record
///
/// Carries every violated field from a single validation pass, not just
/// the first. Never constructed empty.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("validation failed: {}", format_violations(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations from the validation pass, in field-check order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Check whether a specific field failed for a specific reason
    pub fn contains(&self, field: &str, reason: ViolationReason) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.reason == reason)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(ViolationReason::RequiredMissing.code(), "required_missing");
        assert_eq!(ViolationReason::TypeMismatch.code(), "type_mismatch");
        assert_eq!(ViolationReason::OutOfRange.code(), "out_of_range");
        assert_eq!(
            ViolationReason::InvalidEnumValue.code(),
            "invalid_enum_value"
        );
    }

    #[test]
    fn test_reason_serializes_as_snake_case() {
        let json = serde_json::to_string(&ViolationReason::OutOfRange).unwrap();
        assert_eq!(json, "\"out_of_range\"");
    }

    #[test]
    fn test_error_display_lists_every_violation() {
        let err = ValidationError::new(vec![
            Violation::new("age", ViolationReason::OutOfRange),
            Violation::new("email", ViolationReason::RequiredMissing),
        ]);
        let message = err.to_string();
        assert_eq!(
            message,
            "validation failed: age: out_of_range, email: required_missing"
        );
    }

    #[test]
    fn test_contains() {
        let err = ValidationError::new(vec![Violation::new("meal", ViolationReason::InvalidEnumValue)]);
        assert!(err.contains("meal", ViolationReason::InvalidEnumValue));
        assert!(!err.contains("meal", ViolationReason::OutOfRange));
        assert!(!err.contains("date", ViolationReason::InvalidEnumValue));
    }

    #[test]
    fn test_violation_report_round_trips_as_json() {
        let err = ValidationError::new(vec![Violation::new(
            "duration_min",
            ViolationReason::OutOfRange,
        )]);
        let json = serde_json::to_string(&err).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
