//! Raw-field extraction with violation accumulation
//!
//! `FieldReader` walks an untyped field map and records every violation it
//! finds instead of stopping at the first. Per field the check order is
//! presence, then type coercion, then range, then enum membership. Getters
//! return placeholder values after recording a violation; `finish` rejects
//! the record before any placeholder can escape.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::errors::{ValidationError, Violation, ViolationReason};

/// Numeric bound attached to a field
#[derive(Debug, Clone, Copy)]
pub(crate) enum Bound {
    /// No constraint
    Any,
    /// Inclusive lower bound
    AtLeast(f64),
    /// Exclusive lower bound
    Above(f64),
    /// Inclusive on both ends
    Between(f64, f64),
}

impl Bound {
    pub(crate) fn allows(self, value: f64) -> bool {
        match self {
            Bound::Any => true,
            Bound::AtLeast(min) => value >= min,
            Bound::Above(min) => value > min,
            Bound::Between(min, max) => value >= min && value <= max,
        }
    }
}

pub(crate) struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            violations: Vec::new(),
        }
    }

    /// Consume the reader; `Err` carries every recorded violation
    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }

    fn violation(&mut self, field: &str, reason: ViolationReason) {
        self.violations.push(Violation::new(field, reason));
    }

    // JSON null counts as absent: optional fields fall back to their
    // default, required fields report required_missing.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    pub(crate) fn required_str(&mut self, field: &str) -> String {
        match self.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                String::new()
            }
            None => {
                self.violation(field, ViolationReason::RequiredMissing);
                String::new()
            }
        }
    }

    pub(crate) fn opt_str(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                None
            }
            None => None,
        }
    }

    pub(crate) fn str_or(&mut self, field: &str, default: &str) -> String {
        match self.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                String::new()
            }
            None => default.to_string(),
        }
    }

    pub(crate) fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                default
            }
            None => default,
        }
    }

    pub(crate) fn required_f64(&mut self, field: &str, bound: Bound) -> f64 {
        match self.get(field) {
            Some(value) => self.checked_f64(field, value, bound),
            None => {
                self.violation(field, ViolationReason::RequiredMissing);
                0.0
            }
        }
    }

    pub(crate) fn f64_or(&mut self, field: &str, default: f64, bound: Bound) -> f64 {
        match self.get(field) {
            Some(value) => self.checked_f64(field, value, bound),
            None => default,
        }
    }

    fn checked_f64(&mut self, field: &str, value: &Value, bound: Bound) -> f64 {
        match value.as_f64() {
            Some(n) if bound.allows(n) => n,
            Some(_) => {
                self.violation(field, ViolationReason::OutOfRange);
                0.0
            }
            None => {
                self.violation(field, ViolationReason::TypeMismatch);
                0.0
            }
        }
    }

    pub(crate) fn required_i32(&mut self, field: &str, bound: Bound) -> i32 {
        match self.get(field) {
            Some(value) => self.checked_i32(field, value, bound),
            None => {
                self.violation(field, ViolationReason::RequiredMissing);
                0
            }
        }
    }

    pub(crate) fn opt_i32(&mut self, field: &str, bound: Bound) -> Option<i32> {
        let value = self.get(field)?;
        Some(self.checked_i32(field, value, bound))
    }

    fn checked_i32(&mut self, field: &str, value: &Value, bound: Bound) -> i32 {
        // An integral float coerces to int; anything else is a type error.
        let integer = match value.as_i64() {
            Some(i) => Some(i),
            None => match value.as_f64() {
                Some(f) if f.fract() == 0.0 => Some(f as i64),
                _ => None,
            },
        };
        match integer {
            Some(i) if !bound.allows(i as f64) => {
                self.violation(field, ViolationReason::OutOfRange);
                0
            }
            Some(i) => match i32::try_from(i) {
                Ok(n) => n,
                Err(_) => {
                    self.violation(field, ViolationReason::OutOfRange);
                    0
                }
            },
            None => {
                self.violation(field, ViolationReason::TypeMismatch);
                0
            }
        }
    }

    /// Calendar date in `YYYY-MM-DD`; unparseable dates are a type mismatch
    pub(crate) fn required_date(&mut self, field: &str) -> NaiveDate {
        match self.get(field) {
            Some(Value::String(s)) => match NaiveDate::from_str(s) {
                Ok(date) => date,
                Err(_) => {
                    self.violation(field, ViolationReason::TypeMismatch);
                    NaiveDate::default()
                }
            },
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                NaiveDate::default()
            }
            None => {
                self.violation(field, ViolationReason::RequiredMissing);
                NaiveDate::default()
            }
        }
    }

    /// Enumerated literal: a non-string is a type mismatch, a string
    /// outside the closed set is an invalid enum value
    pub(crate) fn required_variant<T>(&mut self, field: &str) -> T
    where
        T: FromStr + Default,
    {
        match self.get(field) {
            Some(Value::String(s)) => match s.parse::<T>() {
                Ok(variant) => variant,
                Err(_) => {
                    self.violation(field, ViolationReason::InvalidEnumValue);
                    T::default()
                }
            },
            Some(_) => {
                self.violation(field, ViolationReason::TypeMismatch);
                T::default()
            }
            None => {
                self.violation(field, ViolationReason::RequiredMissing);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Meal;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_bound_checks() {
        assert!(Bound::Any.allows(f64::MIN));
        assert!(Bound::AtLeast(0.0).allows(0.0));
        assert!(!Bound::AtLeast(0.0).allows(-0.1));
        assert!(Bound::Above(0.0).allows(0.1));
        assert!(!Bound::Above(0.0).allows(0.0));
        assert!(Bound::Between(0.0, 120.0).allows(0.0));
        assert!(Bound::Between(0.0, 120.0).allows(120.0));
        assert!(!Bound::Between(0.0, 120.0).allows(121.0));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let fields = object(json!({ "name": null, "serving": null }));
        let mut reader = FieldReader::new(&fields);
        assert_eq!(reader.f64_or("serving", 100.0, Bound::Any), 100.0);
        reader.required_str("name");
        let err = reader.finish().unwrap_err();
        assert!(err.contains("name", ViolationReason::RequiredMissing));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_violations_accumulate_across_fields() {
        let fields = object(json!({ "a": 1, "b": "not a number" }));
        let mut reader = FieldReader::new(&fields);
        reader.required_str("a");
        reader.required_f64("b", Bound::Any);
        reader.required_str("c");
        let err = reader.finish().unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err.contains("a", ViolationReason::TypeMismatch));
        assert!(err.contains("b", ViolationReason::TypeMismatch));
        assert!(err.contains("c", ViolationReason::RequiredMissing));
    }

    #[test]
    fn test_integral_float_coerces_to_int() {
        let fields = object(json!({ "whole": 3.0, "fractional": 3.5 }));
        let mut reader = FieldReader::new(&fields);
        assert_eq!(reader.required_i32("whole", Bound::Any), 3);
        reader.required_i32("fractional", Bound::Any);
        let err = reader.finish().unwrap_err();
        assert!(err.contains("fractional", ViolationReason::TypeMismatch));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_int_beyond_i32_is_out_of_range() {
        let fields = object(json!({ "big": 3_000_000_000i64 }));
        let mut reader = FieldReader::new(&fields);
        reader.required_i32("big", Bound::AtLeast(0.0));
        let err = reader.finish().unwrap_err();
        assert!(err.contains("big", ViolationReason::OutOfRange));
    }

    #[test]
    fn test_date_parsing() {
        let fields = object(json!({
            "ok": "2024-01-01",
            "bad_format": "01/02/2024",
            "not_a_date": "2024-13-40",
            "wrong_type": 20240101,
        }));
        let mut reader = FieldReader::new(&fields);
        assert_eq!(
            reader.required_date("ok"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        reader.required_date("bad_format");
        reader.required_date("not_a_date");
        reader.required_date("wrong_type");
        let err = reader.finish().unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err.contains("bad_format", ViolationReason::TypeMismatch));
        assert!(err.contains("not_a_date", ViolationReason::TypeMismatch));
        assert!(err.contains("wrong_type", ViolationReason::TypeMismatch));
    }

    #[test]
    fn test_enum_field_reasons() {
        let fields = object(json!({ "ok": "lunch", "unknown": "brunch", "wrong_type": 2 }));
        let mut reader = FieldReader::new(&fields);
        assert_eq!(reader.required_variant::<Meal>("ok"), Meal::Lunch);
        reader.required_variant::<Meal>("unknown");
        reader.required_variant::<Meal>("wrong_type");
        reader.required_variant::<Meal>("missing");
        let err = reader.finish().unwrap_err();
        assert!(err.contains("unknown", ViolationReason::InvalidEnumValue));
        assert!(err.contains("wrong_type", ViolationReason::TypeMismatch));
        assert!(err.contains("missing", ViolationReason::RequiredMissing));
    }
}
