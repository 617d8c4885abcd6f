//! FitTrack Schemas
//!
//! This crate is the validation contract for the FitTrack application:
//! five record kinds (User, Product, Food, DiaryEntry, WorkoutLog), each
//! validated from an untyped field map into a normalized, typed record or
//! rejected with a report listing every violated field.
//!
//! Validation is a pure function: no persistent state is read or written
//! and every call is independent, so the crate is safe to use from any
//! number of threads without synchronization.

pub mod errors;
mod fields;
pub mod kinds;
pub mod records;
pub mod validate;

// Re-export commonly used items
pub use errors::{ValidationError, Violation, ViolationReason};
pub use kinds::RecordKind;
pub use records::{DiaryEntry, Food, Meal, Product, Record, User, WorkoutLog, WorkoutType};
pub use validate::{
    validate, validate_diary_entry, validate_food, validate_product, validate_user,
    validate_workout_log,
};
