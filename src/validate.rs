//! Per-kind validation functions
//!
//! Each function is a pure, single-pass check of an untyped field map
//! against one record kind's rule set. Violations are collected across
//! every field, so one call reports every problem with the input.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::ValidationError;
use crate::fields::{Bound, FieldReader};
use crate::kinds::RecordKind;
use crate::records::{DiaryEntry, Food, Meal, Product, Record, User, WorkoutLog, WorkoutType};

/// Validate `fields` against the rule set of `kind`
///
/// Returns the normalized record with defaults applied, or a report
/// listing every violated field.
pub fn validate(kind: RecordKind, fields: &Map<String, Value>) -> Result<Record, ValidationError> {
    let result = match kind {
        RecordKind::User => validate_user(fields).map(Record::User),
        RecordKind::Product => validate_product(fields).map(Record::Product),
        RecordKind::Food => validate_food(fields).map(Record::Food),
        RecordKind::DiaryEntry => validate_diary_entry(fields).map(Record::DiaryEntry),
        RecordKind::WorkoutLog => validate_workout_log(fields).map(Record::WorkoutLog),
    };
    if let Err(err) = &result {
        debug!(
            kind = kind.name(),
            violations = err.violations().len(),
            "record rejected"
        );
    }
    result
}

/// User account: name, email and address are required; age is optional
/// within 0-120 inclusive
pub fn validate_user(fields: &Map<String, Value>) -> Result<User, ValidationError> {
    let mut reader = FieldReader::new(fields);
    let name = reader.required_str("name");
    let email = reader.required_str("email");
    let address = reader.required_str("address");
    let age = reader.opt_i32("age", Bound::Between(0.0, 120.0));
    let is_active = reader.bool_or("is_active", true);
    reader.finish()?;
    Ok(User {
        name,
        email,
        address,
        age,
        is_active,
    })
}

/// Product: title, category and a non-negative price are required
pub fn validate_product(fields: &Map<String, Value>) -> Result<Product, ValidationError> {
    let mut reader = FieldReader::new(fields);
    let title = reader.required_str("title");
    let description = reader.opt_str("description");
    let price = reader.required_f64("price", Bound::AtLeast(0.0));
    let category = reader.required_str("category");
    let in_stock = reader.bool_or("in_stock", true);
    reader.finish()?;
    Ok(Product {
        title,
        description,
        price,
        category,
        in_stock,
    })
}

/// Food catalog entry: macros default to zero grams against a 100 g serving
pub fn validate_food(fields: &Map<String, Value>) -> Result<Food, ValidationError> {
    let mut reader = FieldReader::new(fields);
    let name = reader.required_str("name");
    let calories = reader.required_f64("calories", Bound::AtLeast(0.0));
    let carbs = reader.f64_or("carbs", 0.0, Bound::AtLeast(0.0));
    let protein = reader.f64_or("protein", 0.0, Bound::AtLeast(0.0));
    let fat = reader.f64_or("fat", 0.0, Bound::AtLeast(0.0));
    let unit = reader.str_or("unit", "g");
    let serving = reader.f64_or("serving", 100.0, Bound::Any);
    reader.finish()?;
    Ok(Food {
        name,
        calories,
        carbs,
        protein,
        fat,
        unit,
        serving,
    })
}

/// Diary entry: macros are denormalized copies logged alongside the food
///
/// `food_id` is a plain string; it is not checked against the food catalog.
pub fn validate_diary_entry(fields: &Map<String, Value>) -> Result<DiaryEntry, ValidationError> {
    let mut reader = FieldReader::new(fields);
    let date = reader.required_date("date");
    let meal = reader.required_variant::<Meal>("meal");
    let food_id = reader.required_str("food_id");
    let food_name = reader.required_str("food_name");
    let quantity = reader.f64_or("quantity", 1.0, Bound::Above(0.0));
    let calories = reader.required_f64("calories", Bound::Any);
    let carbs = reader.required_f64("carbs", Bound::Any);
    let protein = reader.required_f64("protein", Bound::Any);
    let fat = reader.required_f64("fat", Bound::Any);
    reader.finish()?;
    Ok(DiaryEntry {
        date,
        meal,
        food_id,
        food_name,
        quantity,
        calories,
        carbs,
        protein,
        fat,
    })
}

/// Workout log: duration is at least one minute, calories non-negative
pub fn validate_workout_log(fields: &Map<String, Value>) -> Result<WorkoutLog, ValidationError> {
    let mut reader = FieldReader::new(fields);
    let date = reader.required_date("date");
    let workout_type = reader.required_variant::<WorkoutType>("type");
    let duration_min = reader.required_i32("duration_min", Bound::AtLeast(1.0));
    let calories_burned = reader.required_i32("calories_burned", Bound::AtLeast(0.0));
    reader.finish()?;
    Ok(WorkoutLog {
        date,
        workout_type,
        duration_min,
        calories_burned,
    })
}
