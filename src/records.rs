//! Normalized record types for the FitTrack application
//!
//! These are the typed outputs of validation: every field populated, with
//! defaults applied for optional fields the input omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kinds::RecordKind;

/// Meal slot for a diary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    /// The closed set of accepted literals
    pub const ALLOWED: &'static [&'static str] = &["breakfast", "lunch", "dinner", "snacks"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snacks => "snacks",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Meal {
    type Err = String;

    // Literals are case-sensitive: "Breakfast" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            "snacks" => Ok(Meal::Snacks),
            _ => Err(format!(
                "Invalid meal. Must be one of: {}",
                Meal::ALLOWED.join(", ")
            )),
        }
    }
}

/// Workout activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
    Gym,
    Yoga,
    Swimming,
    Walking,
}

impl WorkoutType {
    /// The closed set of accepted literals
    pub const ALLOWED: &'static [&'static str] =
        &["running", "cycling", "gym", "yoga", "swimming", "walking"];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
            WorkoutType::Gym => "gym",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Swimming => "swimming",
            WorkoutType::Walking => "walking",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = String;

    // Literals are case-sensitive: "Running" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            "gym" => Ok(WorkoutType::Gym),
            "yoga" => Ok(WorkoutType::Yoga),
            "swimming" => Ok(WorkoutType::Swimming),
            "walking" => Ok(WorkoutType::Walking),
            _ => Err(format!(
                "Invalid workout type. Must be one of: {}",
                WorkoutType::ALLOWED.join(", ")
            )),
        }
    }
}

/// User account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    /// Age in years, 0-120 inclusive
    pub age: Option<i32>,
    pub is_active: bool,
}

/// Product catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    /// Price in dollars, non-negative
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Foods catalog entry
///
/// Macros are grams per the default serving size (100 g unless stated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    /// Default serving unit label
    pub unit: String,
    /// Default serving size that the macros refer to
    pub serving: f64,
}

/// A logged food in the user's daily diary
///
/// Denormalized: the name and macros are copied from the food catalog at
/// log time, and `food_id` is a plain string with no referential check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub meal: Meal,
    pub food_id: String,
    pub food_name: String,
    /// Number of servings, strictly positive
    pub quantity: f64,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in minutes, at least 1
    pub duration_min: i32,
    pub calories_burned: i32,
}

/// A validated record of any kind, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Record {
    User(User),
    Product(Product),
    Food(Food),
    DiaryEntry(DiaryEntry),
    WorkoutLog(WorkoutLog),
}

impl Record {
    /// The kind this record was validated as
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::User(_) => RecordKind::User,
            Record::Product(_) => RecordKind::Product,
            Record::Food(_) => RecordKind::Food,
            Record::DiaryEntry(_) => RecordKind::DiaryEntry,
            Record::WorkoutLog(_) => RecordKind::WorkoutLog,
        }
    }
}
