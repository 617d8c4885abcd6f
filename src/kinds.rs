//! Record-kind selector for the generic validation entry point

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five record kinds the schema layer validates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    User,
    Product,
    Food,
    DiaryEntry,
    WorkoutLog,
}

impl RecordKind {
    /// Every kind, in declaration order
    pub const ALL: [RecordKind; 5] = [
        RecordKind::User,
        RecordKind::Product,
        RecordKind::Food,
        RecordKind::DiaryEntry,
        RecordKind::WorkoutLog,
    ];

    /// Kind name as written in the schema definitions
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::User => "User",
            RecordKind::Product => "Product",
            RecordKind::Food => "Food",
            RecordKind::DiaryEntry => "DiaryEntry",
            RecordKind::WorkoutLog => "WorkoutLog",
        }
    }

    /// Lowercase collection name the kind maps to in storage
    pub fn collection_name(&self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Product => "product",
            RecordKind::Food => "food",
            RecordKind::DiaryEntry => "diaryentry",
            RecordKind::WorkoutLog => "workoutlog",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(RecordKind::User),
            "product" => Ok(RecordKind::Product),
            "food" => Ok(RecordKind::Food),
            "diaryentry" | "diary_entry" => Ok(RecordKind::DiaryEntry),
            "workoutlog" | "workout_log" => Ok(RecordKind::WorkoutLog),
            _ => Err(format!("Unknown record kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("User".parse::<RecordKind>().unwrap(), RecordKind::User);
        assert_eq!("food".parse::<RecordKind>().unwrap(), RecordKind::Food);
        assert_eq!(
            "DiaryEntry".parse::<RecordKind>().unwrap(),
            RecordKind::DiaryEntry
        );
        assert_eq!(
            "workout_log".parse::<RecordKind>().unwrap(),
            RecordKind::WorkoutLog
        );
        assert!("Recipe".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_collection_names_are_lowercased_kind_names() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.collection_name(), kind.name().to_lowercase());
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string().parse::<RecordKind>().unwrap(), kind);
        }
    }
}
