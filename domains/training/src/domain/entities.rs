//! Domain entities for the Training domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::validation::{validate_catalog_name, validate_reps, validate_weight};
use lifttrack_common::{Error, Result};

/// Exercise category (e.g. "Barbell", "Machine")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i16,
    pub name: String,
}

/// Muscle group exercises are filed under (e.g. "Chest")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MuscleGroup {
    pub id: i16,
    pub group_name: String,
}

/// Catalog exercise; lifts reference it by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub muscle_group: String,
    pub category: Option<i16>,
}

/// Training session owned by one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub finish_time: Option<DateTime<Utc>>,
    pub user_id: Uuid,
}

impl Workout {
    /// Start a new, unfinished workout
    pub fn new(user_id: Uuid, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time,
            finish_time: None,
            user_id,
        }
    }

    /// Check that `finish_time` may close this workout
    pub fn validate_finish(&self, finish_time: DateTime<Utc>) -> Result<()> {
        if finish_time < self.start_time {
            return Err(Error::Validation(
                "Finish time must not precede start time".to_string(),
            ));
        }
        Ok(())
    }
}

/// One recorded set: an exercise performed for `reps` at `weight_lifted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lift {
    pub id: Uuid,
    pub exercise_name: String,
    pub weight_lifted: f32,
    pub reps: i16,
    pub user_id: Uuid,
    pub workout_id: Uuid,
}

impl Lift {
    /// Create a new lift with validation
    pub fn new(
        user_id: Uuid,
        workout_id: Uuid,
        exercise_name: String,
        weight_lifted: f32,
        reps: i16,
    ) -> Result<Self> {
        validate_catalog_name(&exercise_name)?;
        validate_weight(weight_lifted)?;
        validate_reps(reps)?;

        Ok(Self {
            id: Uuid::new_v4(),
            exercise_name,
            weight_lifted,
            reps,
            user_id,
            workout_id,
        })
    }
}

/// Workout together with its lifts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    pub lifts: Vec<Lift>,
}

/// Ranking used for personal-record listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftOrder {
    Weight,
    Reps,
}

impl LiftOrder {
    /// Column the ranking sorts on. Only these fixed names ever reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            LiftOrder::Weight => "weight_lifted",
            LiftOrder::Reps => "reps",
        }
    }
}

impl fmt::Display for LiftOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftOrder::Weight => write!(f, "weight"),
            LiftOrder::Reps => write!(f, "reps"),
        }
    }
}

impl FromStr for LiftOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weight" => Ok(LiftOrder::Weight),
            "reps" => Ok(LiftOrder::Reps),
            other => Err(Error::Validation(format!(
                "Invalid order_by '{}': expected 'weight' or 'reps'",
                other
            ))),
        }
    }
}
