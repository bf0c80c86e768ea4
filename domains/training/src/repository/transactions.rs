//! Transactional free functions for the Training domain
//!
//! Callers open a transaction with [`TrainingRepositories::begin`](super::TrainingRepositories::begin),
//! chain these functions, then commit. Dropping the transaction on an early
//! return rolls everything back.

use super::lifts::LIFT_COLUMNS;
use super::workouts::WORKOUT_COLUMNS;
use crate::domain::entities::{Lift, Workout};
use chrono::{DateTime, Utc};
use lifttrack_common::RepositoryError;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Insert a workout within an existing transaction.
pub async fn create_workout_tx(
    transaction: &mut Transaction<'_, Postgres>,
    workout: &Workout,
) -> std::result::Result<Workout, sqlx::Error> {
    let query = format!(
        "INSERT INTO workout ({WORKOUT_COLUMNS}) VALUES ($1, $2, $3, $4) \
         RETURNING {WORKOUT_COLUMNS}"
    );
    sqlx::query_as::<_, Workout>(&query)
        .bind(workout.id)
        .bind(workout.start_time)
        .bind(workout.finish_time)
        .bind(workout.user_id)
        .fetch_one(&mut **transaction)
        .await
}

/// Fetch an owned workout within an existing transaction, locking its row
/// until commit so it cannot be deleted underneath the caller.
pub async fn get_workout_for_user_tx(
    transaction: &mut Transaction<'_, Postgres>,
    id: Uuid,
    user_id: Uuid,
) -> std::result::Result<Workout, RepositoryError> {
    let query = format!(
        "SELECT {WORKOUT_COLUMNS} FROM workout WHERE id = $1 AND user_id = $2 FOR UPDATE"
    );
    sqlx::query_as::<_, Workout>(&query)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(RepositoryError::NotFound)
}

/// Set a workout's finish time within an existing transaction.
pub async fn set_finish_time_tx(
    transaction: &mut Transaction<'_, Postgres>,
    id: Uuid,
    finish_time: DateTime<Utc>,
) -> std::result::Result<Workout, RepositoryError> {
    let query = format!(
        "UPDATE workout SET finish_time = $2 WHERE id = $1 AND start_time <= $2 \
         RETURNING {WORKOUT_COLUMNS}"
    );
    sqlx::query_as::<_, Workout>(&query)
        .bind(id)
        .bind(finish_time)
        .fetch_optional(&mut **transaction)
        .await?
        .ok_or(RepositoryError::NotFound)
}

/// Insert a single lift within an existing transaction.
pub async fn create_lift_tx(
    transaction: &mut Transaction<'_, Postgres>,
    lift: &Lift,
) -> std::result::Result<Lift, sqlx::Error> {
    let query = format!(
        "INSERT INTO lift ({LIFT_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {LIFT_COLUMNS}"
    );
    sqlx::query_as::<_, Lift>(&query)
        .bind(lift.id)
        .bind(&lift.exercise_name)
        .bind(lift.weight_lifted)
        .bind(lift.reps)
        .bind(lift.user_id)
        .bind(lift.workout_id)
        .fetch_one(&mut **transaction)
        .await
}

/// Insert many lifts in one statement within an existing transaction.
pub async fn create_lifts_tx(
    transaction: &mut Transaction<'_, Postgres>,
    lifts: &[Lift],
) -> std::result::Result<Vec<Lift>, sqlx::Error> {
    if lifts.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = lifts.iter().map(|l| l.id).collect();
    let exercise_names: Vec<String> = lifts.iter().map(|l| l.exercise_name.clone()).collect();
    let weights: Vec<f32> = lifts.iter().map(|l| l.weight_lifted).collect();
    let reps: Vec<i16> = lifts.iter().map(|l| l.reps).collect();
    let user_ids: Vec<Uuid> = lifts.iter().map(|l| l.user_id).collect();
    let workout_ids: Vec<Uuid> = lifts.iter().map(|l| l.workout_id).collect();

    let query = format!(
        "INSERT INTO lift ({LIFT_COLUMNS}) \
         SELECT * FROM UNNEST($1::UUID[], $2::VARCHAR[], $3::REAL[], $4::SMALLINT[], $5::UUID[], $6::UUID[]) \
         RETURNING {LIFT_COLUMNS}"
    );
    sqlx::query_as::<_, Lift>(&query)
        .bind(&ids)
        .bind(&exercise_names)
        .bind(&weights)
        .bind(&reps)
        .bind(&user_ids)
        .bind(&workout_ids)
        .fetch_all(&mut **transaction)
        .await
}
