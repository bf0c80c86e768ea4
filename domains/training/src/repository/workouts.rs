//! Workout repository
//!
//! Every query is scoped to the owning account; another account's workout
//! is indistinguishable from a missing one.

use crate::domain::entities::Workout;
use chrono::{DateTime, Utc};
use lifttrack_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

pub(crate) const WORKOUT_COLUMNS: &str = "id, start_time, finish_time, user_id";

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: PgPool,
}

impl WorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, workout: &Workout) -> Result<Workout> {
        let query = format!(
            "INSERT INTO workout ({WORKOUT_COLUMNS}) VALUES ($1, $2, $3, $4) \
             RETURNING {WORKOUT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Workout>(&query)
            .bind(workout.id)
            .bind(workout.start_time)
            .bind(workout.finish_time)
            .bind(workout.user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>> {
        let query =
            format!("SELECT {WORKOUT_COLUMNS} FROM workout WHERE id = $1 AND user_id = $2");
        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(workout)
    }

    /// Workout history, newest first
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Workout>> {
        let query = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workout WHERE user_id = $1 \
             ORDER BY start_time DESC, id LIMIT $2 OFFSET $3"
        );
        let workouts = sqlx::query_as::<_, Workout>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(workouts)
    }

    /// Set the finish time. The start-time check is repeated in SQL so a
    /// concurrent edit cannot slip a finish before the start.
    pub async fn finish(
        &self,
        id: Uuid,
        user_id: Uuid,
        finish_time: DateTime<Utc>,
    ) -> Result<Option<Workout>> {
        let query = format!(
            "UPDATE workout SET finish_time = $3 \
             WHERE id = $1 AND user_id = $2 AND start_time <= $3 \
             RETURNING {WORKOUT_COLUMNS}"
        );
        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .bind(finish_time)
            .fetch_optional(&self.pool)
            .await?;

        Ok(workout)
    }

    /// Delete a workout and, by cascade, its lifts
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>> {
        let query = format!(
            "DELETE FROM workout WHERE id = $1 AND user_id = $2 RETURNING {WORKOUT_COLUMNS}"
        );
        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(workout)
    }
}
