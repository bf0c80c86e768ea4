//! Lift repository, including personal-record rankings

use crate::domain::entities::{Lift, LiftOrder};
use lifttrack_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the lift table, used for SELECT and RETURNING clauses.
pub(crate) const LIFT_COLUMNS: &str =
    "id, exercise_name, weight_lifted, reps, user_id, workout_id";

/// Lift columns qualified with the `l` alias for joins
const LIFT_COLUMNS_QUALIFIED: &str =
    "l.id, l.exercise_name, l.weight_lifted, l.reps, l.user_id, l.workout_id";

#[derive(Clone)]
pub struct LiftRepository {
    pool: PgPool,
}

impl LiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, lift: &Lift) -> Result<Lift> {
        let query = format!(
            "INSERT INTO lift ({LIFT_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {LIFT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Lift>(&query)
            .bind(lift.id)
            .bind(&lift.exercise_name)
            .bind(lift.weight_lifted)
            .bind(lift.reps)
            .bind(lift.user_id)
            .bind(lift.workout_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Lift>> {
        let query = format!("SELECT {LIFT_COLUMNS} FROM lift WHERE id = $1 AND user_id = $2");
        let lift = sqlx::query_as::<_, Lift>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lift)
    }

    pub async fn list_for_workout(&self, workout_id: Uuid, user_id: Uuid) -> Result<Vec<Lift>> {
        let query = format!(
            "SELECT {LIFT_COLUMNS} FROM lift WHERE workout_id = $1 AND user_id = $2 \
             ORDER BY exercise_name, id"
        );
        let lifts = sqlx::query_as::<_, Lift>(&query)
            .bind(workout_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(lifts)
    }

    /// Lift history across all workouts, most recent workout first
    pub async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Lift>> {
        let query = format!(
            "SELECT {LIFT_COLUMNS_QUALIFIED} FROM lift AS l \
             JOIN workout AS w ON w.id = l.workout_id \
             WHERE l.user_id = $1 \
             ORDER BY w.start_time DESC, l.exercise_name, l.id \
             LIMIT $2 OFFSET $3"
        );
        let lifts = sqlx::query_as::<_, Lift>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(lifts)
    }

    /// Update weight and/or reps; `None` keeps the current value.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        weight_lifted: Option<f32>,
        reps: Option<i16>,
    ) -> Result<Option<Lift>> {
        let query = format!(
            "UPDATE lift SET \
                weight_lifted = COALESCE($3, weight_lifted), \
                reps = COALESCE($4, reps) \
             WHERE id = $1 AND user_id = $2 RETURNING {LIFT_COLUMNS}"
        );
        let lift = sqlx::query_as::<_, Lift>(&query)
            .bind(id)
            .bind(user_id)
            .bind(weight_lifted)
            .bind(reps)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lift)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<Option<Lift>> {
        let query = format!(
            "DELETE FROM lift WHERE id = $1 AND user_id = $2 RETURNING {LIFT_COLUMNS}"
        );
        let lift = sqlx::query_as::<_, Lift>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lift)
    }

    /// Best lifts across every exercise
    pub async fn list_prs(
        &self,
        user_id: Uuid,
        order: LiftOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lift>> {
        let query = format!(
            "SELECT {LIFT_COLUMNS} FROM lift WHERE user_id = $1 \
             ORDER BY {} DESC, id LIMIT $2 OFFSET $3",
            order.column()
        );
        let lifts = sqlx::query_as::<_, Lift>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(lifts)
    }

    /// Best lifts for one exercise
    pub async fn list_prs_by_exercise(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        order: LiftOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lift>> {
        let query = format!(
            "SELECT {LIFT_COLUMNS} FROM lift WHERE user_id = $1 AND exercise_name = $2 \
             ORDER BY {} DESC, id LIMIT $3 OFFSET $4",
            order.column()
        );
        let lifts = sqlx::query_as::<_, Lift>(&query)
            .bind(user_id)
            .bind(exercise_name)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(lifts)
    }

    /// Best lifts for every exercise filed under one muscle group
    pub async fn list_prs_by_muscle_group(
        &self,
        user_id: Uuid,
        muscle_group: &str,
        order: LiftOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lift>> {
        let query = format!(
            "SELECT {LIFT_COLUMNS_QUALIFIED} FROM lift AS l \
             JOIN exercise AS e ON e.name = l.exercise_name \
             WHERE l.user_id = $1 AND e.muscle_group = $2 \
             ORDER BY l.{} DESC, l.id LIMIT $3 OFFSET $4",
            order.column()
        );
        let lifts = sqlx::query_as::<_, Lift>(&query)
            .bind(user_id)
            .bind(muscle_group)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(lifts)
    }
}
