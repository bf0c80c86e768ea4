//! Exercise repository

use crate::domain::entities::Exercise;
use lifttrack_common::Result;
use sqlx::PgPool;

const EXERCISE_COLUMNS: &str = "id, name, muscle_group, category";

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: PgPool,
}

impl ExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        muscle_group: &str,
        category: Option<i16>,
    ) -> Result<Exercise> {
        let query = format!(
            "INSERT INTO exercise (name, muscle_group, category) \
             VALUES ($1, $2, $3) RETURNING {EXERCISE_COLUMNS}"
        );
        let exercise = sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .bind(muscle_group)
            .bind(category)
            .fetch_one(&self.pool)
            .await?;

        Ok(exercise)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Exercise>> {
        let query = format!("SELECT {EXERCISE_COLUMNS} FROM exercise WHERE name = $1");
        let exercise = sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(exercise)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Exercise>> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercise ORDER BY name LIMIT $1 OFFSET $2"
        );
        let exercises = sqlx::query_as::<_, Exercise>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(exercises)
    }

    pub async fn list_by_muscle_group(&self, muscle_group: &str) -> Result<Vec<Exercise>> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercise WHERE muscle_group = $1 ORDER BY name"
        );
        let exercises = sqlx::query_as::<_, Exercise>(&query)
            .bind(muscle_group)
            .fetch_all(&self.pool)
            .await?;

        Ok(exercises)
    }

    /// Rename and/or regroup an exercise; `None` keeps the current value.
    /// Recorded lifts follow a rename via `ON UPDATE CASCADE`.
    pub async fn update(
        &self,
        name: &str,
        new_name: Option<&str>,
        new_muscle_group: Option<&str>,
    ) -> Result<Option<Exercise>> {
        let query = format!(
            "UPDATE exercise SET \
                name = COALESCE($2, name), \
                muscle_group = COALESCE($3, muscle_group) \
             WHERE name = $1 RETURNING {EXERCISE_COLUMNS}"
        );
        let exercise = sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .bind(new_name)
            .bind(new_muscle_group)
            .fetch_optional(&self.pool)
            .await?;

        Ok(exercise)
    }

    /// Delete an exercise. Fails with a foreign-key violation while lifts reference it.
    pub async fn delete(&self, name: &str) -> Result<Option<Exercise>> {
        let query = format!("DELETE FROM exercise WHERE name = $1 RETURNING {EXERCISE_COLUMNS}");
        let exercise = sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(exercise)
    }
}
