//! Muscle group repository

use crate::domain::entities::MuscleGroup;
use lifttrack_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct MuscleGroupRepository {
    pool: PgPool,
}

impl MuscleGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, group_name: &str) -> Result<MuscleGroup> {
        let group = sqlx::query_as::<_, MuscleGroup>(
            "INSERT INTO muscle_groups (group_name) VALUES ($1) RETURNING id, group_name",
        )
        .bind(group_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(group)
    }

    pub async fn get_by_name(&self, group_name: &str) -> Result<Option<MuscleGroup>> {
        let group = sqlx::query_as::<_, MuscleGroup>(
            "SELECT id, group_name FROM muscle_groups WHERE group_name = $1",
        )
        .bind(group_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    pub async fn list(&self) -> Result<Vec<MuscleGroup>> {
        let groups = sqlx::query_as::<_, MuscleGroup>(
            "SELECT id, group_name FROM muscle_groups ORDER BY group_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    /// Rename exactly one group. Exercises follow via `ON UPDATE CASCADE`.
    pub async fn rename(&self, group_name: &str, new_name: &str) -> Result<Option<MuscleGroup>> {
        let group = sqlx::query_as::<_, MuscleGroup>(
            "UPDATE muscle_groups SET group_name = $2 \
             WHERE group_name = $1 RETURNING id, group_name",
        )
        .bind(group_name)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    /// Delete a group. Fails with a foreign-key violation while exercises use it.
    pub async fn delete(&self, group_name: &str) -> Result<Option<MuscleGroup>> {
        let group = sqlx::query_as::<_, MuscleGroup>(
            "DELETE FROM muscle_groups WHERE group_name = $1 RETURNING id, group_name",
        )
        .bind(group_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }
}
