//! Category repository

use crate::domain::entities::Category;
use lifttrack_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO category (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn get(&self, id: i16) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn rename(&self, id: i16, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE category SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Delete a category; exercises filed under it become uncategorized.
    pub async fn delete(&self, id: i16) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "DELETE FROM category WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }
}
