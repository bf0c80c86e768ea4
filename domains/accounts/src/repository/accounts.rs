//! Account repository

use crate::domain::entities::Account;
use lifttrack_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the accounts table, used for SELECT and RETURNING clauses.
const ACCOUNT_COLUMNS: &str = "\
    id, name, email, password_hash, \
    weight, body_fat, start_date, password_changed_at";

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account
    pub async fn create(&self, account: &Account) -> Result<Account> {
        let query = format!(
            "INSERT INTO accounts ({ACCOUNT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Account>(&query)
            .bind(account.id)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.weight)
            .bind(account.body_fat)
            .bind(account.start_date)
            .bind(account.password_changed_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Find account by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// Find account by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    /// List accounts ordered by name
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Account>> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts \
             ORDER BY name, id LIMIT $1 OFFSET $2"
        );
        let accounts = sqlx::query_as::<_, Account>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(accounts)
    }

    /// Delete an account, returning it if it existed.
    ///
    /// Workouts and lifts owned by the account are removed by cascade.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Account>> {
        let query = format!("DELETE FROM accounts WHERE id = $1 RETURNING {ACCOUNT_COLUMNS}");
        let deleted = sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted)
    }
}
