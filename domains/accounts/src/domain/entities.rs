//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::ValidateEmail;

use lifttrack_common::{Error, Result};

/// Minimum display name length
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum display name length
pub const MAX_NAME_LENGTH: usize = 100;

/// Account entity.
///
/// Carries the stored password hash, so it is deliberately not `Serialize`;
/// API responses go through `AccountResponse`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub weight: f32,
    pub body_fat: f32,
    pub start_date: DateTime<Utc>,
    pub password_changed_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with validation
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        weight: f32,
        body_fat: f32,
    ) -> Result<Self> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(Error::Validation(format!(
                "Name must be {}-{} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            )));
        }

        let email = Self::normalize_email(&email);
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::Validation("Weight must be non-negative".to_string()));
        }

        if !body_fat.is_finite() || !(0.0..=100.0).contains(&body_fat) {
            return Err(Error::Validation(
                "Body fat must be between 0 and 100".to_string(),
            ));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            weight,
            body_fat,
            start_date: now,
            password_changed_at: now,
        })
    }

    /// Emails are matched case-insensitively
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
