//! Access token claims

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TokenError;

/// Claim set carried by every access token.
///
/// Serialized with the registered JWT claim names so other JWT consumers
/// can read it. Timestamps are NumericDate (whole seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Unique per issued token
    #[serde(rename = "jti")]
    pub id: Uuid,
    /// Account the token was issued to
    #[serde(rename = "sub")]
    pub subject_id: Uuid,
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl Payload {
    /// Build a fresh claim set valid for `duration` from now.
    ///
    /// A negative duration yields an already-expired payload.
    pub fn new(subject_id: Uuid, duration: Duration) -> Result<Self, TokenError> {
        Self::issued_at(subject_id, duration, Utc::now())
    }

    pub(crate) fn issued_at(
        subject_id: Uuid,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, TokenError> {
        let issued_at = now.trunc_subsecs(0);
        let expires_at = issued_at
            .checked_add_signed(duration)
            .ok_or_else(|| {
                TokenError::PayloadGeneration(format!(
                    "token duration out of range: {}",
                    duration
                ))
            })?
            .trunc_subsecs(0);

        Ok(Self {
            id: Uuid::new_v4(),
            subject_id,
            issued_at,
            expires_at,
        })
    }

    /// Payload-level validation: the token must not be past its expiry.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if now > self.expires_at {
            return Err(TokenError::ExpiredToken);
        }
        Ok(())
    }
}
