//! Token maker abstraction

use chrono::Duration;
use uuid::Uuid;

use crate::claims::Payload;
use crate::error::TokenError;

/// Issues and verifies access tokens.
///
/// Implementations hold only immutable key material, so a single instance
/// is shared across all requests behind an `Arc`.
pub trait TokenMaker: Send + Sync {
    /// Issue a token for `subject_id` valid for `duration`.
    ///
    /// Returns the encoded token together with the exact claims it carries.
    fn create_token(
        &self,
        subject_id: Uuid,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError>;

    /// Verify an untrusted token string and return its claims.
    fn verify_token(&self, token: &str) -> Result<Payload, TokenError>;
}
