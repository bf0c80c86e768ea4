//! HS256 JWT token maker

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::claims::Payload;
use crate::error::TokenError;
use crate::maker::TokenMaker;

/// Minimum secret length in bytes for HMAC-SHA256 signing
pub const MIN_SECRET_KEY_SIZE: usize = 32;

/// Tokens are issued as HS256; any HMAC-SHA variant is accepted on verify.
const ISSUE_ALGORITHM: Algorithm = Algorithm::HS256;
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Symmetric JWT token maker.
///
/// The secret is fixed at construction and never changes, so one instance
/// can serve concurrent requests without synchronization.
pub struct JwtMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtMaker")
            .field("algorithm", &ISSUE_ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl JwtMaker {
    /// Create a token maker from a shared secret.
    ///
    /// Fails with [`TokenError::Configuration`] if the secret is shorter than
    /// [`MIN_SECRET_KEY_SIZE`] bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.len() < MIN_SECRET_KEY_SIZE {
            return Err(TokenError::Configuration(format!(
                "secret key must be at least {} bytes, got {}",
                MIN_SECRET_KEY_SIZE,
                secret.len()
            )));
        }

        let mut validation = Validation::new(ISSUE_ALGORITHM);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        // Expiry is decided by Payload::validate, without leeway
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Verify a token against an explicit clock.
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Payload, TokenError> {
        // The declared algorithm is checked before anything else in the token is trusted
        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "Token header rejected");
            TokenError::InvalidToken
        })?;

        if !ACCEPTED_ALGORITHMS.contains(&header.alg) {
            tracing::debug!(algorithm = ?header.alg, "Token signed with unexpected algorithm");
            return Err(TokenError::InvalidToken);
        }

        let token_data =
            decode::<Payload>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                TokenError::InvalidToken
            })?;

        let payload = token_data.claims;
        payload.validate(now)?;

        Ok(payload)
    }
}

impl TokenMaker for JwtMaker {
    fn create_token(
        &self,
        subject_id: Uuid,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(subject_id, duration)?;

        let token = encode(&Header::new(ISSUE_ALGORITHM), &payload, &self.encoding_key)
            .map_err(|e| TokenError::PayloadGeneration(e.to_string()))?;

        Ok((token, payload))
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        self.verify_token_at(token, Utc::now())
    }
}
