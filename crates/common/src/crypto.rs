//! Password hashing shared across Lifttrack crates
//!
//! Passwords are stored as bcrypt hashes. Hashing is CPU bound, so both
//! operations run on the blocking thread pool.

use crate::error::{Error, Result};

/// bcrypt work factor for stored password hashes
pub const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Well-formed hash at `PASSWORD_HASH_COST` that no password matches
const DUMMY_PASSWORD_HASH: &str = "$2b$12$KQDuO/WCluxZ1Lvs.px6zuy9nRwILbqsKH359fMcFBCvIdjK2/sU6";

/// Hash a plaintext password for storage.
pub async fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, PASSWORD_HASH_COST).await
}

/// Hash with an explicit work factor.
pub async fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| Error::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; a malformed stored hash is an internal error.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| Error::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| Error::Internal(format!("Failed to verify password: {}", e)))
}

/// Spend the same bcrypt work as `verify_password` when no account exists.
///
/// Keeps a login for an unknown email as slow as one with a wrong password.
pub async fn verify_dummy_password(password: &str) -> Result<()> {
    verify_password(password, DUMMY_PASSWORD_HASH).await?;
    Ok(())
}
