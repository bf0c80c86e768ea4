//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::claims::Payload;
use crate::error::AuthError;

/// Verified identity of the caller.
///
/// Uses the payload stored by [`require_auth`](crate::require_auth) when the
/// gate ran on this route, and authenticates the request itself otherwise,
/// so a handler taking `AuthUser` never runs unauthenticated.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Payload);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        if let Some(payload) = parts.extensions.get::<Payload>() {
            return Ok(AuthUser(payload.clone()));
        }

        let backend = AuthBackend::from_ref(state);
        let payload = backend.authenticate(&parts.headers)?;
        parts.extensions.insert(payload.clone());

        Ok(AuthUser(payload))
    }
}
