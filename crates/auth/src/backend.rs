//! Bearer-token authentication backend
//!
//! Wraps the shared [`TokenMaker`] and turns an `authorization` header into
//! a verified [`Payload`].
//!
//! Domain states expose it via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::claims::Payload;
use crate::error::AuthError;
use crate::maker::TokenMaker;

/// Header carrying the credential
pub const AUTHORIZATION_HEADER_KEY: &str = "authorization";

/// The only supported authorization scheme (compared case-insensitively)
pub const BEARER_SCHEME: &str = "bearer";

#[derive(Clone)]
pub struct AuthBackend {
    maker: Arc<dyn TokenMaker>,
}

impl AuthBackend {
    pub fn new(maker: Arc<dyn TokenMaker>) -> Self {
        Self { maker }
    }

    pub fn maker(&self) -> &dyn TokenMaker {
        self.maker.as_ref()
    }

    /// Authenticate a request from its headers.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Payload, AuthError> {
        let header = headers
            .get(AUTHORIZATION_HEADER_KEY)
            .ok_or(AuthError::MissingAuthorization)?;

        let header = header
            .to_str()
            .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

        let token = extract_bearer_token(header)?;

        Ok(self.maker.verify_token(token)?)
    }
}

/// Split `"<scheme> <token>"` and return the token for the bearer scheme.
pub(crate) fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [scheme, token] = fields.as_slice() else {
        return Err(AuthError::InvalidAuthorizationFormat);
    };

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthError::UnsupportedScheme(scheme.to_lowercase()));
    }

    Ok(*token)
}
