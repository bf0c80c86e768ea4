//! Access-token authentication for the Lifttrack API
//!
//! Two pieces:
//! - the token codec ([`JwtMaker`] behind the [`TokenMaker`] trait), which
//!   issues and verifies signed, time-bounded HS256 tokens;
//! - the bearer gate ([`require_auth`] middleware and the [`AuthUser`]
//!   extractor), which admits a request only when its `authorization`
//!   header carries a valid token, and exposes the verified [`Payload`]
//!   to handlers.

mod backend;
mod claims;
mod error;
mod extractors;
mod gate;
mod jwt;
mod maker;

pub use backend::{AuthBackend, AUTHORIZATION_HEADER_KEY, BEARER_SCHEME};
pub use claims::Payload;
pub use error::{AuthError, TokenError};
pub use extractors::AuthUser;
pub use gate::require_auth;
pub use jwt::{JwtMaker, MIN_SECRET_KEY_SIZE};
pub use maker::TokenMaker;
