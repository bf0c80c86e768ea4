//! Bearer-token gate middleware
//!
//! ```ignore
//! let protected = Router::new()
//!     .route("/workout", post(create_workout))
//!     .route_layer(middleware::from_fn_with_state(auth_backend, require_auth));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::backend::AuthBackend;
use crate::error::AuthError;

/// Admit the request only if it carries a valid bearer token.
///
/// On success the verified [`Payload`](crate::Payload) is stored in the
/// request extensions for downstream extractors; on failure the request is
/// answered with 401 and never reaches the handler.
pub async fn require_auth(
    State(backend): State<AuthBackend>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let payload = backend.authenticate(request.headers()).map_err(|e| {
        tracing::debug!(
            error = %e,
            code = e.error_code(),
            method = %request.method(),
            path = %request.uri().path(),
            "Request rejected by auth gate"
        );
        e
    })?;

    tracing::trace!(subject_id = %payload.subject_id, token_id = %payload.id, "Request authenticated");

    request.extensions_mut().insert(payload);
    Ok(next.run(request).await)
}
