//! Token and authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Token codec failure.
///
/// `ExpiredToken` means the token was genuine but is past its validity
/// window; `InvalidToken` means it was malformed, forged, or signed with an
/// unexpected algorithm. Callers rely on the two staying distinct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token maker configuration: {0}")]
    Configuration(String),

    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,

    #[error("failed to generate token payload: {0}")]
    PayloadGeneration(String),
}

/// Rejection produced by the bearer gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authorization header is not provided")]
    MissingAuthorization,

    #[error("invalid authorization header format")]
    InvalidAuthorizationFormat,

    #[error("authorization type {0} is not supported")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorizationFormat => "INVALID_AUTHORIZATION",
            AuthError::UnsupportedScheme(_) => "UNSUPPORTED_AUTHORIZATION_TYPE",
            AuthError::Token(TokenError::ExpiredToken) => "EXPIRED_TOKEN",
            AuthError::Token(TokenError::InvalidToken) => "INVALID_TOKEN",
            AuthError::Token(_) => "AUTH_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // Codec misconfiguration or generation failure is never the caller's fault
            AuthError::Token(TokenError::Configuration(_))
            | AuthError::Token(TokenError::PayloadGeneration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
