//! HTTP-facing error type shared by every domain
//!
//! Every error renders as `{"error": {"code": "...", "message": "..."}}`.
//! Server-side failures are logged and replaced by a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input or a broken reference (400)
    #[error("{0}")]
    Validation(String),

    /// Login with an unknown email or a wrong password (401)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated, but not allowed to touch the resource (403)
    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (409)
    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        self.parts().1
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            Error::Authorization(_) => (StatusCode::FORBIDDEN, "AUTHORIZATION_ERROR"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Constraint violations are the client's fault; everything else is ours.
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Error::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::Conflict(
                format!(
                    "Record already exists ({})",
                    db_err.constraint().unwrap_or("unique")
                ),
            ),
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Error::Validation(format!(
                    "Referenced record does not exist or is still in use ({})",
                    db_err.constraint().unwrap_or("foreign key")
                ))
            }
            _ => Error::Database(err),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = json!({ "error": { "code": code, "message": message } });
        (status, Json(body)).into_response()
    }
}
