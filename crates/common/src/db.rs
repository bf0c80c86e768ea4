//! Errors raised by repository functions that need more than `sqlx::Error`

use crate::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The row is missing, or belongs to another account
    #[error("Record not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::Database(e) => Error::from(e),
        }
    }
}
