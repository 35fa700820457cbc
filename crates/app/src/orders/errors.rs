//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Errors from the orders store.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// A required column was missing from the payload.
    #[error("missing required data")]
    MissingRequiredData,

    /// The payload violated a storage constraint.
    #[error("invalid data")]
    InvalidData,

    /// Any other storage failure; retryable from the caller's view.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
