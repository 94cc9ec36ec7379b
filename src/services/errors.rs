use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the customer use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required argument was absent or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// The identifier does not resolve to a record.
    #[error("{0}")]
    NotFound(String),

    /// Wire payload violated a field constraint.
    #[error("validation error: {0}")]
    Validation(String),

    /// A domain value could not be constructed.
    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Customer not found".to_string()),
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal
            }
        }
    }
}
