use thiserror::Error;

use crate::repository::RepositoryError;

pub mod catalog;
pub mod checkout;
pub mod products;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("database is not configured; set DATABASE_URL")]
    DatabaseUnconfigured,
    #[error("checkout is not configured; set PAYPAL_CLIENT_ID")]
    CheckoutDisabled,
    #[error("invalid input: {0}")]
    Form(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
