//! Use cases composing the store with the derivation engine.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod client;
pub mod dashboard;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("client not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
