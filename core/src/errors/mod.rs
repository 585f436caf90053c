//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, StorageError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Upstream service error: {message}")]
    Gateway { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Checks if the error means the backend rejected the current credentials
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, DomainError::Auth(AuthError::SessionExpired))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
