//! # Infrastructure Layer
//!
//! Concrete implementations of the interfaces defined in `gig_core`:
//!
//! - **Storage**: file-backed, origin-scoped key-value storage for the session
//! - **HTTP**: reqwest implementations of the authentication gateway and an
//!   authorized REST client that invalidates the session on 401

/// Storage module - persistent key-value storage
pub mod storage;

/// HTTP module - marketplace REST API clients
pub mod http;

pub use http::{ApiClient, HttpAuthGateway};
pub use storage::FileStorage;

use gig_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Http(e) => DomainError::Gateway {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
