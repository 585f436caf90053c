//! Error types for authentication, session storage and validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid verification code")]
    InvalidOtp,

    #[error("Session expired")]
    SessionExpired,

    #[error("Malformed authentication response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Session storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Unknown role: {value}")]
    UnknownRole { value: String },
}
