//! Mapping of domain errors onto HTTP responses.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use gig_core::errors::{AuthError, DomainError};
use gig_shared::error_codes;
use gig_shared::ErrorResponse;

/// Domain error wrapper for the ResponseError trait
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code, message) = classify(&self.0);
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self.0);
        } else {
            log::warn!("Request rejected: {}", self.0);
        }
        HttpResponse::build(status).json(ErrorResponse::new(code, message))
    }
}

/// Status, error code and client-facing message for a domain error
fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Auth(auth) => classify_auth(auth),
        DomainError::ValidationErr(_) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            error.to_string(),
        ),
        DomainError::Gateway { .. } => (
            StatusCode::BAD_GATEWAY,
            error_codes::UPSTREAM_ERROR,
            "Marketplace service is unavailable, please try again later".to_string(),
        ),
        DomainError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::STORAGE_ERROR,
            "Session could not be saved".to_string(),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}

fn classify_auth(error: &AuthError) -> (StatusCode, &'static str, String) {
    match error {
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_CREDENTIALS,
            error.to_string(),
        ),
        AuthError::InvalidOtp => (StatusCode::BAD_REQUEST, error_codes::INVALID_OTP, error.to_string()),
        AuthError::SessionExpired => (
            StatusCode::UNAUTHORIZED,
            error_codes::SESSION_EXPIRED,
            error.to_string(),
        ),
        AuthError::InsufficientPermissions => {
            (StatusCode::FORBIDDEN, error_codes::FORBIDDEN, error.to_string())
        }
        AuthError::MalformedResponse { .. } => (
            StatusCode::BAD_GATEWAY,
            error_codes::UPSTREAM_ERROR,
            "Marketplace service returned an unexpected response".to_string(),
        ),
    }
}
