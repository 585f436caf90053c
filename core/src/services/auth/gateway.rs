//! Boundary to the marketplace backend's authentication endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::session::{Role, Session};
use crate::errors::{AuthError, DomainResult};

/// Credentials submitted by the login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Account kind the user is logging in as
    pub role: Role,
}

/// One-time password submitted to finish registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerification {
    pub email: String,
    pub otp: String,
    pub role: Role,
}

/// Identity granted by the backend after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthGrant {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub user_id: String,
}

impl AuthGrant {
    /// Converts the grant into a session, rejecting partial grants
    pub fn into_session(self) -> Result<Session, AuthError> {
        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| AuthError::MalformedResponse {
                reason: e.to_string(),
            })?;
        Session::new(self.token, role, self.user_id).map_err(|e| AuthError::MalformedResponse {
            reason: e.to_string(),
        })
    }
}

/// Authentication endpoints of the backend
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a grant
    ///
    /// # Errors
    /// * `AuthError::InvalidCredentials` - Backend refused the credentials
    /// * `DomainError::Gateway` - Transport or unexpected backend failure
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthGrant>;

    /// Finish registration with the emailed one-time password
    ///
    /// # Errors
    /// * `AuthError::InvalidOtp` - Backend refused the code
    /// * `DomainError::Gateway` - Transport or unexpected backend failure
    async fn verify_registration_otp(&self, request: &OtpVerification) -> DomainResult<AuthGrant>;
}
