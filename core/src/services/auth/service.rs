//! Authentication flow service

use std::sync::Arc;

use crate::domain::entities::session::Session;
use crate::errors::{DomainResult, ValidationError};
use crate::services::auth_context::AuthContext;

use super::gateway::{AuthGateway, AuthGrant, LoginRequest, OtpVerification};

/// Drives login, registration verification and logout against the auth context
pub struct AuthService<G: AuthGateway> {
    /// Backend authentication endpoints
    gateway: Arc<G>,
    /// Context owning the current session
    context: Arc<AuthContext>,
}

impl<G: AuthGateway> AuthService<G> {
    /// Create a new authentication service
    pub fn new(gateway: Arc<G>, context: Arc<AuthContext>) -> Self {
        Self { gateway, context }
    }

    /// The auth context this service writes to
    pub fn context(&self) -> &Arc<AuthContext> {
        &self.context
    }

    /// Log in and persist the resulting session
    pub async fn login(&self, request: LoginRequest) -> DomainResult<Session> {
        require("email", &request.email)?;
        require("password", &request.password)?;

        tracing::debug!(role = %request.role, "Submitting login");
        let grant = self.gateway.login(&request).await?;
        self.accept(grant)
    }

    /// Verify a registration OTP and persist the resulting session
    pub async fn verify_registration(&self, request: OtpVerification) -> DomainResult<Session> {
        require("email", &request.email)?;
        require("otp", &request.otp)?;

        tracing::debug!(role = %request.role, "Submitting registration OTP");
        let grant = self.gateway.verify_registration_otp(&request).await?;
        self.accept(grant)
    }

    /// End the session
    pub fn logout(&self) {
        self.context.clear_session();
    }

    fn accept(&self, grant: AuthGrant) -> DomainResult<Session> {
        let session = grant.into_session()?;
        self.context.establish(session.clone())?;
        Ok(session)
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}
