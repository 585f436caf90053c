//! Mock implementations for testing the authentication flow

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::auth::{AuthGateway, AuthGrant, LoginRequest, OtpVerification};

pub enum MockReply {
    Grant(AuthGrant),
    InvalidCredentials,
    InvalidOtp,
    Unavailable,
}

pub struct MockAuthGateway {
    reply: MockReply,
    pub calls: Mutex<Vec<String>>,
}

impl MockAuthGateway {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn granting(token: &str, role: &str, user_id: &str) -> Self {
        Self::new(MockReply::Grant(AuthGrant {
            token: token.to_string(),
            role: role.to_string(),
            user_id: user_id.to_string(),
        }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond(&self, call: &str) -> DomainResult<AuthGrant> {
        self.calls.lock().unwrap().push(call.to_string());
        match &self.reply {
            MockReply::Grant(grant) => Ok(grant.clone()),
            MockReply::InvalidCredentials => Err(AuthError::InvalidCredentials.into()),
            MockReply::InvalidOtp => Err(AuthError::InvalidOtp.into()),
            MockReply::Unavailable => Err(DomainError::Gateway {
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthGrant> {
        self.respond(&format!("login:{}", request.email))
    }

    async fn verify_registration_otp(&self, request: &OtpVerification) -> DomainResult<AuthGrant> {
        self.respond(&format!("verify:{}", request.email))
    }
}
