//! HTTP implementation of the authentication gateway

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};

use gig_core::domain::Role;
use gig_core::errors::{AuthError, DomainError, DomainResult};
use gig_core::services::auth::{AuthGateway, AuthGrant, LoginRequest, OtpVerification};
use gig_shared::config::ApiConfig;

use super::build_client;
use crate::InfrastructureError;

/// Talks to `POST {base}/{role}/login` and `POST {base}/{role}/verify-otp`
pub struct HttpAuthGateway {
    client: reqwest::Client,
    config: ApiConfig,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyOtpBody<'a> {
    email: &'a str,
    otp: &'a str,
}

impl HttpAuthGateway {
    /// Create a gateway for the configured backend
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    fn url(&self, role: Role, action: &str) -> String {
        self.config.endpoint(&format!("{}/{}", role.as_str(), action))
    }

    async fn post<B: Serialize>(
        &self,
        url: String,
        body: &B,
        rejected: AuthError,
    ) -> DomainResult<AuthGrant> {
        debug!(%url, "Posting authentication request");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(InfrastructureError::from)?;

        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            return Err(rejected.into());
        }
        if !status.is_success() {
            warn!(%url, %status, "Authentication endpoint failed");
            return Err(DomainError::Gateway {
                message: format!("authentication endpoint returned {}", status),
            });
        }

        response
            .json::<AuthGrant>()
            .await
            .map_err(|e| {
                AuthError::MalformedResponse {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthGrant> {
        let body = LoginBody {
            email: &request.email,
            password: &request.password,
        };
        self.post(self.url(request.role, "login"), &body, AuthError::InvalidCredentials)
            .await
    }

    async fn verify_registration_otp(&self, request: &OtpVerification) -> DomainResult<AuthGrant> {
        let body = VerifyOtpBody {
            email: &request.email,
            otp: &request.otp,
        };
        self.post(self.url(request.role, "verify-otp"), &body, AuthError::InvalidOtp)
            .await
    }
}
