//! Shared fixtures for navigation shell tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use gig_api::app::AppState;
use gig_core::errors::{AuthError, DomainError, DomainResult};
use gig_core::services::{AuthGateway, AuthGrant, LoginRequest, OtpVerification};
use gig_core::{AuthContext, KeyValueSessionStore, MemoryStorage, Role, Session, SessionStore};
use gig_shared::config::RoutesConfig;

/// Canned backend replies
pub enum StubGateway {
    Grant(AuthGrant),
    Reject,
    Unavailable,
}

impl StubGateway {
    pub fn granting(token: &str, role: &str, user_id: &str) -> Self {
        StubGateway::Grant(AuthGrant {
            token: token.to_string(),
            role: role.to_string(),
            user_id: user_id.to_string(),
        })
    }

    fn reply(&self, rejection: AuthError) -> DomainResult<AuthGrant> {
        match self {
            StubGateway::Grant(grant) => Ok(grant.clone()),
            StubGateway::Reject => Err(rejection.into()),
            StubGateway::Unavailable => Err(DomainError::Gateway {
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AuthGateway for StubGateway {
    async fn login(&self, _request: &LoginRequest) -> DomainResult<AuthGrant> {
        self.reply(AuthError::InvalidCredentials)
    }

    async fn verify_registration_otp(&self, _request: &OtpVerification) -> DomainResult<AuthGrant> {
        self.reply(AuthError::InvalidOtp)
    }
}

/// App state over in-memory storage, optionally already logged in
pub fn state(
    gateway: StubGateway,
    session: Option<Session>,
) -> (web::Data<AppState<StubGateway>>, Arc<dyn SessionStore>) {
    let store: Arc<dyn SessionStore> = Arc::new(KeyValueSessionStore::new(MemoryStorage::new()));
    if let Some(session) = session {
        store.save(&session).unwrap();
    }
    let context = Arc::new(AuthContext::rehydrate(Arc::clone(&store)));
    let state = AppState::new(Arc::new(gateway), context, &RoutesConfig::default());
    (web::Data::new(state), store)
}

pub fn logged_in_as(role: Role, user_id: &str) -> web::Data<AppState<StubGateway>> {
    let session = Session::new("tok", role, user_id).unwrap();
    state(StubGateway::Reject, Some(session)).0
}

pub fn anonymous() -> web::Data<AppState<StubGateway>> {
    state(StubGateway::Reject, None).0
}
