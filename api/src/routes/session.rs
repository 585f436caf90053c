//! Session endpoints: login, registration OTP, logout and the current identity.

use actix_web::{web, HttpResponse};

use gig_core::services::{post_login_destination, AuthGateway};
use gig_core::{DerivedIdentity, Session};

use crate::app::AppState;
use crate::dto::{LoginForm, LogoutResponse, SessionResponse, VerifyOtpForm};
use crate::handlers::ApiError;
use crate::middleware::CurrentIdentity;

/// Handler for POST /session/login
///
/// Exchanges credentials for a session and persists it. The reply carries
/// the new identity and the profile page to land on.
///
/// ## Errors
/// - 400 Bad Request: Missing email or password
/// - 401 Unauthorized: Credentials rejected by the marketplace
/// - 502 Bad Gateway: Marketplace unreachable or replied with garbage
pub async fn login<G>(
    state: web::Data<AppState<G>>,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ApiError>
where
    G: AuthGateway + 'static,
{
    let session = state.auth_service.login(form.into_inner().into()).await?;
    log::info!("Logged in as {} {}", session.role(), session.user_id());
    Ok(session_established(&session))
}

/// Handler for POST /session/verify-otp
///
/// Completes registration with the emailed one-time password. Registration
/// logs the user in, just like a successful login.
pub async fn verify_otp<G>(
    state: web::Data<AppState<G>>,
    form: web::Json<VerifyOtpForm>,
) -> Result<HttpResponse, ApiError>
where
    G: AuthGateway + 'static,
{
    let session = state
        .auth_service
        .verify_registration(form.into_inner().into())
        .await?;
    log::info!("Registered {} {}", session.role(), session.user_id());
    Ok(session_established(&session))
}

/// Handler for POST /session/logout
///
/// Always succeeds, with or without a session.
pub async fn logout<G>(state: web::Data<AppState<G>>) -> HttpResponse
where
    G: AuthGateway + 'static,
{
    state.auth_service.logout();
    HttpResponse::Ok().json(LogoutResponse {
        message: "Logged out successfully".to_string(),
        redirect: state.guard.login_path().to_string(),
    })
}

/// Handler for GET /session
pub async fn current(identity: CurrentIdentity) -> HttpResponse {
    HttpResponse::Ok().json(identity.0)
}

fn session_established(session: &Session) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        identity: DerivedIdentity::from_session(Some(session)),
        redirect: post_login_destination(session),
    })
}
