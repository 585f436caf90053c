//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use gig_core::services::{AuthGateway, AuthService};
use gig_core::{AuthContext, Role, RouteGuard};
use gig_shared::config::RoutesConfig;
use gig_shared::{error_codes, ErrorResponse, HealthResponse};

use crate::middleware::RequireSession;
use crate::routes::{pages, session};

/// Application state that holds shared services
pub struct AppState<G: AuthGateway> {
    pub auth_service: Arc<AuthService<G>>,
    pub guard: RouteGuard,
}

impl<G: AuthGateway> AppState<G> {
    pub fn new(gateway: Arc<G>, context: Arc<AuthContext>, routes: &RoutesConfig) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(gateway, context)),
            guard: RouteGuard::new(routes),
        }
    }

    /// The auth context every request shares
    pub fn context(&self) -> &Arc<AuthContext> {
        self.auth_service.context()
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<G>(
    app_state: web::Data<AppState<G>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: AuthGateway + 'static,
{
    let context = web::Data::from(Arc::clone(app_state.context()));
    let guard = web::Data::new(app_state.guard.clone());

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(context)
        .app_data(guard)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Session lifecycle
        .service(
            web::scope("/session")
                .route("", web::get().to(session::current))
                .route("/login", web::post().to(session::login::<G>))
                .route("/verify-otp", web::post().to(session::verify_otp::<G>))
                .route("/logout", web::post().to(session::logout::<G>)),
        )
        // Public entry points
        .route("/", web::get().to(pages::home))
        .route("/login", web::get().to(pages::login_page))
        // Any session
        .service(guarded("/me", RequireSession::any(), pages::me))
        .service(guarded("/notifications", RequireSession::any(), pages::notifications))
        .service(guarded("/wallet", RequireSession::any(), pages::wallet))
        .service(guarded("/freelancer/{id}", RequireSession::any(), pages::freelancer_profile))
        // Company only, registered ahead of the `{id}` patterns they would match
        .service(guarded(
            "/company/dashboard",
            RequireSession::role(Role::Company),
            pages::company_dashboard,
        ))
        .service(guarded("/projects/new", RequireSession::role(Role::Company), pages::new_project))
        .service(guarded("/company/{id}", RequireSession::any(), pages::company_profile))
        .service(guarded("/projects/{id}", RequireSession::any(), pages::project_details))
        // Freelancer only
        .service(guarded("/bids", RequireSession::role(Role::Freelancer), pages::bids))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// A GET resource behind the route guard
fn guarded<F, Args>(path: &str, guard: RequireSession, handler: F) -> actix_web::Resource<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    F: actix_web::Handler<Args>,
    Args: actix_web::FromRequest + 'static,
    F::Output: actix_web::Responder + 'static,
{
    web::resource(path)
        .wrap(guard)
        .route(web::get().to(handler))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("gig-api", env!("CARGO_PKG_VERSION")))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
