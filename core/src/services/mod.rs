//! Services consulted by the client before and during navigation.

pub mod auth;
pub mod auth_context;
pub mod role_dispatch;
pub mod route_guard;

// Re-export commonly used types
pub use auth::{AuthGateway, AuthGrant, AuthService, LoginRequest, OtpVerification};
pub use auth_context::AuthContext;
pub use role_dispatch::{
    can_view_project_details, my_profile, open_project_details, post_login_destination,
    profile_route_for,
};
pub use route_guard::{GuardDecision, RouteGuard};
