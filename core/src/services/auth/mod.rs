//! Authentication flow module
//!
//! Turns a successful login or registration-OTP verification into a
//! persisted session, and ends it again on logout.

mod gateway;
mod service;

#[cfg(test)]
mod tests;

pub use gateway::{AuthGateway, AuthGrant, LoginRequest, OtpVerification};
pub use service::AuthService;
