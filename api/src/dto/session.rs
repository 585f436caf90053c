use serde::{Deserialize, Serialize};

use gig_core::services::{LoginRequest, OtpVerification};
use gig_core::{DerivedIdentity, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Account kind selected on the login form, freelancer unless chosen otherwise
    #[serde(default)]
    pub role: Role,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        LoginRequest {
            email: form.email,
            password: form.password,
            role: form.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpForm {
    pub email: String,
    /// One-time password from the registration email
    pub otp: String,
    #[serde(default)]
    pub role: Role,
}

impl From<VerifyOtpForm> for OtpVerification {
    fn from(form: VerifyOtpForm) -> Self {
        OtpVerification {
            email: form.email,
            otp: form.otp,
            role: form.role,
        }
    }
}

/// Identity after a session change plus where the client should go next
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub identity: DerivedIdentity,
    pub redirect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
    pub redirect: String,
}
