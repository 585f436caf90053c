//! Route handlers
//!
//! - `session` - login, registration OTP, logout and the current identity
//! - `pages` - public entry points and role-guarded pages

pub mod pages;
pub mod session;
