//! Type definitions shared by the HTTP surface
//!
//! - `response` - Health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};
