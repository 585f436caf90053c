//! Shared configuration and common types for the Gig client services
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types
//! - Error response structures
//! - Health check responses

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, Environment, LoggingConfig, RoutesConfig, ServerConfig, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus};
