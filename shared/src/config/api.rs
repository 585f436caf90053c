//! Marketplace REST API configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the single backend origin serving projects, bids,
/// profiles, notifications and wallet resources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every REST path is joined onto (no trailing slash required)
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:5000/api"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Create a new API configuration for the given origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a resource path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_timeout_secs() -> u64 {
    30
}
