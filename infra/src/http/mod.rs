//! Marketplace REST API clients

mod api_client;
mod auth_gateway;

pub use api_client::ApiClient;
pub use auth_gateway::HttpAuthGateway;

use gig_shared::config::ApiConfig;

use crate::InfrastructureError;

/// Builds the shared reqwest client for the configured backend
pub(crate) fn build_client(config: &ApiConfig) -> Result<reqwest::Client, InfrastructureError> {
    if config.base_url.trim().is_empty() {
        return Err(InfrastructureError::Config("API base URL is empty".to_string()));
    }
    Ok(reqwest::Client::builder()
        .timeout(config.timeout())
        .build()?)
}
