//! Authorized client for marketplace resources.
//!
//! Every request carries the bearer token current when it was built. A `401`
//! means that token is stale: the client invalidates the session through the
//! auth context before reporting the failure, unless a newer session has
//! replaced it in the meantime, so the next guarded navigation lands on login.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use gig_core::errors::{AuthError, DomainError, DomainResult};
use gig_core::services::AuthContext;
use gig_shared::config::ApiConfig;

use super::build_client;
use crate::InfrastructureError;

/// REST client bound to one auth context
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
    context: Arc<AuthContext>,
}

impl ApiClient {
    /// Create a client for the configured backend
    pub fn new(config: ApiConfig, context: Arc<AuthContext>) -> Result<Self, InfrastructureError> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config,
            context,
        })
    }

    /// The auth context requests are made on behalf of
    pub fn context(&self) -> &Arc<AuthContext> {
        &self.context
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DomainResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    /// Send a JSON body and decode the JSON reply
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(method, path);
        self.send(AuthorizedRequest {
            builder: request.builder.json(body),
            ..request
        })
        .await
    }

    /// DELETE a resource, ignoring the reply body
    pub async fn delete(&self, path: &str) -> DomainResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> AuthorizedRequest {
        let url = self.config.endpoint(path);
        let builder = self.client.request(method, url);
        let token = self.context.bearer_token();
        let builder = match &token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        AuthorizedRequest { builder, token }
    }

    async fn send<T: DeserializeOwned>(&self, request: AuthorizedRequest) -> DomainResult<T> {
        let response = self.execute(request).await?;
        response.json::<T>().await.map_err(|e| DomainError::Gateway {
            message: format!("invalid response body: {}", e),
        })
    }

    async fn execute(&self, request: AuthorizedRequest) -> DomainResult<reqwest::Response> {
        let AuthorizedRequest { builder, token } = request;
        let response = builder.send().await.map_err(InfrastructureError::from)?;
        let status = response.status();
        debug!(url = %response.url(), %status, "Marketplace API response");

        if status.is_success() {
            return Ok(response);
        }

        let error = status_error(status);
        if error.is_authorization_failure() {
            if let Some(token) = token {
                self.context.invalidate_token(&token);
            }
        } else if !matches!(error, DomainError::Auth(_)) {
            warn!(url = %response.url(), %status, "Marketplace API request failed");
        }
        Err(error)
    }
}

/// A request together with the token it was authorized with
struct AuthorizedRequest {
    builder: RequestBuilder,
    token: Option<String>,
}

fn status_error(status: StatusCode) -> DomainError {
    match status {
        StatusCode::UNAUTHORIZED => AuthError::SessionExpired.into(),
        StatusCode::FORBIDDEN => AuthError::InsufficientPermissions.into(),
        status => DomainError::Gateway {
            message: format!("backend returned {}", status),
        },
    }
}
