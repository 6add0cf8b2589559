//! HTTP client for the chat backend
//!
//! Thin wrapper over `reqwest` that joins paths onto the configured base URL,
//! attaches the bearer token once one is known, and turns every failure into
//! a [`SeedError`] tagged with the workflow step.

use reqwest::{Client, RequestBuilder};
use seed_common::ApiConfig;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{SeedError, SeedResult, Step};

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client
    pub fn new(config: &ApiConfig) -> SeedResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SeedError::Client)?;

        Ok(Self {
            client,
            config: config.clone(),
            token: None,
        })
    }

    /// Clone this client, sending `Authorization: Bearer <token>` on every request
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        step: Step,
        path: &str,
        query: &[(&str, &str)],
    ) -> SeedResult<T> {
        let request = self.client.get(self.config.url(path)).query(query);
        self.send(step, request).await
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post_json<T, B>(&self, step: Step, path: &str, body: &B) -> SeedResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.config.url(path)).json(body);
        self.send(step, request).await
    }

    async fn send<T: DeserializeOwned>(&self, step: Step, request: RequestBuilder) -> SeedResult<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|source| SeedError::Transport { step, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SeedError::Transport { step, source })?;

        debug!(%step, status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            return Err(SeedError::Status {
                step,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| SeedError::Decode { step, source })
    }
}
