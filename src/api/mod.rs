#[cfg(test)]
mod tests;

use async_trait::async_trait;
use chrono::Utc;
use mockall::automock;
use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the homework statuses API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("failed to reach the homework API: {source}")]
    Transport {
        /// The underlying reqwest error.
        source: reqwest::Error,
    },
    /// The API answered with a non-success HTTP status.
    #[error("homework API responded with status {0}")]
    RemoteStatus(StatusCode),
    /// The response body is not valid JSON.
    #[error("failed to decode homework API response: {source}")]
    Decode {
        /// The underlying reqwest error.
        source: reqwest::Error,
    },
    /// The API token cannot be used as an HTTP header value.
    #[error("invalid API token: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    BuildClient {
        /// The underlying reqwest error.
        source: reqwest::Error,
    },
}

type Result<T> = std::result::Result<T, ApiError>;

/// Client for the homework statuses endpoint.
#[automock]
#[async_trait]
pub trait PracticumClient: Send + Sync {
    /// Fetch the homeworks whose review status changed since `from_date`.
    ///
    /// Returns the parsed response body unchanged; shape checks belong to the
    /// validation layer.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value>;
}

/// A [`PracticumClient`] backed by a reqwest HTTP client.
#[derive(Clone)]
pub struct DefaultPracticumClient {
    client: Client,
    endpoint: String,
}

impl DefaultPracticumClient {
    /// Creates a new client authorized with the given API token.
    pub fn new(token: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("OAuth {token}"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::BuildClient { source })?;
        tracing::debug!("HTTP client built successfully");

        Ok(Self { client, endpoint: endpoint.to_string() })
    }
}

#[async_trait]
impl PracticumClient for DefaultPracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        // A zero/negative cursor means "from now on".
        let from_date = if from_date > 0 { from_date } else { Utc::now().timestamp() };
        tracing::debug!("Requesting homework statuses since {from_date}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RemoteStatus(status));
        }

        response.json().await.map_err(|source| ApiError::Decode { source })
    }
}
