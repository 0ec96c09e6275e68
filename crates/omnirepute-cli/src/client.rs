//! Request adapter for the analysis backend.
//!
//! Single attempt, no retry. Application-level errors surface the backend's
//! `{ message }` body; connection-level failures collapse into a distinct
//! "unreachable" error so callers can show actionable guidance.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use omnirepute_core::{DataSource, ReputationReport};

/// Local backend address; override with `--api-url` or `OMNIREPUTE_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached at all (connect/timeout failure).
    #[error(
        "Could not connect to the analysis service. Please ensure the backend \
         is running and accessible."
    )]
    Unreachable(#[source] reqwest::Error),

    /// The service answered with a non-success status. `message` comes from
    /// the JSON error body when present, or the HTTP status reason otherwise.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The service answered 200 but the body was not a valid report.
    #[error("invalid response from the analysis service: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// HTTP client for the analysis backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unreachable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("omnirepute-cli/0.1")
            .build()
            .map_err(ClientError::Unreachable)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Requests a reputation analysis for the brand. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unreachable`] when the backend cannot be reached.
    /// - [`ClientError::Api`] for any non-success HTTP status.
    /// - [`ClientError::Decode`] when a 200 body is not a valid report.
    pub async fn request_analysis(
        &self,
        brand_name: &str,
        source: DataSource,
    ) -> Result<ReputationReport, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&json!({ "brandName": brand_name, "source": source.as_str() }))
            .send()
            .await
            .map_err(ClientError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        response.json().await.map_err(ClientError::Decode)
    }

    /// Fetches the backend health probe.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::request_analysis`].
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(ClientError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        response.json().await.map_err(ClientError::Decode)
    }

    /// Shapes a non-success response into [`ClientError::Api`], preferring
    /// the backend's `{ message }` body over the bare status reason.
    async fn api_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        ClientError::Api { status, message }
    }
}
