use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use omnirepute_core::{AppConfig, DataSource, MentionRow};

use crate::error::WarehouseError;
use crate::types::{QueryParameter, QueryRequest, QueryResponse};
use crate::MentionSource;

/// Upper bound on the mention sample per request. This is a sampling limit to
/// keep payloads bounded, not a correctness guarantee — reports are always
/// based on a sample.
pub const MAX_SAMPLE_ROWS: usize = 700;

const MENTIONS_TABLE: &str = "brand_mentions";

/// Client for the analytics warehouse's parameterized query API.
///
/// Use [`WarehouseClient::new`] for production or
/// [`WarehouseClient::with_base_url`] to point at a mock server in tests.
pub struct WarehouseClient {
    client: Client,
    query_url: Url,
    api_token: Option<String>,
}

impl WarehouseClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WarehouseError::Api`] if the configured
    /// base URL is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, WarehouseError> {
        Self::with_base_url(
            &config.warehouse_base_url,
            &config.warehouse_project_id,
            config.warehouse_api_token.as_deref(),
            config.request_timeout_secs,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WarehouseError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        base_url: &str,
        project_id: &str,
        api_token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, WarehouseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("omnirepute/0.1 (brand-reputation)")
            .build()?;

        let joined = format!(
            "{}/v1/projects/{project_id}/queries",
            base_url.trim_end_matches('/')
        );
        let query_url = Url::parse(&joined)
            .map_err(|e| WarehouseError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            query_url,
            api_token: api_token.map(ToOwned::to_owned),
        })
    }

    /// Builds the parameterized statement for a brand/source sample.
    ///
    /// Brand and source values travel as named parameters, never interpolated
    /// into the statement text.
    fn build_statement(source: DataSource) -> String {
        let mut statement = format!(
            "SELECT source, full_text FROM {MENTIONS_TABLE} WHERE brand = @brandName"
        );
        if source != DataSource::All {
            statement.push_str(" AND source = @source");
        }
        statement.push_str(&format!(" LIMIT {MAX_SAMPLE_ROWS}"));
        statement
    }

    fn build_parameters(brand_name: &str, source: DataSource) -> Vec<QueryParameter> {
        let mut parameters = vec![QueryParameter {
            name: "brandName",
            value: brand_name.to_owned(),
        }];
        if source != DataSource::All {
            parameters.push(QueryParameter {
                name: "source",
                value: source.as_str().to_owned(),
            });
        }
        parameters
    }
}

#[async_trait]
impl MentionSource for WarehouseClient {
    async fn fetch_mentions(
        &self,
        brand_name: &str,
        source: DataSource,
    ) -> Result<Vec<MentionRow>, WarehouseError> {
        let request = QueryRequest {
            query: Self::build_statement(source),
            parameters: Self::build_parameters(brand_name, source),
            max_results: MAX_SAMPLE_ROWS,
        };

        let mut builder = self.client.post(self.query_url.clone()).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?.error_for_status()?;
        let body = response.text().await?;
        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|e| WarehouseError::Deserialize {
                context: format!("query(brand={brand_name}, source={source})"),
                source: e,
            })?;

        let rows: Vec<MentionRow> = parsed
            .rows
            .into_iter()
            .take(MAX_SAMPLE_ROWS)
            .map(|row| MentionRow {
                source: row.source,
                full_text: row.full_text,
            })
            .collect();

        tracing::debug!(
            brand = brand_name,
            source = %source,
            rows = rows.len(),
            "warehouse sample fetched"
        );
        Ok(rows)
    }
}
