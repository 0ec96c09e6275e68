use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;

use omnirepute_core::{DataSource, MentionRow, ReputationReport};

use crate::error::GeneratorError;
use crate::prompt::build_prompt;
use crate::schema::response_schema;
use crate::ReportGenerator;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Model-backed report generator.
///
/// Sends the mention sample to a `generateContent` endpoint with a mandatory
/// structured-output schema and parses the candidate text as the report.
/// Use [`GeminiGenerator::new`] with `base_url: None` for production, or pass
/// a mock server URL in tests.
pub struct GeminiGenerator {
    client: Client,
    url: Url,
}

impl GeminiGenerator {
    /// Creates a generator for the given model and credential.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Generation`] if the underlying
    /// `reqwest::Client` cannot be constructed, or [`GeneratorError::Api`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        api_key: &str,
        model: &str,
        base_url: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("omnirepute/0.1 (brand-reputation)")
            .build()?;

        let base = base_url.unwrap_or(DEFAULT_BASE_URL);
        let joined = format!(
            "{}/v1beta/models/{model}:generateContent",
            base.trim_end_matches('/')
        );
        let mut url = Url::parse(&joined)
            .map_err(|e| GeneratorError::Api(format!("invalid base URL '{base}': {e}")))?;
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(Self { client, url })
    }

    /// Parses the model's text output as a report and enforces the bounds the
    /// schema alone cannot express to serde.
    fn parse_report(text: &str) -> Result<ReputationReport, GeneratorError> {
        let report: ReputationReport = serde_json::from_str(text)
            .map_err(|e| GeneratorError::SchemaViolation(e.to_string()))?;

        if report.reputation_score > 100 {
            return Err(GeneratorError::SchemaViolation(format!(
                "reputationScore {} outside 0-100",
                report.reputation_score
            )));
        }
        if !(3..=5).contains(&report.key_insights.len()) {
            return Err(GeneratorError::SchemaViolation(format!(
                "keyInsights has {} items, expected 3-5",
                report.key_insights.len()
            )));
        }

        Ok(report)
    }
}

#[async_trait]
impl ReportGenerator for GeminiGenerator {
    async fn generate(
        &self,
        brand_name: &str,
        source: DataSource,
        mentions: &[MentionRow],
    ) -> Result<ReputationReport, GeneratorError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": build_prompt(brand_name, source, mentions) } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(GeneratorError::Generation)?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                GeneratorError::Api("model response contained no candidate text".to_string())
            })?;

        tracing::debug!(brand = brand_name, source = %source, "model response received");
        Self::parse_report(&text)
    }
}
