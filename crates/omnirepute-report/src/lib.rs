//! Reputation report generation.
//!
//! Two interchangeable strategies behind [`ReportGenerator`]: a model-backed
//! generator that calls a generative-language API with a mandatory
//! structured-output schema, and a deterministic synthetic fallback used when
//! no model credential is configured. The strategy is chosen once at startup.

mod error;
mod gemini;
mod prompt;
mod schema;
mod synthetic;

use std::sync::Arc;

use async_trait::async_trait;

use omnirepute_core::{AppConfig, DataSource, MentionRow, ReputationReport};

pub use error::GeneratorError;
pub use gemini::GeminiGenerator;
pub use prompt::PROMPT_SAMPLE_LIMIT;
pub use synthetic::SyntheticGenerator;

/// Produces a [`ReputationReport`] from a brand's mention sample.
///
/// Implementations must populate every report field; the presentation layer
/// renders the result without defensive validation.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(
        &self,
        brand_name: &str,
        source: DataSource,
        mentions: &[MentionRow],
    ) -> Result<ReputationReport, GeneratorError>;
}

/// Selects the generation strategy from configuration: model-backed when a
/// Gemini API key is present, synthetic otherwise. Decided once at startup,
/// never per request.
///
/// # Errors
///
/// Returns [`GeneratorError`] if the model-backed client cannot be
/// constructed.
pub fn select_generator(
    config: &AppConfig,
) -> Result<Arc<dyn ReportGenerator>, GeneratorError> {
    match &config.gemini_api_key {
        Some(api_key) => {
            tracing::info!(model = %config.gemini_model, "using model-backed report generator");
            Ok(Arc::new(GeminiGenerator::new(
                api_key,
                &config.gemini_model,
                config.gemini_base_url.as_deref(),
                config.request_timeout_secs,
            )?))
        }
        None => {
            tracing::info!("no model credential configured; using synthetic report generator");
            Ok(Arc::new(SyntheticGenerator))
        }
    }
}
