use thiserror::Error;

/// Errors returned by report generators.
///
/// The analysis endpoint maps every variant to a generic internal error;
/// detail stays in server-side logs.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The model call itself failed (network, TLS, non-2xx status).
    #[error("generation request failed: {0}")]
    Generation(#[from] reqwest::Error),

    /// The model API returned an unusable response envelope, or the client
    /// was misconfigured.
    #[error("generation API error: {0}")]
    Api(String),

    /// The model's text output was not valid structured data conforming to
    /// the report schema. No repair is attempted.
    #[error("model response violates the report schema: {0}")]
    SchemaViolation(String),
}
