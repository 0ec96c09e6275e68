use thiserror::Error;

/// Errors returned by the warehouse query client.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// response from the warehouse.
    #[error("warehouse HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client was misconfigured (e.g. an unparseable base URL).
    #[error("warehouse API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("warehouse response deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
