use serde::{Deserialize, Serialize};

/// Body posted to the warehouse query endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryRequest {
    pub query: String,
    pub parameters: Vec<QueryParameter>,
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryParameter {
    pub name: &'static str,
    pub value: String,
}

/// Warehouse query response. Row fields carry the selected column names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub rows: Vec<QueryRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryRow {
    pub source: String,
    pub full_text: String,
}
