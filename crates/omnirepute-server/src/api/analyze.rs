use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use omnirepute_core::{DataSource, ReputationReport};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// The analysis pipeline: validate, query, generate, respond.
///
/// Runs sequentially per request with no shared state and no retries; every
/// failure terminates the request with an HTTP error.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ReputationReport>, ApiError> {
    let brand_name = request.brand_name.trim();
    if brand_name.is_empty() {
        return Err(ApiError::bad_request("Brand name is required."));
    }

    // Missing source means "no filter". Values outside the enumeration are
    // rejected rather than interpolated into the warehouse filter.
    let source = match request.source.as_deref() {
        None => DataSource::All,
        Some(raw) => DataSource::parse(raw).ok_or_else(|| {
            ApiError::bad_request(format!(
                "Source must be one of: {}.",
                DataSource::ALLOWED.join(", ")
            ))
        })?,
    };

    tracing::info!(
        request_id = %req_id.0,
        brand = brand_name,
        source = %source,
        "starting analysis"
    );

    let mentions = state
        .mentions
        .fetch_mentions(brand_name, source)
        .await
        .map_err(|e| {
            tracing::error!(request_id = %req_id.0, error = %e, "warehouse query failed");
            ApiError::internal()
        })?;

    if mentions.is_empty() {
        return Err(ApiError::not_found(format!(
            "No data found for \"{brand_name}\" from source \"{source}\"."
        )));
    }

    tracing::info!(
        request_id = %req_id.0,
        rows = mentions.len(),
        "mention sample fetched, generating report"
    );

    let report = state
        .generator
        .generate(brand_name, source, &mentions)
        .await
        .map_err(|e| {
            tracing::error!(request_id = %req_id.0, error = %e, "report generation failed");
            ApiError::internal()
        })?;

    Ok(Json(report))
}
