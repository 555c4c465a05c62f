use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use serde::Deserialize;

use crate::domain::{CacheEntry, SummaryLength};
use crate::presentation::state::AppState;

use super::client_identity::ClientIdentity;
use super::error::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    #[serde(default)]
    pub summary_length: SummaryLength,
}

/// Accepts one multipart `file` and returns its text, summary and locator.
/// The extension gate and rate limit run before the file body is read.
#[tracing::instrument(skip_all, fields(client = %client.0))]
pub async fn upload_handler(
    State(state): State<AppState>,
    client: ClientIdentity,
    params: Result<Query<UploadParams>, QueryRejection>,
    mut multipart: Multipart,
) -> Result<Json<CacheEntry>, ApiError> {
    let Query(params) = params.map_err(|e| {
        tracing::warn!(error = %e, "Invalid upload parameters");
        ApiError::bad_request(e.body_text())
    })?;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read multipart");
        ApiError::bad_request(format!("Failed to read multipart: {}", e)).with_status(e.status())
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let document = state.pipeline.validate(&filename)?;
        state.pipeline.admit(&client.0).await?;

        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file bytes");
            ApiError::bad_request(format!("Failed to read file: {}", e)).with_status(e.status())
        })?;

        tracing::debug!(
            filename = %filename,
            bytes = data.len(),
            summary_length = %params.summary_length,
            "File data received"
        );

        let entry = state
            .pipeline
            .execute(document, data, params.summary_length, &client.0)
            .await?;

        return Ok(Json(entry));
    }

    tracing::warn!("Upload request with no file");
    Err(ApiError::bad_request("No file uploaded"))
}
