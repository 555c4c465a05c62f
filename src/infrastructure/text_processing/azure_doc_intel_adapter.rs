use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::FileKind;

pub const POLL_TIMEOUT: Duration = Duration::from_secs(300);
pub const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);
pub const API_VERSION: &str = "2024-11-30";

/// OCR for images and layout analysis for PDFs through Azure Document
/// Intelligence. Only the line text is kept, in page order.
pub struct AzureDocIntelAdapter {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AzureDocIntelAdapter {
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ExtractionError::ExtractionFailed(format!("http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Analyze URL for a file kind. Images get plain line OCR; PDFs get the
    /// layout model, which also recognises tables and key/value form fields.
    pub fn analyze_url(&self, kind: FileKind) -> Result<String, ExtractionError> {
        let model = match kind {
            FileKind::Image => "prebuilt-read",
            FileKind::Pdf => "prebuilt-layout",
            FileKind::Docx => {
                return Err(ExtractionError::UnsupportedKind(kind.to_string()));
            }
        };

        let features = if kind == FileKind::Pdf {
            "&features=keyValuePairs"
        } else {
            ""
        };

        Ok(format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}{}",
            self.endpoint, model, API_VERSION, features
        ))
    }

    async fn submit(&self, url: &str, data: &[u8]) -> Result<String, ExtractionError> {
        let b64 = general_purpose::STANDARD.encode(data);
        let body = serde_json::json!({ "base64Source": b64 });

        let response = self
            .client
            .post(url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::ExtractionFailed(format!("Azure submit failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ExtractionError::ExtractionFailed(format!(
                "Azure submit returned {status}: {text}"
            )));
        }

        let operation_url = response
            .headers()
            .get("Operation-Location")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ExtractionError::ExtractionFailed(
                    "Azure response missing Operation-Location header".to_string(),
                )
            })?
            .to_string();

        Ok(operation_url)
    }

    async fn poll_until_complete(&self, operation_url: &str) -> Result<AnalyzeResult, ExtractionError> {
        let poll_future = async {
            let mut backoff = INITIAL_BACKOFF;

            loop {
                let response = self
                    .client
                    .get(operation_url)
                    .header("Ocp-Apim-Subscription-Key", &self.api_key)
                    .send()
                    .await
                    .map_err(|e| {
                        ExtractionError::ExtractionFailed(format!("Azure poll request failed: {e}"))
                    })?;

                if response.status().as_u16() == 429 {
                    let retry_after = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(backoff.as_secs());
                    tokio::time::sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }

                if !response.status().is_success() {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();
                    return Err(ExtractionError::ExtractionFailed(format!(
                        "Azure poll returned {status}: {text}"
                    )));
                }

                let result: AnalyzeResponse = response.json().await.map_err(|e| {
                    ExtractionError::ExtractionFailed(format!("Azure response parse failed: {e}"))
                })?;

                match result.status.as_str() {
                    "succeeded" => return Ok(result.analyze_result.unwrap_or_default()),
                    "failed" => {
                        return Err(ExtractionError::ExtractionFailed(
                            "Azure Document Intelligence analysis failed".to_string(),
                        ));
                    }
                    _ => {
                        tokio::time::sleep(backoff).await;
                        backoff = (backoff * 2).min(MAX_BACKOFF);
                    }
                }
            }
        };

        tokio::time::timeout(POLL_TIMEOUT, poll_future)
            .await
            .map_err(|_| {
                ExtractionError::ExtractionFailed(format!(
                    "Azure Document Intelligence polling timed out after {}s",
                    POLL_TIMEOUT.as_secs()
                ))
            })?
    }
}

#[async_trait]
impl TextExtractor for AzureDocIntelAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
        let url = self.analyze_url(kind)?;
        let operation_url = self.submit(&url, data).await?;
        let result = self.poll_until_complete(&operation_url).await?;

        let text = result.line_text();
        tracing::info!(
            pages = result.pages.len(),
            chars = text.len(),
            "Azure analysis complete"
        );

        Ok(text)
    }
}

#[derive(Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    #[serde(rename = "analyzeResult")]
    pub analyze_result: Option<AnalyzeResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub pages: Vec<AnalyzedPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzedPage {
    #[serde(default)]
    pub lines: Vec<AnalyzedLine>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzedLine {
    pub content: String,
}

impl AnalyzeResult {
    /// Line blocks of every page in document order, newline separated.
    pub fn line_text(&self) -> String {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter())
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
