use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CacheEntry, ClientId, SummaryLength};

const SUMMARY_TITLE_CHARS: usize = 15;

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Bytes,
    pub filename: String,
    pub summary_length: SummaryLength,
    pub client: ClientId,
}

impl UploadRequest {
    pub fn new(
        data: impl Into<Bytes>,
        filename: impl Into<String>,
        summary_length: SummaryLength,
        client: ClientId,
    ) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
            summary_length,
            client,
        }
    }
}

/// History entry emitted after a freshly computed upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadRecord {
    pub client: String,
    pub filename: String,
    pub summary_title: String,
    pub summary: String,
    pub document_url: String,
    pub document_size_kb: f64,
    pub summary_length: SummaryLength,
    pub created_at: DateTime<Utc>,
}

impl UploadRecord {
    pub fn new(
        client: &ClientId,
        entry: &CacheEntry,
        size_bytes: usize,
        summary_length: SummaryLength,
    ) -> Self {
        Self {
            client: client.as_str().to_string(),
            filename: entry.filename.clone(),
            summary_title: summary_title(&entry.filename),
            summary: entry.summary.clone(),
            document_url: entry.s3_url.clone(),
            document_size_kb: (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
            summary_length,
            created_at: Utc::now(),
        }
    }
}

fn summary_title(filename: &str) -> String {
    let head: String = filename.chars().take(SUMMARY_TITLE_CHARS).collect();
    format!("{}...", head)
}
