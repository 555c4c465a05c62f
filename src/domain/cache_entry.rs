use serde::{Deserialize, Serialize};

/// Result of a full pipeline run, cached under its fingerprint and returned
/// to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub filename: String,
    pub extracted_text: String,
    pub summary: String,
    pub s3_url: String,
}
