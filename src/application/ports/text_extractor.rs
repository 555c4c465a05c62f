use async_trait::async_trait;

use crate::domain::FileKind;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document text with lines joined in reading order by `\n`.
    async fn extract(&self, data: &[u8], kind: FileKind) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file kind: {0}")]
    UnsupportedKind(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
