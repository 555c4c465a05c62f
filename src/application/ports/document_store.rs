use std::io;

use async_trait::async_trait;

use crate::domain::StorageLocator;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists the original upload and returns a stable locator for it.
    async fn store(&self, data: &[u8], filename: &str) -> Result<StorageLocator, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
