use async_trait::async_trait;

use crate::domain::UploadRecord;

/// Post-success hook for freshly computed uploads. Never on the response path.
#[async_trait]
pub trait UploadObserver: Send + Sync {
    async fn on_upload(&self, record: UploadRecord) -> Result<(), ObserverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    #[error("failed to record upload: {0}")]
    RecordFailed(String),
}
