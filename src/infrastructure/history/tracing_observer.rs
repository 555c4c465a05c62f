use async_trait::async_trait;

use crate::application::ports::{ObserverError, UploadObserver};
use crate::domain::UploadRecord;

/// Emits one structured log event per processed upload.
pub struct TracingUploadObserver;

#[async_trait]
impl UploadObserver for TracingUploadObserver {
    async fn on_upload(&self, record: UploadRecord) -> Result<(), ObserverError> {
        tracing::info!(
            client = %record.client,
            filename = %record.filename,
            document_url = %record.document_url,
            size_kb = record.document_size_kb,
            summary_length = %record.summary_length,
            "Upload recorded"
        );
        Ok(())
    }
}
