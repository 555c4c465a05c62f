use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DocumentStore, StorageError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalDocumentStore;
use super::s3_store::S3DocumentStore;

pub struct DocumentStoreFactory;

impl DocumentStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn DocumentStore>, StorageError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = LocalDocumentStore::new(PathBuf::from(&settings.local_path))?;
                tracing::info!(path = %store.base_path().display(), "Using local document store");
                Ok(Arc::new(store))
            }
            StorageProviderSetting::S3 => {
                if settings.bucket.is_empty() {
                    return Err(StorageError::Configuration("bucket required".into()));
                }
                let store = S3DocumentStore::new(
                    &settings.bucket,
                    &settings.region,
                    settings.endpoint.as_deref(),
                )?;
                tracing::info!(bucket = %settings.bucket, "Using S3 document store");
                Ok(Arc::new(store))
            }
        }
    }
}
