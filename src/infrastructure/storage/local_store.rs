use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{DocumentStore, StorageError};
use crate::domain::{StorageLocator, StoragePath};

use super::written_path;

/// Filesystem-backed store producing `file://` locators.
pub struct LocalDocumentStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&base_path)?;
        let base_path = base_path.canonicalize()?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| StorageError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(&self, data: &[u8], filename: &str) -> Result<StorageLocator, StorageError> {
        let path = StoragePath::for_today(data, filename);
        let store_path = StorePath::from(path.as_str());

        self.inner
            .put(&store_path, PutPayload::from(Bytes::copy_from_slice(data)))
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        Ok(StorageLocator::new(
            "file",
            &self.base_path.to_string_lossy(),
            &written_path(&store_path),
        ))
    }
}
