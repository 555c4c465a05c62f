use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, AttributeValue, Attributes, ObjectStore, PutPayload};

use crate::application::ports::{DocumentStore, StorageError};
use crate::domain::{FileExtension, StorageLocator, StoragePath};

use super::written_path;

pub struct S3DocumentStore {
    inner: Arc<dyn ObjectStore>,
    bucket: String,
}

impl S3DocumentStore {
    /// Credentials are read from the standard `AWS_*` environment variables.
    pub fn new(bucket: &str, region: &str, endpoint: Option<&str>) -> Result<Self, StorageError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .with_region(region);

        if let Some(endpoint) = endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    #[tracing::instrument(skip(self, data), fields(bucket = %self.bucket, bytes = data.len()))]
    async fn store(&self, data: &[u8], filename: &str) -> Result<StorageLocator, StorageError> {
        let path = StoragePath::for_today(data, filename);
        let store_path = StorePath::from(path.as_str());

        let mut attributes = Attributes::new();
        if let Some(extension) = FileExtension::from_filename(filename) {
            attributes.insert(
                Attribute::ContentType,
                AttributeValue::from(extension.as_mime()),
            );
        }

        self.inner
            .put_opts(
                &store_path,
                PutPayload::from(Bytes::copy_from_slice(data)),
                attributes.into(),
            )
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        let locator = StorageLocator::new("s3", &self.bucket, &written_path(&store_path));
        tracing::info!(locator = %locator, "Stored upload");

        Ok(locator)
    }
}
