mod local_store;
mod s3_store;
mod store_factory;

pub use local_store::LocalDocumentStore;
pub use s3_store::S3DocumentStore;
pub use store_factory::DocumentStoreFactory;

use object_store::path::Path as StorePath;

use crate::domain::StoragePath;

/// The key as the object store wrote it. Characters such as `[`, `%` or `#`
/// come back percent-encoded, so locators must be built from this.
pub(crate) fn written_path(store_path: &StorePath) -> StoragePath {
    StoragePath::from_raw(store_path.as_ref())
}
