mod cache_entry;
mod client_id;
mod document;
mod fingerprint;
mod pipeline_stage;
mod rate_limit_window;
mod storage_path;
mod summary_length;
mod upload;

pub use cache_entry::CacheEntry;
pub use client_id::ClientId;
pub use document::{Document, FileExtension, FileKind, SUPPORTED_TYPES_LABEL};
pub use fingerprint::{Fingerprint, short_content_hash};
pub use pipeline_stage::PipelineStage;
pub use rate_limit_window::{Admission, RateLimitWindow};
pub use storage_path::{StorageLocator, StoragePath};
pub use summary_length::SummaryLength;
pub use upload::{UploadRecord, UploadRequest};
