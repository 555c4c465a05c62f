mod content_cache;
mod document_store;
mod rate_limiter;
mod summarizer;
mod text_extractor;
mod upload_observer;

pub use content_cache::{CACHE_TTL, CacheError, ContentCache};
pub use document_store::{DocumentStore, StorageError};
pub use rate_limiter::{RateLimitError, RateLimiter};
pub use summarizer::{Summarizer, SummarizerError};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use upload_observer::{ObserverError, UploadObserver};
