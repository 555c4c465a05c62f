use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{CacheEntry, Fingerprint};

/// Retention window of cached results.
pub const CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[async_trait]
pub trait ContentCache: Send + Sync {
    async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, CacheError>;

    async fn put(
        &self,
        fingerprint: &Fingerprint,
        entry: &CacheEntry,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("cache command failed: {0}")]
    CommandFailed(String),
    #[error("corrupt cache entry: {0}")]
    Corrupt(String),
}
