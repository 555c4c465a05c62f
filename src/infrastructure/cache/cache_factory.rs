use std::sync::Arc;

use crate::application::ports::{CacheError, ContentCache};
use crate::presentation::config::{CacheProviderSetting, CacheSettings};

use super::memory_cache::InMemoryContentCache;
use super::redis_cache::RedisContentCache;

pub struct ContentCacheFactory;

impl ContentCacheFactory {
    pub async fn create(settings: &CacheSettings) -> Result<Arc<dyn ContentCache>, CacheError> {
        match settings.provider {
            CacheProviderSetting::Memory => {
                tracing::info!("Using in-memory content cache");
                Ok(Arc::new(InMemoryContentCache::new()))
            }
            CacheProviderSetting::Redis => {
                let cache = RedisContentCache::connect(&settings.redis_url).await?;
                Ok(Arc::new(cache))
            }
        }
    }
}
