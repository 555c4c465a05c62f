use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::application::ports::{CacheError, ContentCache};
use crate::domain::{CacheEntry, Fingerprint};

/// Process-local cache for single-instance deployments.
#[derive(Default)]
pub struct InMemoryContentCache {
    entries: RwLock<HashMap<String, (CacheEntry, Instant)>>,
}

impl InMemoryContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|(_, expires_at)| *expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ContentCache for InMemoryContentCache {
    async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, CacheError> {
        let key = fingerprint.cache_key();
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(&key) {
                Some((entry, expires_at)) if *expires_at > now => return Ok(Some(entry.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        self.entries.write().await.remove(&key);
        Ok(None)
    }

    async fn put(
        &self,
        fingerprint: &Fingerprint,
        entry: &CacheEntry,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        entries.insert(fingerprint.cache_key(), (entry.clone(), now + ttl));
        Ok(())
    }
}
