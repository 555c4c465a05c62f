use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::application::ports::{CacheError, ContentCache};
use crate::domain::{CacheEntry, Fingerprint};

/// Stores entries as JSON under `summary:{fingerprint}` with a Redis TTL.
pub struct RedisContentCache {
    connection: ConnectionManager,
}

impl RedisContentCache {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        tracing::info!(url = %url, "Connected to Redis content cache");

        Ok(Self { connection })
    }
}

#[async_trait]
impl ContentCache for RedisContentCache {
    async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, CacheError> {
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection
            .get(fingerprint.cache_key())
            .await
            .map_err(|e| CacheError::CommandFailed(e.to_string()))?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| CacheError::Corrupt(e.to_string()))
        })
        .transpose()
    }

    async fn put(
        &self,
        fingerprint: &Fingerprint,
        entry: &CacheEntry,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let json = serde_json::to_string(entry).map_err(|e| CacheError::Corrupt(e.to_string()))?;

        let mut connection = self.connection.clone();
        connection
            .set_ex::<_, _, ()>(fingerprint.cache_key(), json, ttl.as_secs())
            .await
            .map_err(|e| CacheError::CommandFailed(e.to_string()))
    }
}
