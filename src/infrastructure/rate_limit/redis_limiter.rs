use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::application::ports::{RateLimitError, RateLimiter};
use crate::domain::{Admission, ClientId};

use super::describe_budget;

/// Fixed-window limiter shared by every process pointed at the same Redis.
pub struct RedisRateLimiter {
    connection: ConnectionManager,
    limit: u32,
    window: Duration,
}

impl RedisRateLimiter {
    pub async fn connect(url: &str, limit: u32, window: Duration) -> Result<Self, RateLimitError> {
        let client = redis::Client::open(url)
            .map_err(|e| RateLimitError::BackendUnavailable(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| RateLimitError::BackendUnavailable(e.to_string()))?;

        Ok(Self {
            connection,
            limit,
            window,
        })
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn admit(&self, client: &ClientId) -> Result<Admission, RateLimitError> {
        let key = format!("ratelimit:{}", client);
        let mut connection = self.connection.clone();

        let (count, ttl): (u64, i64) = redis::pipe()
            .atomic()
            .incr(&key, 1)
            .ttl(&key)
            .query_async(&mut connection)
            .await
            .map_err(|e| RateLimitError::BackendUnavailable(e.to_string()))?;

        // A counter without expiry would never reset; (re)arm the window.
        if ttl < 0 {
            connection
                .expire::<_, ()>(&key, self.window.as_secs() as i64)
                .await
                .map_err(|e| RateLimitError::BackendUnavailable(e.to_string()))?;
        }

        if count <= u64::from(self.limit) {
            return Ok(Admission::Allowed);
        }

        Ok(Admission::Rejected {
            retry_after: retry_after_from_ttl(ttl, self.window),
        })
    }

    fn describe(&self) -> String {
        describe_budget(self.limit, self.window)
    }
}

/// Seconds left on the window, or the full window when Redis reports none.
pub fn retry_after_from_ttl(ttl: i64, window: Duration) -> Duration {
    u64::try_from(ttl)
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(window)
}
