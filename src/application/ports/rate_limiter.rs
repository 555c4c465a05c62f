use async_trait::async_trait;

use crate::domain::{Admission, ClientId};

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Counts the request against the client's budget and decides admission.
    async fn admit(&self, client: &ClientId) -> Result<Admission, RateLimitError>;

    /// Budget description used in rejection messages, e.g. `5 per 1 minute`.
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit backend unavailable: {0}")]
    BackendUnavailable(String),
}
