use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{RateLimitError, RateLimiter};
use crate::domain::{Admission, ClientId, RateLimitWindow};

use super::describe_budget;

const SWEEP_THRESHOLD: usize = 10_000;

/// In-process fixed-window limiter keyed by client identity.
pub struct FixedWindowRateLimiter {
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<ClientId, RateLimitWindow>>,
}

impl FixedWindowRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl RateLimiter for FixedWindowRateLimiter {
    async fn admit(&self, client: &ClientId) -> Result<Admission, RateLimitError> {
        let now = tokio::time::Instant::now().into_std();
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        if windows.len() >= SWEEP_THRESHOLD {
            windows.retain(|_, w| !w.is_expired(now, self.window));
        }

        let admission = windows
            .entry(client.clone())
            .or_insert_with(|| RateLimitWindow::new(now))
            .try_admit(now, self.limit, self.window);

        Ok(admission)
    }

    fn describe(&self) -> String {
        describe_budget(self.limit, self.window)
    }
}
