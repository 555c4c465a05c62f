use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Rejected { retry_after: Duration },
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Fixed-window request counter for one client.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitWindow {
    pub count: u32,
    pub started_at: Instant,
}

impl RateLimitWindow {
    pub fn new(now: Instant) -> Self {
        Self {
            count: 0,
            started_at: now,
        }
    }

    /// Counts one request against the window, starting a fresh window first
    /// when the current one has elapsed.
    pub fn try_admit(&mut self, now: Instant, limit: u32, window: Duration) -> Admission {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= window {
            self.started_at = now;
            self.count = 0;
        }

        if self.count < limit {
            self.count += 1;
            return Admission::Allowed;
        }

        Admission::Rejected {
            retry_after: window.saturating_sub(now.saturating_duration_since(self.started_at)),
        }
    }

    pub fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.started_at) >= window
    }
}
