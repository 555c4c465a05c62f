mod fixed_window;
mod limiter_factory;
mod redis_limiter;

use std::time::Duration;

pub use fixed_window::FixedWindowRateLimiter;
pub use limiter_factory::RateLimiterFactory;
pub use redis_limiter::{RedisRateLimiter, retry_after_from_ttl};

/// Formats a budget the way rejection messages show it, e.g. `5 per 1 minute`.
pub fn describe_budget(limit: u32, window: Duration) -> String {
    let secs = window.as_secs();
    let (amount, unit) = if secs > 0 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs > 0 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{} per {} {}{}", limit, amount, unit, plural)
}
