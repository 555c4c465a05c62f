use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RateLimitError, RateLimiter};
use crate::presentation::config::{RateLimitProviderSetting, RateLimitSettings};

use super::fixed_window::FixedWindowRateLimiter;
use super::redis_limiter::RedisRateLimiter;

pub struct RateLimiterFactory;

impl RateLimiterFactory {
    pub async fn create(
        settings: &RateLimitSettings,
    ) -> Result<Arc<dyn RateLimiter>, RateLimitError> {
        let window = Duration::from_secs(settings.window_secs);

        match settings.provider {
            RateLimitProviderSetting::Memory => Ok(Arc::new(FixedWindowRateLimiter::new(
                settings.requests,
                window,
            ))),
            RateLimitProviderSetting::Redis => {
                let limiter =
                    RedisRateLimiter::connect(&settings.redis_url, settings.requests, window)
                        .await?;
                Ok(Arc::new(limiter))
            }
        }
    }
}
