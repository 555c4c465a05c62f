use std::time::Duration;

use docsum::application::ports::RateLimiter;
use docsum::domain::{Admission, ClientId};
use docsum::infrastructure::rate_limit::FixedWindowRateLimiter;

#[tokio::test(start_paused = true)]
async fn given_five_per_minute_when_sixth_request_arrives_then_rejected() {
    let limiter = FixedWindowRateLimiter::new(5, Duration::from_secs(60));
    let client = ClientId::new("10.0.0.1");

    for _ in 0..5 {
        assert!(limiter.admit(&client).await.unwrap().is_allowed());
    }

    tokio::time::advance(Duration::from_secs(20)).await;

    assert_eq!(
        limiter.admit(&client).await.unwrap(),
        Admission::Rejected {
            retry_after: Duration::from_secs(40)
        }
    );
}

#[tokio::test(start_paused = true)]
async fn given_exhausted_budget_when_window_passes_then_admits_again() {
    let limiter = FixedWindowRateLimiter::new(5, Duration::from_secs(60));
    let client = ClientId::new("10.0.0.1");
    for _ in 0..6 {
        limiter.admit(&client).await.unwrap();
    }

    tokio::time::advance(Duration::from_secs(60)).await;

    assert!(limiter.admit(&client).await.unwrap().is_allowed());
}

#[tokio::test]
async fn given_two_clients_when_one_is_exhausted_then_other_is_still_admitted() {
    let limiter = FixedWindowRateLimiter::new(1, Duration::from_secs(60));
    let a = ClientId::new("10.0.0.1");
    let b = ClientId::new("10.0.0.2");

    assert!(limiter.admit(&a).await.unwrap().is_allowed());
    assert!(!limiter.admit(&a).await.unwrap().is_allowed());
    assert!(limiter.admit(&b).await.unwrap().is_allowed());
    assert_eq!(limiter.tracked_clients(), 2);
}

#[test]
fn given_limiter_when_describing_then_matches_rejection_message_format() {
    let limiter = FixedWindowRateLimiter::new(5, Duration::from_secs(60));
    assert_eq!(limiter.describe(), "5 per 1 minute");
}
