use std::time::{Duration, Instant};

use docsum::domain::{Admission, RateLimitWindow};

const WINDOW: Duration = Duration::from_secs(60);

#[test]
fn given_limit_of_five_when_sixth_request_in_window_then_rejected() {
    let start = Instant::now();
    let mut window = RateLimitWindow::new(start);

    for i in 0..5 {
        let now = start + Duration::from_secs(i);
        assert!(window.try_admit(now, 5, WINDOW).is_allowed(), "request {}", i + 1);
    }

    let admission = window.try_admit(start + Duration::from_secs(10), 5, WINDOW);
    assert_eq!(
        admission,
        Admission::Rejected {
            retry_after: Duration::from_secs(50)
        }
    );
}

#[test]
fn given_exhausted_window_when_window_elapses_then_admits_again() {
    let start = Instant::now();
    let mut window = RateLimitWindow::new(start);
    for _ in 0..5 {
        window.try_admit(start, 5, WINDOW);
    }
    assert!(!window.try_admit(start, 5, WINDOW).is_allowed());

    let later = start + WINDOW;
    assert!(window.try_admit(later, 5, WINDOW).is_allowed());
    assert_eq!(window.count, 1);
    assert_eq!(window.started_at, later);
}

#[test]
fn given_rejected_requests_when_counting_then_they_do_not_extend_the_window() {
    let start = Instant::now();
    let mut window = RateLimitWindow::new(start);
    for _ in 0..10 {
        window.try_admit(start, 5, WINDOW);
    }
    assert_eq!(window.count, 5);
    assert!(window.is_expired(start + WINDOW, WINDOW));
}
