//! Mock clock for testing.

use crate::application::ports::Clock;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Clock whose time only moves when a test moves it.
///
/// Clones share the same time value, so a test can keep one clone and hand
/// another (as `Arc<dyn Clock>`) to a limiter.
///
/// # Examples
///
/// ```
/// use seq_throttle::infrastructure::mocks::MockClock;
/// use seq_throttle::RateLimiter;
/// use std::sync::Arc;
/// use std::time::{Duration, Instant};
///
/// let clock = Arc::new(MockClock::new(Instant::now()));
/// let mut limiter = RateLimiter::builder()
///     .with_max_calls(1)
///     .with_window(Duration::from_secs(1))
///     .with_clock(clock.clone())
///     .build()
///     .unwrap();
///
/// assert!(limiter.try_acquire());
/// assert!(!limiter.try_acquire());
///
/// clock.advance(Duration::from_secs(2));
/// assert!(limiter.try_acquire());
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    current_time: Arc<Mutex<Instant>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific instant.
    pub fn new(start: Instant) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Move time forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        *self.time() += duration;
    }

    /// Jump to a specific instant, which may be earlier than the current one.
    pub fn set(&self, instant: Instant) {
        *self.time() = instant;
    }

    fn time(&self) -> MutexGuard<'_, Instant> {
        self.current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.time()
    }
}
