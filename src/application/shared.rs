//! Thread-safe handle around a [`RateLimiter`].

use crate::application::limiter::RateLimiter;
use crate::application::metrics::Metrics;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe rate limiter handle.
///
/// One mutex covers the whole read-check-increment sequence of
/// [`RateLimiter::try_acquire`], so concurrent callers never admit more than
/// `max_calls` operations in a window. All clones share the same window.
///
/// # Example
/// ```
/// use seq_throttle::{RateLimiter, SharedRateLimiter};
/// use std::thread;
/// use std::time::Duration;
///
/// let limiter = SharedRateLimiter::new(RateLimiter::new(2, Duration::from_secs(60)).unwrap());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let limiter = limiter.clone();
///         thread::spawn(move || limiter.try_acquire())
///     })
///     .collect();
///
/// let admitted = handles
///     .into_iter()
///     .map(|h| h.join().unwrap())
///     .filter(|admitted| *admitted)
///     .count();
/// assert_eq!(admitted, 2);
/// ```
#[derive(Debug, Clone)]
pub struct SharedRateLimiter {
    inner: Arc<Mutex<RateLimiter>>,
    metrics: Metrics,
}

impl SharedRateLimiter {
    /// Wrap a limiter for shared use.
    pub fn new(limiter: RateLimiter) -> Self {
        let metrics = limiter.metrics().clone();
        Self {
            inner: Arc::new(Mutex::new(limiter)),
            metrics,
        }
    }

    /// Try to admit one operation. See [`RateLimiter::try_acquire`].
    pub fn try_acquire(&self) -> bool {
        self.lock().try_acquire()
    }

    /// Discard the current window and open an empty one now.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Operations admitted in the current window.
    pub fn calls_in_window(&self) -> u32 {
        self.lock().calls_in_window()
    }

    /// Metrics of the wrapped limiter; readable without taking the lock.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // A panic cannot leave the window half-updated, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, RateLimiter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<RateLimiter> for SharedRateLimiter {
    fn from(limiter: RateLimiter) -> Self {
        Self::new(limiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mocks::MockClock;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn test_concurrent_callers_respect_quota() {
        let clock = Arc::new(MockClock::new(Instant::now()));
        let limiter = RateLimiter::builder()
            .with_max_calls(10)
            .with_window(Duration::from_secs(1))
            .with_clock(clock.clone())
            .build()
            .unwrap();
        let shared = SharedRateLimiter::new(limiter);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || (0..25).filter(|_| shared.try_acquire()).count())
            })
            .collect();

        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(admitted, 10);
        assert_eq!(shared.calls_in_window(), 10);
        assert_eq!(shared.metrics().rejected(), 190);
    }

    #[test]
    fn test_clones_share_window() {
        let clock = Arc::new(MockClock::new(Instant::now()));
        let limiter = RateLimiter::builder()
            .with_max_calls(1)
            .with_clock(clock.clone())
            .build()
            .unwrap();
        let a = SharedRateLimiter::from(limiter);
        let b = a.clone();

        assert!(a.try_acquire());
        assert!(!b.try_acquire());

        clock.advance(Duration::from_secs(2));
        assert!(b.try_acquire());
        assert!(!a.try_acquire());
    }

    #[test]
    fn test_usable_after_poisoned_lock() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60)).unwrap();
        let shared = SharedRateLimiter::new(limiter);
        let poisoner = shared.clone();

        let _ = thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();

        assert!(shared.try_acquire());
        assert_eq!(shared.calls_in_window(), 1);
    }

    #[test]
    fn test_reset() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60)).unwrap();
        let shared = SharedRateLimiter::new(limiter);

        assert!(shared.try_acquire());
        assert!(!shared.try_acquire());
        shared.reset();
        assert!(shared.try_acquire());
    }
}
