//! Rate limiter coordination logic.
//!
//! The rate limiter reads the clock, consults its admission window and keeps
//! metrics. Admission never fails: every call ends in admit or reject.

use crate::application::metrics::Metrics;
use crate::application::ports::Clock;
use crate::domain::window::{Admission, AdmissionWindow, WindowState};
use crate::infrastructure::clock::SystemClock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Operations admitted per window when the builder is not told otherwise.
pub const DEFAULT_MAX_CALLS: u32 = 3;

/// Window length when the builder is not told otherwise.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(1);

/// Error returned when a rate limiter configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Max calls per window must be greater than zero
    ZeroMaxCalls,
    /// Window duration must be greater than zero
    ZeroWindow,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroMaxCalls => write!(f, "max_calls must be greater than 0"),
            ConfigError::ZeroWindow => write!(f, "window duration must be greater than 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Builder for constructing a [`RateLimiter`].
///
/// # Example
/// ```
/// use seq_throttle::RateLimiter;
/// use std::time::Duration;
///
/// let mut limiter = RateLimiter::builder()
///     .with_max_calls(5)
///     .with_window(Duration::from_millis(500))
///     .build()
///     .unwrap();
///
/// assert!(limiter.try_acquire());
/// ```
#[derive(Debug, Clone)]
pub struct RateLimiterBuilder {
    max_calls: u32,
    window: Duration,
    clock: Option<Arc<dyn Clock>>,
}

impl RateLimiterBuilder {
    /// Set how many operations each window admits.
    pub fn with_max_calls(mut self, max_calls: u32) -> Self {
        self.max_calls = max_calls;
        self
    }

    /// Set the window length.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Use a custom clock instead of the system clock.
    ///
    /// Mostly useful in tests together with `MockClock`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate the configuration and build the limiter.
    ///
    /// The first window opens at build time.
    ///
    /// # Errors
    /// * [`ConfigError::ZeroMaxCalls`] if `max_calls` is 0
    /// * [`ConfigError::ZeroWindow`] if the window is zero-length
    pub fn build(self) -> Result<RateLimiter, ConfigError> {
        if self.max_calls == 0 {
            return Err(ConfigError::ZeroMaxCalls);
        }
        if self.window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let window = AdmissionWindow::new(self.max_calls, self.window, clock.now());

        Ok(RateLimiter {
            window,
            clock,
            metrics: Metrics::new(),
        })
    }
}

impl Default for RateLimiterBuilder {
    fn default() -> Self {
        Self {
            max_calls: DEFAULT_MAX_CALLS,
            window: DEFAULT_WINDOW,
            clock: None,
        }
    }
}

/// Gate admitting at most `max_calls` operations per window.
///
/// `try_acquire` takes `&mut self`; wrap the limiter in a
/// [`SharedRateLimiter`](crate::SharedRateLimiter) to share it between threads.
/// A clone copies the current window but starts with its own, empty metrics.
///
/// # Example
/// ```
/// use seq_throttle::RateLimiter;
/// use std::time::Duration;
///
/// let mut limiter = RateLimiter::new(3, Duration::from_secs(1)).unwrap();
///
/// assert!(limiter.try_acquire());
/// assert!(limiter.try_acquire());
/// assert!(limiter.try_acquire());
/// assert!(!limiter.try_acquire());
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    window: AdmissionWindow,
    clock: Arc<dyn Clock>,
    metrics: Metrics,
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            window: self.window.clone(),
            clock: Arc::clone(&self.clock),
            metrics: Metrics::new(),
        }
    }
}

impl RateLimiter {
    /// Create a limiter on the system clock.
    ///
    /// # Errors
    /// Same as [`RateLimiterBuilder::build`].
    pub fn new(max_calls: u32, window: Duration) -> Result<Self, ConfigError> {
        Self::builder()
            .with_max_calls(max_calls)
            .with_window(window)
            .build()
    }

    /// Start building a limiter.
    pub fn builder() -> RateLimiterBuilder {
        RateLimiterBuilder::default()
    }

    /// Try to admit one operation.
    ///
    /// If the current window has expired it is restarted at the current
    /// instant first. Returns `true` if the operation was admitted.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();

        if self.window.state_at(now) == WindowState::Expired {
            trace!(
                calls_in_previous_window = self.window.calls_in_window(),
                "admission window expired, starting a new one"
            );
            self.window.restart(now);
            self.metrics.record_window_reset();
        }

        match self.window.register(now) {
            Admission::Admitted => {
                self.metrics.record_admitted();
                true
            }
            Admission::Rejected => {
                debug!(
                    max_calls = self.window.max_calls(),
                    window_ms = u64::try_from(self.window.window_duration().as_millis())
                        .unwrap_or(u64::MAX),
                    "operation rejected, admission window is full"
                );
                self.metrics.record_rejected();
                false
            }
        }
    }

    /// Discard the current window and open an empty one now.
    pub fn reset(&mut self) {
        self.window.restart(self.clock.now());
    }

    /// State of the current window at the clock's current time.
    pub fn state(&self) -> WindowState {
        self.window.state_at(self.clock.now())
    }

    /// Operations admitted in the current window.
    pub fn calls_in_window(&self) -> u32 {
        self.window.calls_in_window()
    }

    /// Maximum operations admitted per window.
    pub fn max_calls(&self) -> u32 {
        self.window.max_calls()
    }

    /// Length of a window.
    pub fn window_duration(&self) -> Duration {
        self.window.window_duration()
    }

    /// When the current window opened.
    pub fn window_start(&self) -> Instant {
        self.window.window_start()
    }

    /// Get a reference to the metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mocks::{MockCaptureLayer, MockClock};
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn mock_limiter(max_calls: u32, window: Duration) -> (RateLimiter, Arc<MockClock>) {
        let clock = Arc::new(MockClock::new(Instant::now()));
        let limiter = RateLimiter::builder()
            .with_max_calls(max_calls)
            .with_window(window)
            .with_clock(clock.clone())
            .build()
            .unwrap();
        (limiter, clock)
    }

    #[test]
    fn test_three_per_second() {
        let (mut limiter, clock) = mock_limiter(3, Duration::from_secs(1));

        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());

        clock.advance(Duration::from_millis(1100));

        assert!(limiter.try_acquire());
        assert_eq!(limiter.calls_in_window(), 1);
    }

    #[test]
    fn test_rejections_do_not_count_against_next_window() {
        let (mut limiter, clock) = mock_limiter(2, Duration::from_secs(1));

        for _ in 0..10 {
            limiter.try_acquire();
        }
        assert_eq!(limiter.calls_in_window(), 2);

        clock.advance(Duration::from_secs(2));
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn test_state_follows_clock() {
        let (limiter, clock) = mock_limiter(1, Duration::from_secs(1));

        assert_eq!(limiter.state(), WindowState::OpenWindow);
        clock.advance(Duration::from_secs(1));
        assert_eq!(limiter.state(), WindowState::OpenWindow);
        clock.advance(Duration::from_millis(1));
        assert_eq!(limiter.state(), WindowState::Expired);
    }

    #[test]
    fn test_window_start_moves_on_reset() {
        let (mut limiter, clock) = mock_limiter(1, Duration::from_secs(1));
        let opened = limiter.window_start();

        assert!(limiter.try_acquire());
        clock.advance(Duration::from_secs(3));
        assert!(limiter.try_acquire());

        assert_eq!(limiter.window_start(), opened + Duration::from_secs(3));
    }

    #[test]
    fn test_manual_reset() {
        let (mut limiter, _clock) = mock_limiter(1, Duration::from_secs(60));

        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());

        limiter.reset();
        assert_eq!(limiter.calls_in_window(), 0);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_metrics_track_decisions() {
        let (mut limiter, clock) = mock_limiter(2, Duration::from_secs(1));

        for _ in 0..5 {
            limiter.try_acquire();
        }
        clock.advance(Duration::from_secs(2));
        limiter.try_acquire();

        let snapshot = limiter.metrics().snapshot();
        assert_eq!(snapshot.admitted, 3);
        assert_eq!(snapshot.rejected, 3);
        assert_eq!(snapshot.window_resets, 1);
    }

    #[test]
    fn test_clone_counts_only_its_own_calls() {
        let (mut a, _clock) = mock_limiter(3, Duration::from_secs(1));
        let mut b = a.clone();

        assert!(a.try_acquire());
        assert!(b.try_acquire());
        assert!(b.try_acquire());

        assert_eq!(a.calls_in_window(), 1);
        assert_eq!(b.calls_in_window(), 2);
        assert_eq!(a.metrics().admitted(), 1);
        assert_eq!(b.metrics().admitted(), 2);
    }

    #[test]
    fn test_clone_keeps_window_progress() {
        let (mut a, _clock) = mock_limiter(2, Duration::from_secs(1));
        assert!(a.try_acquire());
        assert!(a.try_acquire());

        let mut b = a.clone();
        assert!(!b.try_acquire());
        assert_eq!(b.metrics().snapshot().total_checks(), 1);
        assert_eq!(a.metrics().snapshot().total_checks(), 2);
    }

    #[test]
    fn test_huge_window_logs_saturated_millis() {
        let capture = MockCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let (mut limiter, _clock) = mock_limiter(1, Duration::MAX);

        tracing::subscriber::with_default(subscriber, || {
            assert!(limiter.try_acquire());
            assert!(!limiter.try_acquire());
        });

        let events = capture.get_captured();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].fields.get("window_ms"),
            Some(&u64::MAX.to_string())
        );
    }

    #[test]
    fn test_builder_defaults() {
        let limiter = RateLimiter::builder().build().unwrap();
        assert_eq!(limiter.max_calls(), DEFAULT_MAX_CALLS);
        assert_eq!(limiter.window_duration(), DEFAULT_WINDOW);
    }

    #[test]
    fn test_builder_rejects_zero_max_calls() {
        let result = RateLimiter::builder().with_max_calls(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::ZeroMaxCalls);
    }

    #[test]
    fn test_builder_rejects_zero_window() {
        let result = RateLimiter::new(3, Duration::ZERO);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroWindow);
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::ZeroMaxCalls.to_string(),
            "max_calls must be greater than 0"
        );
        assert_eq!(
            ConfigError::ZeroWindow.to_string(),
            "window duration must be greater than 0"
        );
    }

    #[test]
    fn test_rejection_is_logged_at_debug() {
        let capture = MockCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let (mut limiter, _clock) = mock_limiter(1, Duration::from_secs(1));

        tracing::subscriber::with_default(subscriber, || {
            assert!(limiter.try_acquire());
            assert!(!limiter.try_acquire());
        });

        let events = capture.get_captured();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::DEBUG);
        assert!(events[0].message.contains("rejected"));
    }

    #[test]
    fn test_window_reset_is_logged_at_trace() {
        let capture = MockCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let (mut limiter, clock) = mock_limiter(1, Duration::from_secs(1));

        tracing::subscriber::with_default(subscriber, || {
            assert!(limiter.try_acquire());
            clock.advance(Duration::from_secs(2));
            assert!(limiter.try_acquire());
        });

        let events = capture.get_captured();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::TRACE);
        assert!(events[0].message.contains("expired"));
    }
}
