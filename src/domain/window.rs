//! Fixed admission window.
//!
//! The window admits up to `max_calls` operations, then rejects until the
//! window has expired. Expiry is detected lazily on the next registration:
//! the counter resets and the window restarts at that instant.

use std::time::{Duration, Instant};

/// Outcome of registering an operation against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The operation fits in the current window
    Admitted,
    /// The window's quota is used up
    Rejected,
}

impl Admission {
    /// Check if this outcome is Admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }

    /// Check if this outcome is Rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Admission::Rejected)
    }
}

/// Logical state of the window relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Elapsed time since the window start is within the window duration
    OpenWindow,
    /// Elapsed time has passed the window duration; the next registration resets
    Expired,
}

/// Admission window state: quota, duration, calls so far and window start.
///
/// `calls_in_window` never exceeds `max_calls`.
///
/// # Example
/// ```
/// use seq_throttle::{Admission, AdmissionWindow};
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut window = AdmissionWindow::new(2, Duration::from_secs(1), start);
///
/// assert!(window.register(start).is_admitted());
/// assert!(window.register(start).is_admitted());
/// assert!(window.register(start).is_rejected());
///
/// // Past the window the counter starts over
/// let later = start + Duration::from_millis(1001);
/// assert_eq!(window.register(later), Admission::Admitted);
/// assert_eq!(window.calls_in_window(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AdmissionWindow {
    max_calls: u32,
    window_duration: Duration,
    calls_in_window: u32,
    window_start: Instant,
}

impl AdmissionWindow {
    /// Create a window that opens at `start`.
    ///
    /// # Arguments
    /// * `max_calls` - Operations admitted per window
    /// * `window_duration` - How long a window lasts before it can reset
    /// * `start` - When the first window opens
    pub fn new(max_calls: u32, window_duration: Duration, start: Instant) -> Self {
        Self {
            max_calls,
            window_duration,
            calls_in_window: 0,
            window_start: start,
        }
    }

    /// State of the window as seen at `now`.
    ///
    /// A `now` earlier than the window start counts as zero elapsed time.
    pub fn state_at(&self, now: Instant) -> WindowState {
        if now.saturating_duration_since(self.window_start) > self.window_duration {
            WindowState::Expired
        } else {
            WindowState::OpenWindow
        }
    }

    /// Register one operation at `now`.
    pub fn register(&mut self, now: Instant) -> Admission {
        if self.state_at(now) == WindowState::Expired {
            self.restart(now);
        }

        if self.calls_in_window < self.max_calls {
            self.calls_in_window += 1;
            Admission::Admitted
        } else {
            Admission::Rejected
        }
    }

    /// Start a fresh, empty window at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.calls_in_window = 0;
        self.window_start = now;
    }

    /// Operations admitted in the current window.
    pub fn calls_in_window(&self) -> u32 {
        self.calls_in_window
    }

    /// Maximum operations admitted per window.
    pub fn max_calls(&self) -> u32 {
        self.max_calls
    }

    /// Length of a window.
    pub fn window_duration(&self) -> Duration {
        self.window_duration
    }

    /// When the current window opened.
    pub fn window_start(&self) -> Instant {
        self.window_start
    }
}
