//! Observability metrics for rate limiting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for admission decisions.
///
/// Clones share the same counters, so a handle can be kept after the limiter
/// moves into a [`SharedRateLimiter`](crate::SharedRateLimiter).
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Operations admitted
    admitted: AtomicU64,
    /// Operations rejected
    rejected: AtomicU64,
    /// Windows restarted after expiry
    window_resets: AtomicU64,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                admitted: AtomicU64::new(0),
                rejected: AtomicU64::new(0),
                window_resets: AtomicU64::new(0),
            }),
        }
    }

    pub(crate) fn record_admitted(&self) {
        self.inner.admitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.inner.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_window_reset(&self) {
        self.inner.window_resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Total operations admitted.
    pub fn admitted(&self) -> u64 {
        self.inner.admitted.load(Ordering::Relaxed)
    }

    /// Total operations rejected.
    pub fn rejected(&self) -> u64 {
        self.inner.rejected.load(Ordering::Relaxed)
    }

    /// Total windows restarted after expiry.
    pub fn window_resets(&self) -> u64 {
        self.inner.window_resets.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            admitted: self.admitted(),
            rejected: self.rejected(),
            window_resets: self.window_resets(),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inner.admitted.store(0, Ordering::Relaxed);
        self.inner.rejected.store(0, Ordering::Relaxed);
        self.inner.window_resets.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Operations admitted
    pub admitted: u64,
    /// Operations rejected
    pub rejected: u64,
    /// Windows restarted after expiry
    pub window_resets: u64,
}

impl MetricsSnapshot {
    /// Fraction of operations rejected (0.0 to 1.0).
    ///
    /// Returns 0.0 if nothing has been checked yet.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.total_checks();
        if total == 0 {
            0.0
        } else {
            self.rejected as f64 / total as f64
        }
    }

    /// Admitted plus rejected.
    pub fn total_checks(&self) -> u64 {
        self.admitted.saturating_add(self.rejected)
    }
}
