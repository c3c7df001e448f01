//! Monotonic call counter.

/// Counts how many times [`Counter::next`] has been called.
///
/// # Example
/// ```
/// use seq_throttle::Counter;
///
/// let mut counter = Counter::new();
/// assert_eq!(counter.next(), 1);
/// assert_eq!(counter.next(), 2);
/// assert_eq!(counter.current(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Increment and return the new count.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Current count without incrementing.
    pub fn current(&self) -> u64 {
        self.count
    }
}
