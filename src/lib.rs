//! # seq-throttle
//!
//! Two small, independent building blocks:
//!
//! - **Sequence operations**: remove-at-index, merge, filter, reverse in place,
//!   max, element-wise equality and stable de-duplication over ordered
//!   sequences.
//! - **Rate limiting**: a gate that admits at most N operations per time
//!   window, resetting once the window has expired.
//!
//! ## Quick Start
//!
//! ```rust
//! use seq_throttle::sequence::{dedup_stable, max, remove_at};
//! use seq_throttle::RateLimiter;
//! use std::time::Duration;
//!
//! assert_eq!(remove_at(vec![1, 2, 3, 4, 5], 2), vec![1, 2, 4, 5]);
//! assert_eq!(dedup_stable(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
//! assert_eq!(max(&[45, 23, 67, 12, 89]), Ok(89));
//!
//! // Allow 3 operations per second
//! let mut limiter = RateLimiter::new(3, Duration::from_secs(1)).unwrap();
//! assert!(limiter.try_acquire());
//! ```
//!
//! ## Sequence Operations
//!
//! Operations that build a new sequence return an owned `Vec`; the caller's
//! input is never retained. Only [`sequence::reverse_in_place`] mutates.
//! [`sequence::max`] is the one operation that can fail, with
//! [`SequenceError::EmptyInput`].
//!
//! ## Rate Limiting
//!
//! [`RateLimiter::try_acquire`] returns `true` when the operation is admitted
//! and `false` when the current window's quota is used up. It never errors.
//! The window is restarted lazily: the first call after the window has
//! expired resets the count and opens a new window at that instant.
//!
//! ```rust
//! use seq_throttle::RateLimiter;
//! use std::time::Duration;
//!
//! let mut limiter = RateLimiter::builder()
//!     .with_max_calls(2)
//!     .with_window(Duration::from_millis(200))
//!     .build()
//!     .expect("valid config");
//!
//! assert!(limiter.try_acquire());
//! assert!(limiter.try_acquire());
//! assert!(!limiter.try_acquire());
//!
//! let metrics = limiter.metrics().snapshot();
//! assert_eq!(metrics.admitted, 2);
//! assert_eq!(metrics.rejected, 1);
//! ```
//!
//! `try_acquire` takes `&mut self`. To share one window between threads, wrap
//! the limiter in a [`SharedRateLimiter`], which holds a single lock across
//! the whole check-and-increment.
//!
//! ## Logging
//!
//! The limiter emits `tracing` events: `DEBUG` for each rejection and `TRACE`
//! when an expired window is restarted. Install any subscriber to see them.

// Domain layer - pure logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - adapters
pub mod infrastructure;

pub use domain::sequence;

pub use domain::{
    counter::Counter,
    sequence::SequenceError,
    window::{Admission, AdmissionWindow, WindowState},
};

pub use application::{
    limiter::{ConfigError, RateLimiter, RateLimiterBuilder, DEFAULT_MAX_CALLS, DEFAULT_WINDOW},
    metrics::{Metrics, MetricsSnapshot},
    ports::Clock,
    shared::SharedRateLimiter,
};

pub use infrastructure::clock::SystemClock;
