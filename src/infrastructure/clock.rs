//! Clock adapters.
//!
//! `SystemClock` is the production clock. Tests drive time with `MockClock`
//! from `crate::infrastructure::mocks` (enabled by the `test-helpers` feature).

use crate::application::ports::Clock;
use std::time::Instant;

/// Production clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
