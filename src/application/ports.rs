//! Ports (interfaces) for the application layer.
//!
//! The application layer reads time only through these traits. Infrastructure
//! adapters implement them.

use std::fmt::Debug;
use std::time::Instant;

/// Port for obtaining current time.
///
/// Infrastructure provides concrete implementations (`SystemClock`, `MockClock`).
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;
}
