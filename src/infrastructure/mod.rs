//! Infrastructure layer - external adapters.
//!
//! - System clock behind the `Clock` port

pub mod clock;

/// Mock implementations for testing.
///
/// Available with the `test-helpers` feature or in test builds:
/// ```toml
/// [dev-dependencies]
/// seq-throttle = { version = "*", features = ["test-helpers"] }
/// ```
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
