//! Application layer - orchestration of domain logic.
//!
//! - Rate limiter (clock + admission window + metrics + logging)
//! - Shared, mutex-guarded limiter handle
//! - Metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. Time is only read through the `Clock` port.

pub mod limiter;
pub mod metrics;
pub mod ports;
pub mod shared;
