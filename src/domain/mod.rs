//! Domain layer - pure logic with no clock access and no logging.
//!
//! - Sequence operations over ordered integer collections
//! - The admission window state machine behind the rate limiter
//! - A simple call counter

pub mod counter;
pub mod sequence;
pub mod window;
