//! Structured logging
//!
//! One JSON line per event, synchronous and unbuffered, with
//! deterministic field ordering.

mod logger;

pub use logger::{Logger, Severity};
