//! Observability subsystem
//!
//! Structured JSON logging for the handlers and the hosting layer.
//!
//! # Principles
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic field ordering
//! - No side effects on execution

mod logger;

pub use logger::{Logger, Severity};
