//! # kmon Utilities
//!
//! Shared utilities for the kmon workspace, chiefly the logging
//! infrastructure built on `tracing`. Log output is diagnostics for whoever
//! runs the harness; the monitor's own console output never goes through
//! here.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{LogFormat, LogLevel, init_logging, init_logging_with_level};
pub use tracing::{debug, error, info, trace, warn};
