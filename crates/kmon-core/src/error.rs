//! # Error Types
//!
//! Error handling for the monitor core.
//!
//! We use `thiserror` to generate `Error` trait implementations and the
//! operator-facing messages. The set is deliberately small: per the monitor's
//! error policy, user input problems are reported on the console and absorbed
//! at the dispatch layer, resolution misses are the unwinder's normal
//! termination condition (not an error at all), and a corrupted frame chain
//! is a fatal condition that no error value can represent.

use thiserror::Error;

/// Main error type for monitor operations
///
/// Every variant corresponds to a malformed command line. The shell loop never
/// terminates on any of these; they are printed through the console boundary
/// and the line is treated as empty.
#[derive(Error, Debug)]
pub enum MonitorError
{
    /// The command line held more whitespace-separated tokens than the
    /// tokenizer's fixed argument array can carry.
    ///
    /// Parsing aborts for the whole line. The caller must not dispatch a
    /// partially tokenized line; it behaves exactly like empty input.
    #[error("Too many arguments (max {limit})")]
    TooManyArguments
    {
        /// The fixed argument limit that was exceeded
        limit: usize,
    },

    /// A token contained bytes that do not form valid UTF-8
    ///
    /// Line input arrives as raw bytes. Command names and arguments are
    /// matched as `&str`, so a malformed sequence poisons the whole line.
    #[error("Command line is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Convenience type alias for `Result<T, MonitorError>`
pub type Result<T> = std::result::Result<T, MonitorError>;
