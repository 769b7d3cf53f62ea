//! # Tokenizer
//!
//! In-place, zero-allocation splitting of one command line.
//!
//! The tokenizer owns the buffer's content for the duration of the call and
//! is destructive: every whitespace separator is overwritten with a NUL so
//! each token is independently terminated in memory, and the original line is
//! not recoverable afterwards. The returned slices borrow the buffer.

use smallvec::SmallVec;

use crate::error::{MonitorError, Result};

/// Hard limit on tokens per command line.
pub const MAX_ARGS: usize = 16;

/// Argument list produced by [`tokenize`]; inline storage, no heap in the
/// non-degenerate case.
pub type ArgVec<'a> = SmallVec<[&'a str; MAX_ARGS]>;

const WHITESPACE: &[u8] = b" \t\r\n";

/// Split `buf` into whitespace-separated tokens, in place.
///
/// The line ends at the first NUL already present in `buf`, or at the end of
/// the slice. Runs of space, tab, carriage return and newline separate
/// tokens and are overwritten with NUL bytes.
///
/// ## Errors
///
/// - [`MonitorError::TooManyArguments`] once a token past [`MAX_ARGS`] is
///   found; parsing aborts and the caller must treat the line as empty.
/// - [`MonitorError::InvalidUtf8`] if a token is not valid UTF-8.
pub fn tokenize(buf: &mut [u8]) -> Result<ArgVec<'_>>
{
    let eol = buf.iter().position(|&byte| byte == 0).unwrap_or(buf.len());
    let (line, _) = buf.split_at_mut(eol);

    // Terminate every token in place before borrowing pieces of the line.
    for byte in line.iter_mut() {
        if WHITESPACE.contains(byte) {
            *byte = 0;
        }
    }

    let line: &[u8] = line;
    let mut args = ArgVec::new();
    let mut cursor = 0;
    while cursor < line.len() {
        if line[cursor] == 0 {
            cursor += 1;
            continue;
        }
        let start = cursor;
        while cursor < line.len() && line[cursor] != 0 {
            cursor += 1;
        }
        if args.len() == MAX_ARGS {
            return Err(MonitorError::TooManyArguments { limit: MAX_ARGS });
        }
        args.push(std::str::from_utf8(&line[start..cursor])?);
    }

    Ok(args)
}
