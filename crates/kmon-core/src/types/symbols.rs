//! Debug information types.

use std::fmt;

use super::Address;

/// Source-level description of one instruction address.
///
/// Borrowed from the resolver that produced it, for the duration of one
/// formatting call. The `function` slice carries its own length; resolvers
/// hand out exactly the bytes of the name and nothing relies on a terminator
/// following them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugInfo<'a>
{
    /// Source file containing the address.
    pub file: &'a str,
    /// Line number within `file`.
    pub line: u32,
    /// Name of the enclosing function.
    pub function: &'a str,
    /// First instruction of the enclosing function.
    pub function_start: Address,
}

impl DebugInfo<'_>
{
    /// Byte offset of `address` into the enclosing function.
    ///
    /// Wraps if `address` is below `function_start`; a resolver that covers
    /// `address` never reports a start above it.
    pub fn offset_of(&self, address: Address) -> u64
    {
        address.value().wrapping_sub(self.function_start.value())
    }
}

impl fmt::Display for DebugInfo<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}:{}: {}", self.file, self.line, self.function)
    }
}
