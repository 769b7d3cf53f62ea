//! Stack frame types.

use super::Address;

/// Number of argument words captured per frame.
///
/// The words immediately above the frame linkage are reported as the first
/// argument slots, the way a stack-argument calling convention lays them out.
pub const ARG_WORDS: usize = 5;

/// One reconstructed stack frame.
///
/// Ephemeral: rebuilt from memory content on every unwind step and owned by
/// nothing beyond the iteration that produced it. The fields are exactly what
/// the frame record holds in memory; none of them is validated.
///
/// Layout read at `frame_pointer`:
///
/// - offset 0: the caller's saved frame pointer (consumed by the walker)
/// - offset 1 word: `return_address`
/// - offsets 2..7 words: `args`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFrame
{
    /// Address this frame record was read from.
    pub frame_pointer: Address,
    /// Instruction address execution resumes at when this frame returns.
    pub return_address: Address,
    /// Raw words following the frame linkage, reported as argument slots.
    pub args: [u64; ARG_WORDS],
}
