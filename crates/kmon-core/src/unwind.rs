//! # Stack Unwinding
//!
//! Frame-pointer chain walking over externally-owned memory.
//!
//! The walker interprets raw address values as a linked list of frame
//! records: each record stores the caller's frame pointer at offset zero and
//! the return address one word above it, with the first argument slots
//! following. Nothing tags these words; the chain is trusted as read.
//!
//! Termination is delegated to debug resolution. The walk ends when the
//! resolver has no symbol covering the current return address, which is read
//! as having stepped past the outermost known frame (an entry stub that
//! zeroed the frame pointer, typically). That final unresolved frame is still
//! yielded, without debug information, before the sequence ends. There is no
//! frame-count bound and no validation of the frame pointer itself: a
//! corrupted or cyclic chain makes the walk fault or diverge, which is the
//! accepted cost of the technique and belongs to the handler driving the
//! walk.

use tracing::debug;

use crate::memory::{MemoryAccess, WORD_BYTES};
use crate::resolve::DebugResolver;
use crate::types::{Address, DebugInfo, StackFrame, ARG_WORDS};

/// One step of the walk: the raw frame plus whatever the resolver knew about
/// its return address.
#[derive(Debug, Clone, Copy)]
pub struct WalkedFrame<'a>
{
    /// Frame record as read from memory.
    pub frame: StackFrame,
    /// Debug information for `frame.return_address`; `None` exactly once, on
    /// the final frame of the walk.
    pub debug: Option<DebugInfo<'a>>,
}

/// Lazy, finite, non-restartable walk up a frame-pointer chain.
///
/// Yields frames in caller-to-outermost order, starting at the frame record
/// the initial frame pointer designates.
pub struct FrameWalker<'a>
{
    memory: &'a dyn MemoryAccess,
    resolver: &'a dyn DebugResolver,
    frame_pointer: Address,
    done: bool,
}

impl<'a> FrameWalker<'a>
{
    /// Start a walk at `initial_frame_pointer`.
    pub fn new(memory: &'a dyn MemoryAccess, resolver: &'a dyn DebugResolver, initial_frame_pointer: Address) -> Self
    {
        Self {
            memory,
            resolver,
            frame_pointer: initial_frame_pointer,
            done: false,
        }
    }
}

impl<'a> Iterator for FrameWalker<'a>
{
    type Item = WalkedFrame<'a>;

    fn next(&mut self) -> Option<WalkedFrame<'a>>
    {
        if self.done {
            return None;
        }

        let frame_pointer = self.frame_pointer;
        let return_address = Address::new(self.memory.read_word(frame_pointer + WORD_BYTES));
        let mut args = [0u64; ARG_WORDS];
        for (index, slot) in args.iter_mut().enumerate() {
            *slot = self.memory.read_word(frame_pointer + (2 + index as u64) * WORD_BYTES);
        }

        let debug = self.resolver.resolve(return_address);
        if debug.is_some() {
            // The saved frame pointer is only dereferenced once this frame
            // resolved; a sentinel frame's linkage word is never read.
            self.frame_pointer = Address::new(self.memory.read_word(frame_pointer));
        } else {
            debug!(address = %return_address, "no debug info for return address, ending walk");
            self.done = true;
        }

        Some(WalkedFrame {
            frame: StackFrame {
                frame_pointer,
                return_address,
                args,
            },
            debug,
        })
    }
}
