//! # Memory Access
//!
//! Word-granular reads from the inspected address space.
//!
//! The frame walker treats raw address values as a linked list of frame
//! records. All of its reads funnel through the [`MemoryAccess`] trait so the
//! unchecked access has exactly one implementation site ([`RawMemory`]) and
//! every other consumer of the walker can substitute a checked image.

use crate::types::Address;

/// Bytes per machine word read by the walker.
pub const WORD_BYTES: u64 = std::mem::size_of::<u64>() as u64;

/// Minimal memory accessor required for stack walking.
///
/// Reads are infallible by design. The walker trusts the frame chain: a
/// corrupted or cyclic chain is a fatal condition for the command handler
/// driving the walk (the read may fault), not a recoverable error an
/// implementation reports. Implementations over bounded images define their
/// own value for unbacked addresses instead of failing.
pub trait MemoryAccess
{
    /// Read one word from the given address.
    fn read_word(&self, address: Address) -> u64;
}

/// Reads the current address space directly.
///
/// The deployment implementation for a monitor inspecting the kernel it is
/// resident in: every address handed to it must be a mapped, readable
/// location. Also the reason walking another CPU's live stack requires
/// suspending that CPU first; nothing here synchronizes with concurrent
/// writers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawMemory;

impl MemoryAccess for RawMemory
{
    fn read_word(&self, address: Address) -> u64
    {
        let pointer = address.value() as usize as *const u64;
        // SAFETY: sole unchecked read in the crate. The monitor contract
        // requires `address` to be mapped and readable; an unmapped address
        // faults, which is the documented fatal outcome for a corrupted
        // frame chain.
        unsafe { pointer.read_volatile() }
    }
}

/// Word-addressed in-memory image for harnesses and tests.
///
/// Covers `base .. base + words.len() * WORD_BYTES`. Reads below `base` or
/// past the end yield zero; writes past the end grow the image. Addresses are
/// truncated to word granularity.
#[derive(Debug, Default, Clone)]
pub struct BufferMemory
{
    base: Address,
    words: Vec<u64>,
}

impl BufferMemory
{
    /// Create an empty image anchored at `base`.
    pub fn new(base: Address) -> Self
    {
        Self {
            base,
            words: Vec::new(),
        }
    }

    /// Lowest address covered by the image.
    pub fn base(&self) -> Address
    {
        self.base
    }

    /// Store one word, growing the image to cover `address` if needed.
    ///
    /// Writes below `base` are ignored.
    pub fn write_word(&mut self, address: Address, value: u64)
    {
        let Some(offset) = address.offset_from(self.base) else {
            return;
        };
        let index = (offset / WORD_BYTES) as usize;
        if index >= self.words.len() {
            self.words.resize(index + 1, 0);
        }
        self.words[index] = value;
    }
}

impl MemoryAccess for BufferMemory
{
    fn read_word(&self, address: Address) -> u64
    {
        let Some(offset) = address.offset_from(self.base) else {
            return 0;
        };
        self.words.get((offset / WORD_BYTES) as usize).copied().unwrap_or(0)
    }
}
