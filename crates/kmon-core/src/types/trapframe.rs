//! Saved machine state at monitor entry.

use super::Address;

/// Machine state captured at the point execution entered the monitor.
///
/// Whatever invokes the monitor (a fault handler, a boot-time breakpoint, a
/// test fixture) builds one of these and lends it for the duration of the
/// session. The monitor forwards it to command handlers and never decodes it
/// itself; the one field a built-in handler reads is the frame pointer, which
/// seeds the backtrace walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trapframe
{
    pc: Address,
    sp: Address,
    fp: Address,
    status: u64,
}

impl Trapframe
{
    /// Capture the register values saved at monitor entry.
    pub const fn new(pc: Address, sp: Address, fp: Address, status: u64) -> Self
    {
        Self { pc, sp, fp, status }
    }

    /// Instruction address at which execution was interrupted.
    pub const fn program_counter(&self) -> Address
    {
        self.pc
    }

    /// Stack pointer at monitor entry.
    pub const fn stack_pointer(&self) -> Address
    {
        self.sp
    }

    /// Frame pointer at monitor entry. The backtrace walk starts here.
    pub const fn frame_pointer(&self) -> Address
    {
        self.fp
    }

    /// Saved status/flags register.
    pub const fn status(&self) -> u64
    {
        self.status
    }
}
