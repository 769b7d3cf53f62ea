//! # kmon-core
//!
//! The core of the kmon kernel monitor: an interactive diagnostic shell built
//! around a small command dispatcher and a frame-pointer call-stack unwinder.
//!
//! The crate is an embeddable library. Everything the monitor needs from its
//! host is a trait boundary:
//!
//! - [`console::Console`]: a single-character output sink
//! - [`console::LineSource`]: line-at-a-time operator input
//! - [`memory::MemoryAccess`]: word reads from the inspected address space
//! - [`resolve::DebugResolver`]: return-address to source-location mapping
//!
//! A kernel embeds the monitor by wiring those traits to its console driver,
//! its own address space ([`memory::RawMemory`]) and whatever symbol table the
//! boot path loaded. Hosted harnesses and tests wire them to in-memory
//! fixtures instead ([`console::BufferConsole`], [`memory::BufferMemory`],
//! [`resolve::SymbolTable`]).
//!
//! ## Why unsafe code is needed
//!
//! Walking a frame-pointer chain means dereferencing raw address values with
//! no type tag and no bounds. That access is confined to one primitive read
//! in [`memory::RawMemory`], so the safety argument lives in exactly one
//! place. Every other memory access in the crate goes through the safe
//! [`memory::MemoryAccess`] trait.

#![allow(unsafe_code)] // One raw read primitive; see memory::RawMemory.

pub mod command;
pub mod console;
pub mod error;
pub mod memory;
pub mod monitor;
pub mod resolve;
pub mod tokenize;
pub mod types;
pub mod unwind;

pub use command::{Command, Status};
pub use console::{BufferConsole, Console, ConsoleWriter, LineSource};
// Re-export commonly used types
pub use error::{MonitorError, Result};
pub use memory::{BufferMemory, MemoryAccess, RawMemory};
pub use monitor::{Monitor, COMMANDS};
pub use resolve::{DebugResolver, FunctionRecord, SymbolTable};
pub use types::{Address, DebugInfo, KernelLayout, StackFrame, Trapframe};
pub use unwind::FrameWalker;
