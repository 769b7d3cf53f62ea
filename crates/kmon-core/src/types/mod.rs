//! # Types
//!
//! Platform-agnostic types used throughout the monitor.
//!
//! These types describe the data the monitor moves between its boundaries:
//! raw addresses, reconstructed stack frames, borrowed debug information and
//! the saved machine state handed over by whatever dropped into the monitor.

pub mod address;
pub mod frame;
pub mod layout;
pub mod symbols;
pub mod trapframe;

// Re-export all public types
pub use address::Address;
pub use frame::{StackFrame, ARG_WORDS};
pub use layout::KernelLayout;
pub use symbols::DebugInfo;
pub use trapframe::Trapframe;
