//! # Command Table
//!
//! The closed set of named operations the monitor understands.
//!
//! Commands form a fixed table built at compile time; there is no dynamic
//! registration. Lookup is a linear scan with exact, case-sensitive matching,
//! and duplicate names are rejected while the table itself is evaluated.

use crate::monitor::Monitor;

/// Status returned by a command handler.
///
/// A negative status is the one and only signal that terminates the shell
/// loop. Everything else means "keep reading commands".
pub type Status = i32;

/// Handler invoked when a command's name matches the first token.
///
/// Receives the monitor (carrying the console, the inspected memory, the
/// resolver and the trapframe of this session) and the full token list,
/// command name included.
pub type Handler = fn(&mut Monitor<'_>, &[&str]) -> Status;

/// One entry in the monitor's command table.
#[derive(Clone, Copy)]
pub struct Command
{
    /// Name the dispatcher matches against the first token.
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub desc: &'static str,
    /// Handler to invoke on a match.
    pub run: Handler,
}

/// Find the first command whose name equals `name` exactly.
pub fn lookup<'t>(table: &'t [Command], name: &str) -> Option<&'t Command>
{
    table.iter().find(|command| command.name == name)
}

/// Compile-time check that no name is registered twice.
///
/// Evaluated in a `const` assertion next to the table; a duplicate entry is a
/// build error, not a runtime tie broken by table order.
pub const fn names_are_distinct(commands: &[Command]) -> bool
{
    let mut i = 0;
    while i < commands.len() {
        let mut j = i + 1;
        while j < commands.len() {
            if bytes_equal(commands[i].name.as_bytes(), commands[j].name.as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn bytes_equal(a: &[u8], b: &[u8]) -> bool
{
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
