//! # Monitor
//!
//! The interactive shell: command table, dispatcher and read-dispatch loop.
//!
//! A `Monitor` borrows its collaborators for one session, typically entered
//! from a fault path with the trapframe describing the interrupted machine
//! state. The session runs on whatever execution context invoked it, with no
//! suspension points and no shared mutable state beyond the console it was
//! lent.

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::command::{self, Command, Status};
use crate::console::{Console, ConsoleWriter, LineSource};
use crate::memory::MemoryAccess;
use crate::resolve::DebugResolver;
use crate::tokenize::tokenize;
use crate::types::{KernelLayout, Trapframe};
use crate::unwind::FrameWalker;

/// Command line capacity in bytes; enough for one VGA text line.
pub const LINE_BUF_SIZE: usize = 80;

/// Prompt shown for each command line.
pub const PROMPT: &str = "K> ";

/// Status a handler returns to terminate the shell loop.
pub const EXIT_STATUS: Status = -1;

/// The monitor's command table.
///
/// Fixed at compile time; lookup is a linear first-match scan, so names must
/// be unique (checked below).
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        desc: "Display this list of commands",
        run: cmd_help,
    },
    Command {
        name: "kerninfo",
        desc: "Display information about the kernel",
        run: cmd_kerninfo,
    },
    Command {
        name: "backtrace",
        desc: "Trace back call stack",
        run: cmd_backtrace,
    },
    Command {
        name: "exit",
        desc: "Leave the monitor",
        run: cmd_exit,
    },
];

const _: () = assert!(command::names_are_distinct(COMMANDS), "duplicate command registration");

/// One interactive monitor session.
///
/// Borrows every collaborator: the console it prints to, the memory and
/// resolver backing backtraces, and the trapframe captured at entry. Dropping
/// the monitor releases them all unchanged.
pub struct Monitor<'a>
{
    console: &'a mut dyn Console,
    memory: &'a dyn MemoryAccess,
    resolver: &'a dyn DebugResolver,
    layout: KernelLayout,
    trapframe: &'a Trapframe,
}

impl<'a> Monitor<'a>
{
    /// Wire up a session over the host's collaborators.
    pub fn new(
        console: &'a mut dyn Console,
        memory: &'a dyn MemoryAccess,
        resolver: &'a dyn DebugResolver,
        layout: KernelLayout,
        trapframe: &'a Trapframe,
    ) -> Self
    {
        Self {
            console,
            memory,
            resolver,
            layout,
            trapframe,
        }
    }

    /// Machine state saved when the monitor was entered.
    pub fn trapframe(&self) -> &Trapframe
    {
        self.trapframe
    }

    /// Run the shell until a handler requests termination.
    ///
    /// Lines the source cannot produce (`None`) are skipped, not treated as
    /// end-of-session; the only exit path is a handler returning a negative
    /// status.
    pub fn run(&mut self, input: &mut dyn LineSource)
    {
        let _ = writeln!(self.out(), "Welcome to the kmon kernel monitor!");
        let _ = writeln!(self.out(), "Type 'help' for a list of commands.");

        let mut line = [0u8; LINE_BUF_SIZE];
        loop {
            let Some(len) = input.read_line(PROMPT, &mut line) else {
                continue;
            };
            let len = len.min(line.len());
            if self.run_line(&mut line[..len]) < 0 {
                debug!("monitor session terminated by handler");
                break;
            }
        }
    }

    /// Tokenize one line and dispatch it.
    ///
    /// Tokenizer errors are reported on the console and absorbed; the line
    /// then counts as empty and no dispatch happens.
    pub fn run_line(&mut self, line: &mut [u8]) -> Status
    {
        let args = match tokenize(line) {
            Ok(args) => args,
            Err(err) => {
                let _ = writeln!(self.out(), "{err}");
                return 0;
            }
        };
        self.dispatch(&args)
    }

    /// Look up `args[0]` in the command table and invoke its handler.
    ///
    /// Empty input is a no-op and an unknown name is reported, both with a
    /// non-negative status; neither ends the session.
    pub fn dispatch(&mut self, args: &[&str]) -> Status
    {
        let Some(&name) = args.first() else {
            return 0;
        };
        trace!(command = name, argc = args.len(), "dispatching");
        match command::lookup(COMMANDS, name) {
            Some(command) => (command.run)(self, args),
            None => {
                let _ = writeln!(self.out(), "Unknown command '{name}'");
                0
            }
        }
    }

    fn out(&mut self) -> ConsoleWriter<'_>
    {
        ConsoleWriter::new(&mut *self.console)
    }
}

// Built-in command handlers. Each one matches the `Handler` signature; the
// table above is the only caller.

fn cmd_help(mon: &mut Monitor<'_>, _args: &[&str]) -> Status
{
    let mut out = mon.out();
    for command in COMMANDS {
        let _ = writeln!(out, "{} - {}", command.name, command.desc);
    }
    0
}

fn cmd_kerninfo(mon: &mut Monitor<'_>, _args: &[&str]) -> Status
{
    let layout = mon.layout;
    let mut out = mon.out();
    let _ = writeln!(out, "Special kernel symbols:");
    let _ = writeln!(out, "  entry  {} (virt)  {} (phys)", layout.entry, layout.physical(layout.entry));
    let _ = writeln!(out, "  etext  {} (virt)  {} (phys)", layout.etext, layout.physical(layout.etext));
    let _ = writeln!(out, "  edata  {} (virt)  {} (phys)", layout.edata, layout.physical(layout.edata));
    let _ = writeln!(out, "  end    {} (virt)  {} (phys)", layout.end, layout.physical(layout.end));
    let _ = writeln!(out, "Kernel executable memory footprint: {}KB", layout.footprint_kib());
    0
}

/// Walks the chain anchored at the trapframe's frame pointer, so the first
/// frame printed is the caller that dropped into the monitor, not the monitor
/// itself. Cannot fail the shell: a frame whose return address resolves to
/// nothing ends the walk (its raw line still prints, its symbol line does
/// not) and the handler returns success.
fn cmd_backtrace(mon: &mut Monitor<'_>, _args: &[&str]) -> Status
{
    let start = mon.trapframe.frame_pointer();
    let walker = FrameWalker::new(mon.memory, mon.resolver, start);
    let mut out = ConsoleWriter::new(&mut *mon.console);

    let _ = writeln!(out, "Stack backtrace:");
    for step in walker {
        let frame = step.frame;
        let _ = write!(out, "  fp {}  ra {}  args", frame.frame_pointer, frame.return_address);
        for word in frame.args {
            let _ = write!(out, " {word:#018x}");
        }
        let _ = writeln!(out);
        if let Some(info) = step.debug {
            let _ = writeln!(out, "         {}+{}", info, info.offset_of(frame.return_address));
        }
    }
    0
}

fn cmd_exit(_mon: &mut Monitor<'_>, _args: &[&str]) -> Status
{
    EXIT_STATUS
}
