//! Tests for command lookup, dispatch and the shell loop.

use kmon_core::command::Status;
use kmon_core::console::{BufferConsole, LineSource};
use kmon_core::memory::BufferMemory;
use kmon_core::monitor::{Monitor, COMMANDS};
use kmon_core::resolve::SymbolTable;
use kmon_core::types::{Address, KernelLayout, Trapframe};

fn layout() -> KernelLayout
{
    KernelLayout {
        base: Address::new(0xffff_8000_0000_0000),
        entry: Address::new(0xffff_8000_0010_0000),
        etext: Address::new(0xffff_8000_0014_0000),
        edata: Address::new(0xffff_8000_0016_0000),
        end: Address::new(0xffff_8000_0018_0400),
    }
}

/// Run `body` against a monitor over empty memory and an empty symbol table,
/// returning the status it produced and everything printed to the console.
fn with_monitor(body: impl FnOnce(&mut Monitor<'_>) -> Status) -> (Status, String)
{
    let mut console = BufferConsole::new();
    let memory = BufferMemory::new(Address::ZERO);
    let symbols = SymbolTable::new();
    let trapframe = Trapframe::new(Address::ZERO, Address::ZERO, Address::ZERO, 0);
    let status = {
        let mut monitor = Monitor::new(&mut console, &memory, &symbols, layout(), &trapframe);
        body(&mut monitor)
    };
    (status, console.contents().to_string())
}

#[test]
fn test_zero_tokens_is_a_noop()
{
    let (status, output) = with_monitor(|monitor| monitor.dispatch(&[]));
    assert_eq!(status, 0);
    assert!(output.is_empty());
}

#[test]
fn test_unknown_command_is_reported_and_absorbed()
{
    let (status, output) = with_monitor(|monitor| monitor.dispatch(&["frobnicate"]));
    assert_eq!(status, 0);
    assert!(output.contains("Unknown command 'frobnicate'"));
}

#[test]
fn test_lookup_is_case_sensitive()
{
    let (status, output) = with_monitor(|monitor| monitor.dispatch(&["Help"]));
    assert_eq!(status, 0);
    assert!(output.contains("Unknown command 'Help'"));
}

#[test]
fn test_help_lists_every_command()
{
    let (status, output) = with_monitor(|monitor| monitor.dispatch(&["help"]));
    assert_eq!(status, 0);
    assert_eq!(output.lines().count(), COMMANDS.len());
    for command in COMMANDS {
        let listed = output
            .lines()
            .any(|line| line.contains(command.name) && line.contains(command.desc));
        assert!(listed, "help output missing '{}'", command.name);
    }
}

#[test]
fn test_kerninfo_prints_layout()
{
    let (status, output) = with_monitor(|monitor| monitor.dispatch(&["kerninfo"]));
    assert_eq!(status, 0);
    assert!(output.contains("Special kernel symbols:"));
    assert!(output.contains("entry"));
    // end - entry is 0x80400 bytes, rounded up to KiB
    assert!(output.contains("513KB"));
}

#[test]
fn test_exit_requests_termination()
{
    let (status, _) = with_monitor(|monitor| monitor.dispatch(&["exit"]));
    assert!(status < 0);
}

#[test]
fn test_run_line_whitespace_only_dispatches_nothing()
{
    let (status, output) = with_monitor(|monitor| {
        let mut line = *b"   \t  ";
        monitor.run_line(&mut line)
    });
    assert_eq!(status, 0);
    assert!(output.is_empty());
}

#[test]
fn test_run_line_over_limit_reports_and_skips_dispatch()
{
    // First token is a real command; if parsing were partial the help output
    // would leak through.
    let (status, output) = with_monitor(|monitor| {
        let line = std::iter::once("help".to_string())
            .chain((0..16).map(|i| format!("a{i}")))
            .collect::<Vec<_>>()
            .join(" ");
        let mut buf = line.into_bytes();
        monitor.run_line(&mut buf)
    });
    assert_eq!(status, 0);
    assert!(output.contains("Too many arguments"));
    assert!(!output.contains("backtrace - "));
}

#[test]
fn test_run_line_dispatches_after_tokenizing()
{
    let (status, output) = with_monitor(|monitor| {
        let mut line = *b"  help  ";
        monitor.run_line(&mut line)
    });
    assert_eq!(status, 0);
    assert!(output.contains("help - "));
}

/// Scripted input: `Some` entries become lines, `None` entries simulate "no
/// input this round". The script must end the session itself; the monitor
/// never exits on missing input.
struct ScriptSource
{
    script: Vec<Option<&'static str>>,
    cursor: usize,
}

impl ScriptSource
{
    fn new(script: Vec<Option<&'static str>>) -> Self
    {
        Self { script, cursor: 0 }
    }
}

impl LineSource for ScriptSource
{
    fn read_line(&mut self, _prompt: &str, buf: &mut [u8]) -> Option<usize>
    {
        let entry = self.script.get(self.cursor).copied();
        self.cursor += 1;
        let line = entry.expect("script exhausted before the monitor exited")?;
        let bytes = line.as_bytes();
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        Some(len)
    }
}

#[test]
fn test_run_terminates_only_on_negative_status()
{
    let mut console = BufferConsole::new();
    let memory = BufferMemory::new(Address::ZERO);
    let symbols = SymbolTable::new();
    let trapframe = Trapframe::new(Address::ZERO, Address::ZERO, Address::ZERO, 0);
    let mut monitor = Monitor::new(&mut console, &memory, &symbols, layout(), &trapframe);

    // An unknown command and a missing line both keep the loop alive; only
    // the exit handler's negative status ends the run.
    let mut input = ScriptSource::new(vec![Some("nonsense"), None, Some("help"), Some("exit")]);
    monitor.run(&mut input);

    drop(monitor);
    let output = console.contents();
    assert!(output.contains("Welcome to the kmon kernel monitor!"));
    assert!(output.contains("Unknown command 'nonsense'"));
    assert!(output.contains("help - "));
}
