//! Hosted harness for the kmon monitor.
//!
//! Fabricates the collaborators a kernel would provide (a memory image
//! holding a frame-pointer chain, a symbol table, a trapframe) and drops the
//! operator into the monitor over stdin/stdout. Useful for poking at the
//! shell and the backtrace output without booting anything.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use kmon_core::console::{Console, LineSource};
use kmon_core::memory::{BufferMemory, WORD_BYTES};
use kmon_core::monitor::Monitor;
use kmon_core::resolve::{FunctionRecord, SymbolTable};
use kmon_core::types::{Address, KernelLayout, Trapframe, ARG_WORDS};
use kmon_utils::{info, init_logging_with_level, LogFormat, LogLevel};

/// Interactive kernel-monitor shell over a canned fault snapshot.
#[derive(Parser, Debug)]
#[command(name = "kmon")]
#[command(version)]
#[command(about = "Interactive kernel-monitor shell over a canned fault snapshot", long_about = None)]
struct Cli
{
    /// Depth of the synthetic call chain behind the snapshot
    #[arg(long, default_value_t = 5)]
    depth: usize,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format (pretty or json)
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

const KERN_BASE: u64 = 0xffff_8000_0000_0000;
const TEXT_BASE: u64 = KERN_BASE + 0x10_0000;
const STACK_TOP: u64 = KERN_BASE + 0x20_0000;
const FRAME_STRIDE: u64 = 0x80;
const FUNCTION_SIZE: u64 = 0x120;

/// Call chain fabricated behind the snapshot, innermost first.
const CALL_CHAIN: &[(&str, &str, u32)] = &[
    ("page_fault_handler", "kern/trap.rs", 121),
    ("trap_dispatch", "kern/trap.rs", 64),
    ("sys_write", "kern/syscall.rs", 203),
    ("syscall_entry", "kern/syscall.rs", 31),
    ("run_user", "kern/env.rs", 377),
    ("schedule", "kern/sched.rs", 88),
    ("bootstrap_main", "kern/init.rs", 19),
];

fn main()
{
    let cli = Cli::parse();

    let level = match cli.log_level.parse::<LogLevel>() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    let format = match cli.log_format.parse::<LogFormat>() {
        Ok(format) => format,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = init_logging_with_level(level, format) {
        eprintln!("Failed to initialize logging: {err}");
        process::exit(1);
    }

    let depth = cli.depth.clamp(1, CALL_CHAIN.len());
    info!("building snapshot with a call chain of depth {depth}");
    let (memory, symbols, trapframe) = build_snapshot(depth);

    let mut console = StdioConsole;
    let mut input = StdinSource::new();
    let mut monitor = Monitor::new(&mut console, &memory, &symbols, layout(), &trapframe);
    monitor.run(&mut input);
}

fn layout() -> KernelLayout
{
    KernelLayout {
        base: Address::new(KERN_BASE),
        entry: Address::new(TEXT_BASE),
        etext: Address::new(TEXT_BASE + 0x4_2000),
        edata: Address::new(TEXT_BASE + 0x5_8000),
        end: Address::new(TEXT_BASE + 0x7_3400),
    }
}

/// Build the memory image and symbol table for a fault `depth` calls deep.
///
/// Frames grow downward from `STACK_TOP`; the innermost frame sits lowest.
/// The outermost frame's return address points past all known functions and
/// its saved frame pointer is zero, the shape a zeroed-frame-pointer entry
/// stub leaves behind.
fn build_snapshot(depth: usize) -> (BufferMemory, SymbolTable, Trapframe)
{
    let frame_pointer = |index: usize| Address::new(STACK_TOP - FRAME_STRIDE * (depth - index) as u64);

    let mut memory = BufferMemory::new(frame_pointer(0));
    let mut symbols = SymbolTable::new();

    for (index, &(name, file, line)) in CALL_CHAIN.iter().enumerate().take(depth) {
        let fp = frame_pointer(index);
        let function_start = Address::new(TEXT_BASE + FUNCTION_SIZE * index as u64);
        let outermost = index + 1 == depth;

        let saved_fp = if outermost { Address::ZERO } else { frame_pointer(index + 1) };
        memory.write_word(fp, saved_fp.value());

        // The outermost return address lands in the unmapped gap past the
        // known functions, terminating the walk.
        let return_address = if outermost {
            Address::new(TEXT_BASE + FUNCTION_SIZE * CALL_CHAIN.len() as u64 + 0x40)
        } else {
            Address::new(TEXT_BASE + FUNCTION_SIZE * (index + 1) as u64 + 0x2e)
        };
        memory.write_word(fp + WORD_BYTES, return_address.value());

        for arg in 0..ARG_WORDS {
            let value = 0x1000 * (index as u64 + 1) + arg as u64;
            memory.write_word(fp + (2 + arg as u64) * WORD_BYTES, value);
        }

        symbols.insert(FunctionRecord::new(name, file, line, function_start, FUNCTION_SIZE));
    }

    // Faulted one instruction into the innermost function, frame pointer
    // anchored at its frame.
    let trapframe = Trapframe::new(
        Address::new(TEXT_BASE + 0x1c),
        frame_pointer(0) - 2 * WORD_BYTES,
        frame_pointer(0),
        0x202,
    );

    (memory, symbols, trapframe)
}

/// Character sink over stdout.
struct StdioConsole;

impl Console for StdioConsole
{
    fn put_char(&mut self, ch: char)
    {
        print!("{ch}");
        if ch == '\n' {
            let _ = io::stdout().flush();
        }
    }
}

/// Line input over stdin.
struct StdinSource
{
    exhausted: bool,
}

impl StdinSource
{
    fn new() -> Self
    {
        Self { exhausted: false }
    }
}

impl LineSource for StdinSource
{
    fn read_line(&mut self, prompt: &str, buf: &mut [u8]) -> Option<usize>
    {
        if self.exhausted {
            return None;
        }

        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                // End of stream. The monitor never exits on missing input, so
                // hand it the exit command once instead of spinning.
                self.exhausted = true;
                let bytes = b"exit";
                buf[..bytes.len()].copy_from_slice(bytes);
                println!();
                Some(bytes.len())
            }
            Ok(_) => {
                let bytes = line.as_bytes();
                let len = bytes.len().min(buf.len());
                buf[..len].copy_from_slice(&bytes[..len]);
                Some(len)
            }
            Err(_) => None,
        }
    }
}
