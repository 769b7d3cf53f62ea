//! # Debug Resolution
//!
//! The boundary between the monitor and whatever knows the kernel's symbols.
//!
//! The monitor never parses debug sections itself. Loading symbol and line
//! information out of an executable is the embedder's concern; the core only
//! asks one question, "which function owns this address", through
//! [`DebugResolver`]. A miss is not an error: it is how the unwinder learns it
//! has walked past the outermost known frame.

use crate::types::{Address, DebugInfo};

/// Maps instruction addresses to source-level debug information.
pub trait DebugResolver
{
    /// Resolve `address` to the function that contains it.
    ///
    /// Returns `None` when no known code covers `address`. There are no
    /// partially valid answers: either every field of the returned
    /// [`DebugInfo`] is meaningful or nothing is returned at all.
    fn resolve(&self, address: Address) -> Option<DebugInfo<'_>>;
}

/// One function's entry in a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord
{
    /// Function name, stored with its length (no terminator involved).
    pub name: String,
    /// Source file the function lives in.
    pub file: String,
    /// Line the function starts at.
    pub line: u32,
    /// Address of the function's first instruction.
    pub start: Address,
    /// Size of the function body in bytes.
    pub size: u64,
}

impl FunctionRecord
{
    /// Describe a function covering `start .. start + size`.
    pub fn new(name: impl Into<String>, file: impl Into<String>, line: u32, start: Address, size: u64) -> Self
    {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            start,
            size,
        }
    }

    fn contains(&self, address: Address) -> bool
    {
        match address.offset_from(self.start) {
            Some(offset) => offset < self.size,
            None => false,
        }
    }
}

/// Range-table resolver backed by explicit [`FunctionRecord`]s.
///
/// The reference implementation of [`DebugResolver`]: embedders that already
/// extracted their symbols (from a boot image, a fixture, a linker map) load
/// them here and lend the table to the monitor.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable
{
    functions: Vec<FunctionRecord>,
}

impl SymbolTable
{
    /// Create an empty table.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Add one function record.
    pub fn insert(&mut self, record: FunctionRecord)
    {
        self.functions.push(record);
    }

    /// Number of functions known to the table.
    pub fn len(&self) -> usize
    {
        self.functions.len()
    }

    /// Returns `true` when the table knows no functions.
    pub fn is_empty(&self) -> bool
    {
        self.functions.is_empty()
    }
}

impl DebugResolver for SymbolTable
{
    fn resolve(&self, address: Address) -> Option<DebugInfo<'_>>
    {
        let record = self.functions.iter().find(|function| function.contains(address))?;
        Some(DebugInfo {
            file: &record.file,
            line: record.line,
            function: &record.name,
            function_start: record.start,
        })
    }
}
