//! Kernel image layout.

use super::Address;

/// Link-time section addresses of the inspected kernel image.
///
/// Supplied by the embedder (a kernel fills these from its linker symbols, a
/// harness fabricates them) and consumed by the `kerninfo` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelLayout
{
    /// Virtual base the image is linked above; `virt - base` is physical.
    pub base: Address,
    /// First instruction of the kernel.
    pub entry: Address,
    /// End of the text section.
    pub etext: Address,
    /// End of initialized data.
    pub edata: Address,
    /// End of the loaded image.
    pub end: Address,
}

impl KernelLayout
{
    /// Translate a virtual address in the image to its physical counterpart.
    pub fn physical(&self, address: Address) -> Address
    {
        address - self.base.value()
    }

    /// Loaded size of the executable image in KiB, rounded up.
    pub fn footprint_kib(&self) -> u64
    {
        let bytes = self.end.value().saturating_sub(self.entry.value());
        (bytes + 1023) / 1024
    }
}
