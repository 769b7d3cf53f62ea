//! Memory address type.

use std::fmt;
use std::ops::{Add, Sub};

/// Strongly typed memory address
///
/// A wrapper around `u64` that keeps addresses from being mixed up with other
/// numeric values (word contents, sizes, line numbers). The monitor moves a
/// lot of raw words around; the ones that are meant to be dereferenced or
/// resolved are tagged with this type.
///
/// Arithmetic wraps. Frame-pointer chains come out of untrusted memory, and a
/// wrapped offset on a garbage chain must surface as a bad read or a failed
/// resolution, not as an arithmetic panic inside the walker.
///
/// ## Example
///
/// ```rust
/// use kmon_core::types::Address;
///
/// let addr = Address::new(0x1000);
/// assert_eq!((addr + 0x100).value(), 0x1100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    ///
    /// Conventionally stored as the saved frame pointer of the outermost
    /// frame by kernel entry stubs.
    pub const ZERO: Self = Address(0);

    /// Create a new address from a `u64` value
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Get the raw `u64` value of this address
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Returns `true` for the null address
    pub const fn is_null(self) -> bool
    {
        self.0 == 0
    }

    /// Offset of this address from `base`, if this address is not below it
    pub const fn offset_from(self, base: Self) -> Option<u64>
    {
        self.0.checked_sub(base.0)
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}

impl Add<u64> for Address
{
    type Output = Address;

    fn add(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_add(rhs))
    }
}

impl Sub<u64> for Address
{
    type Output = Address;

    fn sub(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_sub(rhs))
    }
}
