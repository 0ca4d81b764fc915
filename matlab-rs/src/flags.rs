//! Array flags carried by matrix elements.

use std::fmt;

/// The raw array flags word of a matrix element.
///
/// Flags are carried through unchanged from the decoder. The helpers below
/// only read the bits the format documents; nothing in this crate changes
/// behavior based on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayFlags(u32);

impl ArrayFlags {
    /// Complex flag bit.
    pub const COMPLEX: u32 = 0x0800;

    /// Global flag bit.
    pub const GLOBAL: u32 = 0x0400;

    /// Logical flag bit.
    pub const LOGICAL: u32 = 0x0200;

    const CLASS_MASK: u32 = 0x00FF;

    /// Wrap a raw flags word.
    pub const fn from_raw(raw: u32) -> Self {
        ArrayFlags(raw)
    }

    /// Get the raw flags word.
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Whether the array has an imaginary part.
    pub const fn is_complex(&self) -> bool {
        self.0 & Self::COMPLEX != 0
    }

    /// Whether the variable was declared global.
    pub const fn is_global(&self) -> bool {
        self.0 & Self::GLOBAL != 0
    }

    /// Whether the array is used as a logical (boolean) array.
    pub const fn is_logical(&self) -> bool {
        self.0 & Self::LOGICAL != 0
    }

    /// The class code stored in the low byte, unvalidated.
    pub const fn class_code(&self) -> u8 {
        (self.0 & Self::CLASS_MASK) as u8
    }

    /// Return a copy with the given bits set.
    pub const fn with(self, bits: u32) -> Self {
        ArrayFlags(self.0 | bits)
    }
}

impl From<u32> for ArrayFlags {
    fn from(raw: u32) -> Self {
        ArrayFlags(raw)
    }
}

impl fmt::Display for ArrayFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
