//! MAT array class enumeration.
//!
//! Every matrix element declares a class describing how its payload should
//! be interpreted. The class is the authoritative tag for all typed views.

use std::fmt;

use crate::error::{Error, Result};

/// Array classes defined by the Level 5 MAT-file format.
///
/// The discriminants are the on-disk class codes stored in the low byte of
/// the array flags subelement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MxClass {
    /// Cell array
    Cell = 1,

    /// Structure
    Struct = 2,

    /// Object
    Object = 3,

    /// Character array (UTF-16 code units)
    Char = 4,

    /// Sparse array
    Sparse = 5,

    /// 64-bit floating point (f64)
    Double = 6,

    /// 32-bit floating point (f32)
    Single = 7,

    /// 8-bit signed integer (i8)
    Int8 = 8,

    /// 8-bit unsigned integer (u8)
    UInt8 = 9,

    /// 16-bit signed integer (i16)
    Int16 = 10,

    /// 16-bit unsigned integer (u16)
    UInt16 = 11,

    /// 32-bit signed integer (i32)
    Int32 = 12,

    /// 32-bit unsigned integer (u32)
    UInt32 = 13,

    /// 64-bit signed integer (i64)
    Int64 = 14,

    /// 64-bit unsigned integer (u64)
    UInt64 = 15,

    /// Function handle
    Function = 16,

    /// Opaque (MCOS object storage)
    Opaque = 17,
}

impl MxClass {
    /// Create an MxClass from its raw class code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownClass`] for codes the format does not define.
    pub fn from_raw(value: u8) -> Result<Self> {
        let class = match value {
            1 => MxClass::Cell,
            2 => MxClass::Struct,
            3 => MxClass::Object,
            4 => MxClass::Char,
            5 => MxClass::Sparse,
            6 => MxClass::Double,
            7 => MxClass::Single,
            8 => MxClass::Int8,
            9 => MxClass::UInt8,
            10 => MxClass::Int16,
            11 => MxClass::UInt16,
            12 => MxClass::Int32,
            13 => MxClass::UInt32,
            14 => MxClass::Int64,
            15 => MxClass::UInt64,
            16 => MxClass::Function,
            17 => MxClass::Opaque,
            other => return Err(Error::UnknownClass(other)),
        };
        Ok(class)
    }

    /// Get the raw class code.
    pub const fn raw(&self) -> u8 {
        *self as u8
    }

    /// Get the size in bytes of a single numeric element of this class.
    ///
    /// # Returns
    ///
    /// The byte size, or 0 for non-numeric classes. Char reports 2 since its
    /// cells are UTF-16 code units.
    pub const fn size_bytes(&self) -> usize {
        match self {
            MxClass::Int8 | MxClass::UInt8 => 1,
            MxClass::Int16 | MxClass::UInt16 | MxClass::Char => 2,
            MxClass::Int32 | MxClass::UInt32 | MxClass::Single => 4,
            MxClass::Int64 | MxClass::UInt64 | MxClass::Double => 8,
            MxClass::Cell
            | MxClass::Struct
            | MxClass::Object
            | MxClass::Sparse
            | MxClass::Function
            | MxClass::Opaque => 0,
        }
    }

    /// Check if this class is one of the eight integer classes.
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            MxClass::Int8
                | MxClass::Int16
                | MxClass::Int32
                | MxClass::Int64
                | MxClass::UInt8
                | MxClass::UInt16
                | MxClass::UInt32
                | MxClass::UInt64
        )
    }

    /// Check if this class is a signed integer class.
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            MxClass::Int8 | MxClass::Int16 | MxClass::Int32 | MxClass::Int64
        )
    }

    /// Check if this class is a floating-point class.
    pub const fn is_float(&self) -> bool {
        matches!(self, MxClass::Single | MxClass::Double)
    }

    /// Check if this class holds plain numbers (integer or float).
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl TryFrom<u8> for MxClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        MxClass::from_raw(value)
    }
}

impl fmt::Display for MxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MxClass::Cell => "cell",
            MxClass::Struct => "struct",
            MxClass::Object => "object",
            MxClass::Char => "char",
            MxClass::Sparse => "sparse",
            MxClass::Double => "double",
            MxClass::Single => "single",
            MxClass::Int8 => "int8",
            MxClass::UInt8 => "uint8",
            MxClass::Int16 => "int16",
            MxClass::UInt16 => "uint16",
            MxClass::Int32 => "int32",
            MxClass::UInt32 => "uint32",
            MxClass::Int64 => "int64",
            MxClass::UInt64 => "uint64",
            MxClass::Function => "function_handle",
            MxClass::Opaque => "opaque",
        };
        f.write_str(name)
    }
}
