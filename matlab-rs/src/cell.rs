//! Payload cells of a matrix element.
//!
//! A [`Cell`] is one logical value of a matrix before class-specific
//! interpretation. The variant carries the concrete value; the owning
//! matrix's [`MxClass`] says which variant every cell is expected to be.

use std::collections::HashMap;

use crate::class::MxClass;
use crate::matrix::Matrix;

/// Field name to nested element mapping: the value of one struct.
pub type StructFields = HashMap<String, Matrix>;

/// One scalar unit of a matrix payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// 8-bit signed integer
    Int8(i8),
    /// 16-bit signed integer
    Int16(i16),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 8-bit unsigned integer
    UInt8(u8),
    /// 16-bit unsigned integer
    UInt16(u16),
    /// 32-bit unsigned integer
    UInt32(u32),
    /// 64-bit unsigned integer
    UInt64(u64),
    /// 32-bit float
    Single(f32),
    /// 64-bit float
    Double(f64),
    /// UTF-16 code unit
    Char(u16),
    /// Struct value
    Struct(StructFields),
}

impl Cell {
    /// The array class this cell is homogeneous with.
    pub fn class(&self) -> MxClass {
        match self {
            Cell::Int8(_) => MxClass::Int8,
            Cell::Int16(_) => MxClass::Int16,
            Cell::Int32(_) => MxClass::Int32,
            Cell::Int64(_) => MxClass::Int64,
            Cell::UInt8(_) => MxClass::UInt8,
            Cell::UInt16(_) => MxClass::UInt16,
            Cell::UInt32(_) => MxClass::UInt32,
            Cell::UInt64(_) => MxClass::UInt64,
            Cell::Single(_) => MxClass::Single,
            Cell::Double(_) => MxClass::Double,
            Cell::Char(_) => MxClass::Char,
            Cell::Struct(_) => MxClass::Struct,
        }
    }

    /// Short name of the stored kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Cell::Int8(_) => "int8",
            Cell::Int16(_) => "int16",
            Cell::Int32(_) => "int32",
            Cell::Int64(_) => "int64",
            Cell::UInt8(_) => "uint8",
            Cell::UInt16(_) => "uint16",
            Cell::UInt32(_) => "uint32",
            Cell::UInt64(_) => "uint64",
            Cell::Single(_) => "single",
            Cell::Double(_) => "double",
            Cell::Char(_) => "char",
            Cell::Struct(_) => "struct",
        }
    }

    /// Widen an integer cell to i64, sign- or zero-extending per its width.
    ///
    /// Returns `None` for non-integer cells. `UInt64` values above
    /// `i64::MAX` wrap, matching a two's complement reinterpretation.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Cell::Int8(v) => Some(i64::from(v)),
            Cell::Int16(v) => Some(i64::from(v)),
            Cell::Int32(v) => Some(i64::from(v)),
            Cell::Int64(v) => Some(v),
            Cell::UInt8(v) => Some(i64::from(v)),
            Cell::UInt16(v) => Some(i64::from(v)),
            Cell::UInt32(v) => Some(i64::from(v)),
            Cell::UInt64(v) => Some(v as i64),
            _ => None,
        }
    }

    /// Widen a float cell to f64. Returns `None` for non-float cells.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Cell::Single(v) => Some(f64::from(v)),
            Cell::Double(v) => Some(v),
            _ => None,
        }
    }

    /// The UTF-16 code unit of a char cell.
    pub fn as_char_unit(&self) -> Option<u16> {
        match *self {
            Cell::Char(u) => Some(u),
            _ => None,
        }
    }

    /// The field mapping of a struct cell.
    pub fn as_struct(&self) -> Option<&StructFields> {
        match self {
            Cell::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Plain scalar types with a fixed numeric array class.
pub trait Scalar: Copy + Into<Cell> {
    /// The class of a matrix holding values of this type.
    const CLASS: MxClass;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::$variant(value)
                }
            }

            impl Scalar for $ty {
                const CLASS: MxClass = MxClass::$variant;
            }
        )*
    };
}

impl_scalar! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Single,
    f64 => Double,
}

impl From<StructFields> for Cell {
    fn from(fields: StructFields) -> Self {
        Cell::Struct(fields)
    }
}
