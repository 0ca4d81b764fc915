//! MAT data element type enumeration.
//!
//! Every data element in a Level 5 MAT-file starts with a tag naming one of
//! these types. Matrix elements are tagged [`DataType::Matrix`].

use std::fmt;

use crate::error::{Error, Result};

/// MAT data element tag types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DataType {
    /// 8-bit signed integer (miINT8)
    Int8 = 1,

    /// 8-bit unsigned integer (miUINT8)
    UInt8 = 2,

    /// 16-bit signed integer (miINT16)
    Int16 = 3,

    /// 16-bit unsigned integer (miUINT16)
    UInt16 = 4,

    /// 32-bit signed integer (miINT32)
    Int32 = 5,

    /// 32-bit unsigned integer (miUINT32)
    UInt32 = 6,

    /// 32-bit floating point (miSINGLE)
    Single = 7,

    /// 64-bit floating point (miDOUBLE)
    Double = 9,

    /// 64-bit signed integer (miINT64)
    Int64 = 12,

    /// 64-bit unsigned integer (miUINT64)
    UInt64 = 13,

    /// Array element (miMATRIX)
    Matrix = 14,

    /// zlib-compressed element (miCOMPRESSED)
    Compressed = 15,

    /// UTF-8 text (miUTF8)
    Utf8 = 16,

    /// UTF-16 text (miUTF16)
    Utf16 = 17,

    /// UTF-32 text (miUTF32)
    Utf32 = 18,
}

impl DataType {
    /// Create a DataType from its raw tag value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDataType`] for tags the format does not define
    /// (including the reserved values 8, 10 and 11).
    pub fn from_raw(value: u32) -> Result<Self> {
        let ty = match value {
            1 => DataType::Int8,
            2 => DataType::UInt8,
            3 => DataType::Int16,
            4 => DataType::UInt16,
            5 => DataType::Int32,
            6 => DataType::UInt32,
            7 => DataType::Single,
            9 => DataType::Double,
            12 => DataType::Int64,
            13 => DataType::UInt64,
            14 => DataType::Matrix,
            15 => DataType::Compressed,
            16 => DataType::Utf8,
            17 => DataType::Utf16,
            18 => DataType::Utf32,
            other => return Err(Error::UnknownDataType(other)),
        };
        Ok(ty)
    }

    /// Get the raw tag value.
    pub const fn raw(&self) -> u32 {
        *self as u32
    }

    /// Get the size in bytes of a single element of this type.
    ///
    /// # Returns
    ///
    /// The byte size, or 0 for `Matrix` and `Compressed`.
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::Int8 | DataType::UInt8 | DataType::Utf8 => 1,
            DataType::Int16 | DataType::UInt16 | DataType::Utf16 => 2,
            DataType::Int32 | DataType::UInt32 | DataType::Single | DataType::Utf32 => 4,
            DataType::Int64 | DataType::UInt64 | DataType::Double => 8,
            DataType::Matrix | DataType::Compressed => 0,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int8 => "miINT8",
            DataType::UInt8 => "miUINT8",
            DataType::Int16 => "miINT16",
            DataType::UInt16 => "miUINT16",
            DataType::Int32 => "miINT32",
            DataType::UInt32 => "miUINT32",
            DataType::Single => "miSINGLE",
            DataType::Double => "miDOUBLE",
            DataType::Int64 => "miINT64",
            DataType::UInt64 => "miUINT64",
            DataType::Matrix => "miMATRIX",
            DataType::Compressed => "miCOMPRESSED",
            DataType::Utf8 => "miUTF8",
            DataType::Utf16 => "miUTF16",
            DataType::Utf32 => "miUTF32",
        };
        f.write_str(name)
    }
}

/// A decoded MAT-file data element.
///
/// Decoders dispatch on [`data_type()`](Element::data_type) to tell matrix
/// records apart from the other element kinds of the format.
pub trait Element {
    /// The tag type identifying this kind of element.
    fn data_type(&self) -> DataType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(DataType::from_raw(14).unwrap(), DataType::Matrix);
        assert_eq!(DataType::from_raw(9).unwrap(), DataType::Double);
        assert!(matches!(DataType::from_raw(8), Err(Error::UnknownDataType(8))));
        assert!(DataType::from_raw(0xFFFF).is_err());
    }

    #[test]
    fn test_size_bytes() {
        assert_eq!(DataType::Single.size_bytes(), 4);
        assert_eq!(DataType::UInt64.size_bytes(), 8);
        assert_eq!(DataType::Matrix.size_bytes(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DataType::Matrix), "miMATRIX");
        assert_eq!(format!("{}", DataType::Utf16), "miUTF16");
    }
}
