//! Error types for MAT element access.
//!
//! This module provides the [`Error`] enum covering every way a typed view of
//! a [`Matrix`](crate::Matrix) can fail, along with a convenient [`Result`]
//! type alias.
//!
//! Two failure kinds matter most to callers:
//!
//! - [`Error::ClassMismatch`]: an accessor was called on an element whose
//!   declared class it does not handle (a caller bug).
//! - [`Error::CorruptCell`]: the declared class is right but a stored cell
//!   disagrees with it (a decoder bug).

use std::io;

use thiserror::Error;

use crate::class::MxClass;

/// Result type alias for MAT element operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interpreting MAT elements.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A typed accessor was called on an element of the wrong class.
    #[error("Class mismatch: expected {expected}, found {found}")]
    ClassMismatch {
        /// Description of the classes the accessor accepts.
        expected: &'static str,
        /// The element's declared class.
        found: MxClass,
    },

    /// A payload cell does not match the element's declared class.
    #[error("Corrupt cell at index {index}: {class} element holds a {found} value")]
    CorruptCell {
        /// Flat index of the offending cell.
        index: usize,
        /// The element's declared class.
        class: MxClass,
        /// Kind of value actually stored in the cell.
        found: &'static str,
    },

    /// A struct element has no value at index 0.
    #[error("Struct element '{name}' has no value")]
    EmptyStruct {
        /// Name of the struct element.
        name: String,
    },

    /// Raw array class code not defined by the format.
    #[error("Unknown array class: {0}")]
    UnknownClass(u8),

    /// Raw data type tag not defined by the format.
    #[error("Unknown data type: {0}")]
    UnknownDataType(u32),

    /// The dimension vector has fewer than two entries.
    #[error("Invalid dimensions: {dims:?} (at least 2 required)")]
    InvalidDimensions {
        /// The offending dimension vector.
        dims: Vec<usize>,
    },

    /// The number of stored cells differs from the product of dimensions.
    #[error("Element count mismatch: dimensions describe {expected} elements, found {found}")]
    ElementCountMismatch {
        /// Product of the dimension vector.
        expected: usize,
        /// Number of cells actually stored.
        found: usize,
    },

    /// The input is not something this crate can represent.
    #[error("Invalid MAT format: {reason}")]
    InvalidFormat {
        /// Description of the format error.
        reason: String,
    },
}

impl Error {
    /// Create a ClassMismatch error.
    pub const fn class_mismatch(expected: &'static str, found: MxClass) -> Self {
        Self::ClassMismatch { expected, found }
    }

    /// Create a CorruptCell error.
    pub const fn corrupt_cell(index: usize, class: MxClass, found: &'static str) -> Self {
        Self::CorruptCell {
            index,
            class,
            found,
        }
    }

    /// Create an EmptyStruct error for the named element.
    pub fn empty_struct(name: impl Into<String>) -> Self {
        Self::EmptyStruct { name: name.into() }
    }

    /// Create an InvalidFormat error with the given reason.
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Whether this error reports a decoder-side representation defect
    /// rather than a caller asking for the wrong view.
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptCell { .. } | Self::ElementCountMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::class_mismatch("integer", MxClass::Double);
        assert_eq!(err.to_string(), "Class mismatch: expected integer, found double");

        let err = Error::corrupt_cell(3, MxClass::Int16, "uint8");
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("int16"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_is_corruption() {
        assert!(Error::corrupt_cell(0, MxClass::Char, "double").is_corruption());
        assert!(!Error::class_mismatch("char", MxClass::Double).is_corruption());
        assert!(!Error::UnknownClass(99).is_corruption());
    }
}
