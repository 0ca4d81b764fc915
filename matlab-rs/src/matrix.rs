//! Matrix element representation and typed data access.
//!
//! A [`Matrix`] is the decoded form of a single `miMATRIX` data element: a
//! class tag, a dimension vector, the array flags, and a flat payload of
//! [`Cell`]s. Typed views reinterpret the payload according to the class.

use std::fmt;

use crate::cell::{Cell, Scalar, StructFields};
use crate::class::MxClass;
use crate::data_type::{DataType, Element};
use crate::error::{Error, Result};
use crate::flags::ArrayFlags;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayD, IxDyn, ShapeBuilder};

/// A decoded MAT-file array.
///
/// Matrices are built once by a decoder and are read-only afterwards. The
/// payload holds one cell per logical element, in the order the file stores
/// them (column-major for MATLAB-written files).
///
/// # Data Access
///
/// Each typed view comes in two forms:
///
/// - `try_*` returns a [`Result`], distinguishing [`Error::ClassMismatch`]
///   from [`Error::CorruptCell`].
/// - The plain form panics on the same conditions. Use it where a wrong
///   class can only mean a bug.
///
/// | Class                    | View                                      |
/// |--------------------------|-------------------------------------------|
/// | int8 … uint64            | [`int_array()`](Self::int_array)          |
/// | single, double           | [`double_array()`](Self::double_array)    |
/// | char                     | [`chars()`](Self::chars)                  |
/// | struct                   | [`structure()`](Self::structure)          |
///
/// # Example
///
/// ```
/// use matlab_rs::{Matrix, MxClass};
///
/// let m = Matrix::from_vec("counts", vec![2, 2], vec![1u8, 2, 3, 255]);
/// assert_eq!(m.class(), MxClass::UInt8);
/// assert_eq!(m.int_array(), vec![1, 2, 3, 255]);
/// assert!(m.element_at(4).is_none());
/// assert!(m.try_double_array().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Variable name (empty for anonymous and nested elements).
    name: String,

    /// Dimensions, at least two in well-formed input.
    dims: Vec<usize>,

    /// Array flags word.
    flags: ArrayFlags,

    /// Declared class of the payload.
    class: MxClass,

    /// Real part, one cell per element.
    values: Vec<Cell>,

    /// Imaginary part of complex numeric arrays.
    imag: Option<Vec<Cell>>,
}

impl Matrix {
    /// Create a matrix from fully decoded parts.
    ///
    /// Nothing is validated here; decoders are trusted to hand over
    /// consistent parts. Call [`validate()`](Self::validate) to check.
    pub fn new(
        name: impl Into<String>,
        dims: Vec<usize>,
        flags: ArrayFlags,
        class: MxClass,
        values: Vec<Cell>,
    ) -> Self {
        Matrix {
            name: name.into(),
            dims,
            flags,
            class,
            values,
            imag: None,
        }
    }

    /// Create a numeric matrix whose class follows from the element type.
    pub fn from_vec<T: Scalar>(name: impl Into<String>, dims: Vec<usize>, data: Vec<T>) -> Self {
        let values = data.into_iter().map(Into::into).collect();
        let flags = ArrayFlags::from_raw(u32::from(T::CLASS.raw()));
        Matrix::new(name, dims, flags, T::CLASS, values)
    }

    /// Create a `1xN` char matrix holding the UTF-16 encoding of `text`.
    pub fn char_array(name: impl Into<String>, text: &str) -> Self {
        let values: Vec<Cell> = text.encode_utf16().map(Cell::Char).collect();
        let dims = vec![1, values.len()];
        let flags = ArrayFlags::from_raw(u32::from(MxClass::Char.raw()));
        Matrix::new(name, dims, flags, MxClass::Char, values)
    }

    /// Create a `1x1` struct matrix.
    pub fn structure_of(name: impl Into<String>, fields: StructFields) -> Self {
        let flags = ArrayFlags::from_raw(u32::from(MxClass::Struct.raw()));
        Matrix::new(name, vec![1, 1], flags, MxClass::Struct, vec![Cell::Struct(fields)])
    }

    /// Attach an imaginary part and set the complex flag.
    pub fn with_imaginary(mut self, imag: Vec<Cell>) -> Self {
        self.flags = self.flags.with(ArrayFlags::COMPLEX);
        self.imag = Some(imag);
        self
    }

    /// Get the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the dimension vector, in source order.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Get the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Get the declared class.
    pub fn class(&self) -> MxClass {
        self.class
    }

    /// Get the array flags.
    pub fn flags(&self) -> ArrayFlags {
        self.flags
    }

    /// Whether the matrix carries an imaginary part.
    pub fn is_complex(&self) -> bool {
        self.imag.is_some()
    }

    /// Number of logical elements: the product of all dimensions.
    ///
    /// A shape whose product overflows `usize` reports `usize::MAX`; no
    /// payload can be that large, so lookups beyond the stored cells still
    /// come back empty.
    pub fn element_count(&self) -> usize {
        self.dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .unwrap_or(usize::MAX)
    }

    /// Whether the shape describes no elements (some dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// The full payload, untyped, in stored order.
    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    /// The imaginary payload of a complex matrix.
    pub fn imaginary_values(&self) -> Option<&[Cell]> {
        self.imag.as_deref()
    }

    /// Look up the cell at a flat index.
    ///
    /// Out-of-range indices return `None` rather than failing, so callers
    /// may read past the end freely. An index is in range when it is below
    /// [`element_count()`](Self::element_count) and a cell is stored there.
    pub fn element_at(&self, index: usize) -> Option<&Cell> {
        if index >= self.element_count() {
            return None;
        }
        self.values.get(index)
    }

    /// Widen every cell of an integer matrix to i64.
    ///
    /// Signed classes are sign-extended and unsigned classes zero-extended;
    /// `uint64` values above `i64::MAX` wrap.
    ///
    /// # Errors
    ///
    /// - [`Error::ClassMismatch`] if the class is not an integer class
    /// - [`Error::CorruptCell`] if a cell's kind differs from the class
    pub fn try_int_array(&self) -> Result<Vec<i64>> {
        if !self.class.is_integer() {
            return Err(Error::class_mismatch("integer", self.class));
        }
        self.collect_cells(Cell::as_i64)
    }

    /// Widen every cell of a single or double matrix to f64.
    ///
    /// Single values widen exactly.
    ///
    /// # Errors
    ///
    /// - [`Error::ClassMismatch`] if the class is not single or double
    /// - [`Error::CorruptCell`] if a cell's kind differs from the class
    pub fn try_double_array(&self) -> Result<Vec<f64>> {
        if !self.class.is_float() {
            return Err(Error::class_mismatch("single or double", self.class));
        }
        self.collect_cells(Cell::as_f64)
    }

    /// Decode a char matrix's UTF-16 code units into Unicode scalars.
    ///
    /// Surrogate pairs combine into one `char`. Each unpaired surrogate
    /// becomes U+FFFD and decoding carries on; malformed text is data, not
    /// an error.
    ///
    /// # Errors
    ///
    /// - [`Error::ClassMismatch`] if the class is not char
    /// - [`Error::CorruptCell`] if a cell is not a char code unit
    pub fn try_chars(&self) -> Result<Vec<char>> {
        if self.class != MxClass::Char {
            return Err(Error::class_mismatch("char", self.class));
        }
        let units = self.collect_cells(Cell::as_char_unit)?;
        Ok(char::decode_utf16(units)
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }

    /// Same as [`try_chars()`](Self::try_chars), collected into a `String`.
    pub fn try_string(&self) -> Result<String> {
        Ok(self.try_chars()?.into_iter().collect())
    }

    /// Get the fields of a struct matrix.
    ///
    /// Only the struct at flat index 0 is returned; further elements of a
    /// struct array are reachable through [`values()`](Self::values).
    ///
    /// # Errors
    ///
    /// - [`Error::ClassMismatch`] if the class is not struct
    /// - [`Error::EmptyStruct`] if there is no element at index 0
    /// - [`Error::CorruptCell`] if index 0 does not hold a struct value
    pub fn try_structure(&self) -> Result<&StructFields> {
        if self.class != MxClass::Struct {
            return Err(Error::class_mismatch("struct", self.class));
        }
        match self.element_at(0) {
            Some(Cell::Struct(fields)) => Ok(fields),
            Some(other) => Err(Error::corrupt_cell(0, self.class, other.kind_name())),
            None => Err(Error::empty_struct(&self.name)),
        }
    }

    /// Panicking form of [`try_int_array()`](Self::try_int_array).
    ///
    /// # Panics
    ///
    /// Panics if the class is not an integer class or a cell is corrupt.
    #[track_caller]
    pub fn int_array(&self) -> Vec<i64> {
        match self.try_int_array() {
            Ok(values) => values,
            Err(e) => contract_violation(e),
        }
    }

    /// Panicking form of [`try_double_array()`](Self::try_double_array).
    ///
    /// # Panics
    ///
    /// Panics if the class is not single or double or a cell is corrupt.
    #[track_caller]
    pub fn double_array(&self) -> Vec<f64> {
        match self.try_double_array() {
            Ok(values) => values,
            Err(e) => contract_violation(e),
        }
    }

    /// Panicking form of [`try_chars()`](Self::try_chars).
    ///
    /// # Panics
    ///
    /// Panics if the class is not char or a cell is corrupt.
    #[track_caller]
    pub fn chars(&self) -> Vec<char> {
        match self.try_chars() {
            Ok(chars) => chars,
            Err(e) => contract_violation(e),
        }
    }

    /// Panicking form of [`try_structure()`](Self::try_structure).
    ///
    /// # Panics
    ///
    /// Panics if the class is not struct or index 0 holds no struct value.
    #[track_caller]
    pub fn structure(&self) -> &StructFields {
        match self.try_structure() {
            Ok(fields) => fields,
            Err(e) => contract_violation(e),
        }
    }

    /// Check the shape and homogeneity invariants.
    ///
    /// Classes without a cell representation (cell, object, sparse,
    /// function handle, opaque) are only checked for shape.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] for fewer than two dimensions
    /// - [`Error::ElementCountMismatch`] if a part's length differs from
    ///   the element count
    /// - [`Error::CorruptCell`] for the first cell not matching the class
    pub fn validate(&self) -> Result<()> {
        if self.dims.len() < 2 {
            return Err(Error::InvalidDimensions {
                dims: self.dims.clone(),
            });
        }

        let expected = self.element_count();
        let parts = std::iter::once(&self.values).chain(self.imag.as_ref());
        for part in parts {
            if part.len() != expected {
                return Err(Error::ElementCountMismatch {
                    expected,
                    found: part.len(),
                });
            }
            if has_cell_repr(self.class) {
                if let Some((index, cell)) =
                    part.iter().enumerate().find(|(_, c)| c.class() != self.class)
                {
                    return Err(Error::corrupt_cell(index, self.class, cell.kind_name()));
                }
            }
        }

        Ok(())
    }

    /// Apply `extract` to every cell, rejecting cells of the wrong kind.
    fn collect_cells<T>(&self, extract: impl Fn(&Cell) -> Option<T>) -> Result<Vec<T>> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, cell)| match extract(cell) {
                Some(v) if cell.class() == self.class => Ok(v),
                _ => Err(Error::corrupt_cell(index, self.class, cell.kind_name())),
            })
            .collect()
    }

    /// Get the real part as an n-dimensional f64 array.
    ///
    /// Requires the `ndarray` feature. The payload is read in column-major
    /// (Fortran) order, as MATLAB stores it.
    #[cfg(feature = "ndarray")]
    pub fn to_array_f64(&self) -> Result<ArrayD<f64>> {
        let data = self.try_double_array()?;
        self.shaped(data)
    }

    /// Get the real part as an n-dimensional i64 array.
    ///
    /// Requires the `ndarray` feature.
    #[cfg(feature = "ndarray")]
    pub fn to_array_i64(&self) -> Result<ArrayD<i64>> {
        let data = self.try_int_array()?;
        self.shaped(data)
    }

    #[cfg(feature = "ndarray")]
    fn shaped<T>(&self, data: Vec<T>) -> Result<ArrayD<T>> {
        ArrayD::from_shape_vec(IxDyn(&self.dims).f(), data)
            .map_err(|e| Error::invalid_format(format!("Array shape error: {}", e)))
    }
}

impl Element for Matrix {
    fn data_type(&self) -> DataType {
        DataType::Matrix
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "<anonymous>"
        } else {
            self.name.as_str()
        };
        let shape: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "{}: {}", name, shape.join("x"))?;
        if self.is_complex() {
            f.write_str(" complex")?;
        }
        write!(f, " {}", self.class)
    }
}

fn has_cell_repr(class: MxClass) -> bool {
    class.is_numeric() || matches!(class, MxClass::Char | MxClass::Struct)
}

#[cold]
#[track_caller]
fn contract_violation(err: Error) -> ! {
    panic!("{}", err)
}
