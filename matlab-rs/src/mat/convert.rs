//! Conversion from `matfile` arrays to matrix elements.

use matfile::{Array as RawArray, NumericData};

use crate::cell::{Cell, Scalar};
use crate::class::MxClass;
use crate::error::Result;
use crate::flags::ArrayFlags;
use crate::matrix::Matrix;

impl Matrix {
    /// Create a Matrix from a decoded `matfile` array.
    ///
    /// The class follows the array's numeric type, the payload keeps the
    /// stored (column-major) order, and complex arrays get the complex flag
    /// plus an imaginary part.
    ///
    /// # Errors
    ///
    /// Returns the [`validate()`](Matrix::validate) error if the decoded
    /// parts are inconsistent with each other.
    pub fn from_matfile_array(array: &RawArray) -> Result<Self> {
        let dims: Vec<usize> = array.size().iter().map(|&x| x as usize).collect();

        let (class, real, imag) = match array.data() {
            NumericData::Double { real, imag } => split(real, imag.as_deref()),
            NumericData::Single { real, imag } => split(real, imag.as_deref()),
            NumericData::Int8 { real, imag } => split(real, imag.as_deref()),
            NumericData::Int16 { real, imag } => split(real, imag.as_deref()),
            NumericData::Int32 { real, imag } => split(real, imag.as_deref()),
            NumericData::Int64 { real, imag } => split(real, imag.as_deref()),
            NumericData::UInt8 { real, imag } => split(real, imag.as_deref()),
            NumericData::UInt16 { real, imag } => split(real, imag.as_deref()),
            NumericData::UInt32 { real, imag } => split(real, imag.as_deref()),
            NumericData::UInt64 { real, imag } => split(real, imag.as_deref()),
        };

        let flags = ArrayFlags::from_raw(u32::from(class.raw()));
        let mut matrix = Matrix::new(array.name(), dims, flags, class, real);
        if let Some(imag) = imag {
            matrix = matrix.with_imaginary(imag);
        }

        matrix.validate()?;
        log::debug!("decoded {}", matrix);

        Ok(matrix)
    }
}

/// Wrap real and optional imaginary data in cells of `T`'s class.
fn split<T: Scalar>(real: &[T], imag: Option<&[T]>) -> (MxClass, Vec<Cell>, Option<Vec<Cell>>) {
    let to_cells = |data: &[T]| data.iter().map(|&v| v.into()).collect::<Vec<Cell>>();
    (T::CLASS, to_cells(real), imag.map(to_cells))
}
