//! # matlab-rs
//!
//! Typed access to decoded MATLAB Level 5 MAT-file matrix elements.
//!
//! A MAT-file variable is a [`Matrix`]: a class tag ([`MxClass`]), a
//! dimension vector, array flags, and a flat payload of [`Cell`]s. The
//! payload is reinterpreted through class-checked views:
//!
//! - integer classes as `Vec<i64>`
//! - single and double as `Vec<f64>`
//! - char as decoded Unicode text
//! - struct as a field name to nested [`Matrix`] map
//!
//! ## Quick Start
//!
//! ```
//! use matlab_rs::{Cell, Matrix, MxClass, StructFields, Error};
//!
//! let mut fields = StructFields::new();
//! fields.insert("x".to_string(), Matrix::from_vec("", vec![1, 3], vec![-1i16, 0, 1]));
//! fields.insert("label".to_string(), Matrix::char_array("", "sweep"));
//! let s = Matrix::structure_of("s", fields);
//!
//! let x = &s.structure()["x"];
//! assert_eq!(x.int_array(), vec![-1, 0, 1]);
//! assert_eq!(s.structure()["label"].try_string()?, "sweep");
//!
//! // Asking for the wrong view is an error, not a silent coercion.
//! assert!(matches!(
//!     x.try_double_array(),
//!     Err(Error::ClassMismatch { found: MxClass::Int16, .. })
//! ));
//!
//! // Reading past the end is not.
//! assert_eq!(x.element_at(2), Some(&Cell::Int16(1)));
//! assert_eq!(x.element_at(3), None);
//! # Ok::<(), matlab_rs::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `mat`: Load `.mat` files through the `matfile` crate ([`mat::MatFile`])
//! - `ndarray`: Enable `ndarray` views of numeric matrices
//!
//! ## Thread Safety
//!
//! Matrices are plain owned values with no interior mutability; they are
//! `Send + Sync` and may be read from many threads at once.

#![deny(missing_docs)]

// Modules
mod cell;
mod class;
mod data_type;
mod error;
mod flags;
mod matrix;

#[cfg(feature = "mat")]
pub mod mat;

// Public exports
pub use cell::{Cell, Scalar, StructFields};
pub use class::MxClass;
pub use data_type::{DataType, Element};
pub use error::{Error, Result};
pub use flags::ArrayFlags;
pub use matrix::Matrix;

// Conditional re-exports
#[cfg(feature = "ndarray")]
pub use ndarray;
