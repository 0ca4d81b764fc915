//! MAT-file loading through the `matfile` crate.
//!
//! This module adapts the arrays decoded by `matfile` into [`Matrix`]
//! elements. Tag framing, byte order and zlib decompression are handled
//! entirely by `matfile`; this side only maps classes and payloads.
//!
//! Requires the `mat` feature.
//!
//! # Example
//!
//! ```no_run
//! use matlab_rs::mat::MatFile;
//!
//! let mat = MatFile::open("analysis.mat")?;
//! for matrix in mat.iter() {
//!     println!("{}", matrix);
//! }
//!
//! let freqs = mat.require("frequencies")?.double_array();
//! println!("{} frequencies", freqs.len());
//! # Ok::<(), matlab_rs::Error>(())
//! ```
//!
//! # Supported Arrays
//!
//! - Level 5 MAT files (MATLAB v5, v6, v7), including v7 compression
//! - Numeric arrays: double, single, int8/16/64, uint8/16/32/64
//! - Complex numeric arrays (imaginary part kept alongside the real part)
//!
//! # Known Limitations
//!
//! `matfile` 0.4 reads int32 arrays as uint32 and then rejects their
//! `miINT32` payload. A file holding any int32 variable fails to parse as a
//! whole with [`Error::InvalidFormat`](crate::Error::InvalidFormat); the
//! other variables of that file are not recovered.
//!
//! Char, struct and cell arrays are not produced by `matfile`; build those
//! elements with the [`Matrix`] constructors instead.
//!
//! [`Matrix`]: crate::Matrix

mod convert;
mod file;

pub use file::MatFile;
