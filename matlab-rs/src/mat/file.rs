//! MAT file loading and variable lookup.
//!
//! This module provides [`MatFile`], a wrapper around the matfile crate
//! that holds every variable of a file as a [`Matrix`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use matfile::MatFile as RawMatFile;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// A loaded MAT file.
///
/// Variables keep the order in which the file stores them.
///
/// # Example
///
/// ```no_run
/// use matlab_rs::mat::MatFile;
///
/// let mat = MatFile::open("data.mat")?;
///
/// for name in mat.variable_names() {
///     println!("Variable: {}", name);
/// }
///
/// if let Some(counts) = mat.get("counts") {
///     println!("Counts: {:?}", counts.try_int_array()?);
/// }
/// # Ok::<(), matlab_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatFile {
    /// Decoded variables, in file order.
    variables: Vec<Matrix>,

    /// Source path (for error messages).
    path: String,
}

impl MatFile {
    /// Open and parse a MAT file.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::InvalidFormat`] if the file is not a valid MAT file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open MAT file '{}': {}", path_str, e),
            ))
        })?;

        Self::parse_with_path(BufReader::new(file), path_str)
    }

    /// Parse a MAT file from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the data is not a valid MAT file.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        Self::parse_with_path(reader, "<memory>".to_string())
    }

    fn parse_with_path<R: Read>(reader: R, path: String) -> Result<Self> {
        let raw = RawMatFile::parse(reader).map_err(|e| {
            Error::invalid_format(format!("Failed to parse MAT file '{}': {}", path, e))
        })?;

        let mut variables = Vec::with_capacity(raw.arrays().len());
        for array in raw.arrays() {
            match Matrix::from_matfile_array(array) {
                Ok(matrix) => variables.push(matrix),
                Err(e) => {
                    log::warn!("Skipping variable '{}' in '{}': {}", array.name(), path, e);
                }
            }
        }

        log::debug!("loaded {} variables from '{}'", variables.len(), path);

        Ok(MatFile { variables, path })
    }

    /// Get the names of all variables, in file order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(Matrix::name)
    }

    /// Get a variable by name.
    pub fn get(&self, name: &str) -> Option<&Matrix> {
        self.variables.iter().find(|m| m.name() == name)
    }

    /// Get a variable by name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the variable doesn't exist.
    pub fn require(&self, name: &str) -> Result<&Matrix> {
        self.get(name).ok_or_else(|| {
            Error::invalid_format(format!(
                "Variable '{}' not found in MAT file '{}'",
                name, self.path
            ))
        })
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the file holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Get the file path (`<memory>` for parsed readers).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> std::slice::Iter<'_, Matrix> {
        self.variables.iter()
    }
}

impl IntoIterator for MatFile {
    type Item = Matrix;
    type IntoIter = std::vec::IntoIter<Matrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatFile {
    type Item = &'a Matrix;
    type IntoIter = std::slice::Iter<'a, Matrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent() {
        let result = MatFile::open("/nonexistent/file.mat");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_garbage() {
        let result = MatFile::parse(&b"not a mat file"[..]);
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }
}
