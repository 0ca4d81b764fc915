//! List variables command (--list mode).

use anyhow::{Context, Result};
use colored::Colorize;

use matlab_rs::mat::MatFile;
use matlab_rs::Matrix;

use crate::cli::Args;
use crate::output;

/// Run the list command.
pub fn run(args: &Args) -> Result<()> {
    output::print_verbose(
        &format!("Opening MAT file: {}", args.input.display()),
        args.verbose,
    );

    let mat = MatFile::open(&args.input)
        .with_context(|| format!("Failed to open MAT file: {}", args.input.display()))?;

    if mat.is_empty() {
        output::print_warning("No variables found in MAT file");
        return Ok(());
    }

    // Print header
    output::print_info(
        &format!("{}\n", format!("Variables in '{}':", args.input.display()).bold()),
        args.quiet,
    );

    // Calculate column widths
    let max_name = mat.variable_names().map(str::len).max().unwrap_or(4).max(4);

    // Print header row
    println!(
        "  {:<width$}  {:>14}  {:>10}  {}",
        "Name", "Shape", "Class", "Notes",
        width = max_name
    );
    println!(
        "  {:-<width$}  {:->14}  {:->10}  -----",
        "", "", "",
        width = max_name
    );

    // Print each variable, in file order
    for matrix in mat.iter() {
        let shape = output::format_shape(matrix.dims());
        let notes: Vec<String> = notes(matrix)
            .into_iter()
            .map(|note| match note {
                "empty" => note.dimmed().to_string(),
                _ => note.cyan().to_string(),
            })
            .collect();

        println!(
            "  {:<width$}  {:>14}  {:>10}  {}",
            matrix.name(),
            shape,
            matrix.class().to_string(),
            notes.join(", "),
            width = max_name
        );
    }

    // Print summary
    output::print_info(
        &format!("\n{} variables found", output::format_number(mat.len())),
        args.quiet,
    );

    Ok(())
}

/// Notes column entries for a variable.
fn notes(matrix: &Matrix) -> Vec<&'static str> {
    let flags = matrix.flags();
    let mut notes = Vec::new();

    if matrix.is_complex() {
        notes.push("complex");
    }

    if flags.is_global() {
        notes.push("global");
    }

    if flags.is_logical() {
        notes.push("logical");
    }

    if matrix.is_empty() {
        notes.push("empty");
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use matlab_rs::{ArrayFlags, Cell, MxClass};

    #[test]
    fn test_notes_complex() {
        let z = Matrix::from_vec("z", vec![1, 1], vec![1.0f64])
            .with_imaginary(vec![Cell::Double(2.0)]);
        assert_eq!(notes(&z), vec!["complex"]);
    }

    #[test]
    fn test_notes_flags_and_empty() {
        let flags = ArrayFlags::from_raw(u32::from(MxClass::UInt8.raw()))
            .with(ArrayFlags::GLOBAL | ArrayFlags::LOGICAL);
        let m = Matrix::new("g", vec![0, 1], flags, MxClass::UInt8, Vec::new());
        assert_eq!(notes(&m), vec!["global", "logical", "empty"]);

        let plain = Matrix::from_vec("p", vec![1, 2], vec![1i16, 2]);
        assert!(notes(&plain).is_empty());
    }
}
