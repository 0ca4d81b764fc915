//! Show variable values command (default mode).

use std::fmt::Display;

use anyhow::{Context, Result};
use colored::Colorize;

use matlab_rs::mat::MatFile;
use matlab_rs::{Cell, Matrix, MxClass};

use crate::cli::Args;
use crate::output;

/// Run the show command.
pub fn run(args: &Args) -> Result<()> {
    output::print_verbose(
        &format!("Opening MAT file: {}", args.input.display()),
        args.verbose,
    );

    let mat = MatFile::open(&args.input)
        .with_context(|| format!("Failed to open MAT file: {}", args.input.display()))?;

    let selected: Vec<&Matrix> = if args.vars.is_empty() {
        mat.iter().collect()
    } else {
        args.vars
            .iter()
            .map(|name| mat.require(name))
            .collect::<matlab_rs::Result<_>>()?
    };

    if selected.is_empty() {
        output::print_warning("No variables found in MAT file");
        return Ok(());
    }

    if !args.quiet {
        output::print_kv("File", &args.input.display().to_string(), 0);
        output::print_kv("Variables", &output::format_number(mat.len()), 0);
    }

    let limit = args.value_limit();

    for matrix in selected {
        output::print_header(&matrix.to_string());

        let lines = render(matrix, limit)
            .with_context(|| format!("Failed to read variable '{}'", matrix.name()))?;
        for line in lines {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// Render a matrix's values through the view matching its class.
fn render(matrix: &Matrix, limit: usize) -> matlab_rs::Result<Vec<String>> {
    let lines = match matrix.class() {
        class if class.is_integer() => {
            let real = preview(&matrix.try_int_array()?, limit);
            let imag = matrix
                .imaginary_values()
                .map(|cells| preview(&cells.iter().filter_map(Cell::as_i64).collect::<Vec<_>>(), limit));
            numeric_lines(real, imag)
        }
        class if class.is_float() => {
            let real = preview(&matrix.try_double_array()?, limit);
            let imag = matrix
                .imaginary_values()
                .map(|cells| preview(&cells.iter().filter_map(Cell::as_f64).collect::<Vec<_>>(), limit));
            numeric_lines(real, imag)
        }
        MxClass::Char => char_lines(matrix, &matrix.try_chars()?, limit),
        MxClass::Struct => struct_lines(matrix)?,
        _ => vec!["(unsupported class)".dimmed().to_string()],
    };

    Ok(lines)
}

fn numeric_lines(real: String, imag: Option<String>) -> Vec<String> {
    match imag {
        Some(imag) => vec![format!("re: {}", real), format!("im: {}", imag)],
        None => vec![real],
    }
}

/// Format up to `limit` values as a bracketed list.
fn preview<T: Display>(values: &[T], limit: usize) -> String {
    let shown: Vec<String> = values.iter().take(limit).map(ToString::to_string).collect();
    let rest = values.len().saturating_sub(limit);

    if rest > 0 {
        format!("[{}, … ({} more)]", shown.join(", "), rest)
    } else {
        format!("[{}]", shown.join(", "))
    }
}

/// Quote up to `limit` characters.
fn quote(chars: &[char], limit: usize) -> String {
    let text: String = chars.iter().take(limit).collect();
    let rest = chars.len().saturating_sub(limit);

    if rest > 0 {
        format!("\"{}\"… ({} more)", text, rest)
    } else {
        format!("\"{}\"", text)
    }
}

/// Char matrices with several rows print one row per line.
///
/// Rows are only split when every code unit decoded to one character;
/// otherwise column-major positions no longer line up with `chars`.
fn char_lines(matrix: &Matrix, chars: &[char], limit: usize) -> Vec<String> {
    match *matrix.dims() {
        [rows, cols] if rows > 1 && chars.len() == rows * cols => (0..rows)
            .map(|r| {
                let row: Vec<char> = (0..cols).map(|c| chars[r + c * rows]).collect();
                quote(&row, limit)
            })
            .collect(),
        _ => vec![quote(chars, limit)],
    }
}

/// One line per field, sorted by name.
fn struct_lines(matrix: &Matrix) -> matlab_rs::Result<Vec<String>> {
    let fields = matrix.try_structure()?;

    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();

    let mut lines: Vec<String> = names
        .into_iter()
        .map(|name| {
            let field = &fields[name.as_str()];
            format!(".{}: {} {}", name, output::format_shape(field.dims()), field.class())
        })
        .collect();

    let count = matrix.element_count();
    if count > 1 {
        lines.push(format!("(first of {} elements)", count).dimmed().to_string());
    }

    Ok(lines)
}
