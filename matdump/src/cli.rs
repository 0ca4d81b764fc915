//! Command-line argument definitions using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Inspect the variables of MATLAB/Octave .mat files.
///
/// matdump prints each variable's name, shape and class, followed by its
/// values: integers and floats as numbers, char arrays as text, and structs
/// as their fields.
#[derive(Parser, Debug)]
#[command(name = "matdump")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Input .mat file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    // ========================================================================
    // Mode Selection
    // ========================================================================
    /// List variables (name, shape, class) without their values
    #[arg(short, long)]
    pub list: bool,

    // ========================================================================
    // Variable Selection
    // ========================================================================
    /// Only show the named variable (repeatable)
    #[arg(short = 'n', long = "var", value_name = "NAME")]
    pub vars: Vec<String>,

    /// Maximum number of values printed per variable (0 = no limit)
    #[arg(short, long, value_name = "N", default_value = "16")]
    pub max_values: usize,

    // ========================================================================
    // Output Control
    // ========================================================================
    /// Show detailed progress and decoder diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!("Input file not found: {}", self.input.display()));
        }

        if self.quiet && self.verbose {
            return Err("Cannot use both --quiet and --verbose".to_string());
        }

        if self.list && !self.vars.is_empty() {
            return Err("--var has no effect with --list".to_string());
        }

        Ok(())
    }

    /// The value limit, with 0 mapped to no limit.
    pub fn value_limit(&self) -> usize {
        if self.max_values == 0 {
            usize::MAX
        } else {
            self.max_values
        }
    }
}

const EXAMPLES: &str = "\
EXAMPLES:
    # List the variables in a file
    matdump analysis.mat --list

    # Print every variable
    matdump analysis.mat

    # Print two variables in full
    matdump analysis.mat --var time --var partials --max-values 0
";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("matdump").chain(argv.iter().copied()))
    }

    #[test]
    fn test_parse_vars() {
        let a = args(&["in.mat", "--var", "x", "-n", "y", "-m", "4"]);
        assert_eq!(a.vars, vec!["x", "y"]);
        assert_eq!(a.max_values, 4);
        assert!(!a.list);
    }

    #[test]
    fn test_value_limit() {
        assert_eq!(args(&["in.mat"]).value_limit(), 16);
        assert_eq!(args(&["in.mat", "-m", "0"]).value_limit(), usize::MAX);
    }

    #[test]
    fn test_validate_missing_input() {
        let err = args(&["/nonexistent/in.mat"]).validate().unwrap_err();
        assert!(err.contains("not found"));
    }
}
