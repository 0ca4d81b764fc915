//! matdump - Inspect the variables of MATLAB/Octave .mat files.
//!
//! This tool loads a MAT file and prints each variable's shape and class,
//! or its values read through the class-checked accessors of `matlab-rs`.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::Args;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(&args);

    // Run the appropriate command
    if let Err(e) = run(args) {
        output::print_error(&e);
        std::process::exit(1);
    }
}

/// Route library diagnostics to stderr; `RUST_LOG` takes precedence.
fn init_logging(args: &Args) {
    let default = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Main dispatch function.
fn run(args: Args) -> Result<()> {
    args.validate().map_err(|e| anyhow::anyhow!("{}", e))?;

    if args.list {
        commands::list::run(&args)
    } else {
        commands::show::run(&args)
    }
}
