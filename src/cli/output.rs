//! Handles user-facing output for the CLI.
//!
//! Centralizing output logic here keeps the command flow in `cli::run`
//! free of formatting concerns.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::BlessError;

/// Echoes the resolved patterns back to the operator.
pub fn print_globs(mod_glob: &str, tag_glob: &str) {
    println!("Mod Glob: \"{mod_glob}\", Tag Glob: \"{tag_glob}\"");
}

/// Prints the abort notice after a declined confirmation.
pub fn print_aborted() {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("Aborted");
    let _ = stdout.reset();
}

/// Renders a fatal error through miette's rich report formatting.
pub fn print_error(error: BlessError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
