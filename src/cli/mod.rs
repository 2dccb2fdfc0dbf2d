//! The bless command-line interface.
//!
//! This module is the entry point for the CLI and orchestrates the core
//! library functions in one linear pass:
//! resolve -> report -> confirm -> apply (or abort).

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use clap::Parser;

use crate::apply::bless_all;
use crate::cli::args::BlessArgs;
use crate::cli::output::{print_aborted, print_error, print_globs};
use crate::confirm::{confirm, report_candidates};
use crate::errors::BlessError;
use crate::resolver::Resolver;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = BlessArgs::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = bless_session(&args, &mut stdin.lock(), &mut stdout.lock()) {
        print_error(e);
        process::exit(1);
    }
}

/// One full session against the resources tree under the current directory.
///
/// The whole flow is strictly linear; the single confirmation prompt is the
/// only gate, and declining it leaves the filesystem untouched.
fn bless_session(
    args: &BlessArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), BlessError> {
    let root = Path::new(".");
    let resolver = Resolver::new(root, &args.mod_glob, &args.tag_glob)?;
    print_globs(resolver.mod_glob(), resolver.tag_glob());

    let candidates = resolver.resolve()?;
    report_candidates(out, root, &candidates)?;

    if confirm(input, out)? {
        bless_all(&candidates)?;
    } else {
        print_aborted();
    }
    Ok(())
}
