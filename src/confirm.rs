//! The reporting and confirmation step.
//!
//! Writers and readers are generic so tests can drive the prompt with
//! in-memory buffers; the CLI passes locked stdin/stdout.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::errors::BlessError;

/// Writes one candidate per line, relative to the invocation root for
/// readability. Paths outside the root are printed as-is.
pub fn report_candidates(
    out: &mut impl Write,
    root: &Path,
    candidates: &[PathBuf],
) -> Result<(), BlessError> {
    writeln!(out, "Bless?").map_err(prompt_err)?;
    for path in candidates {
        let shown = path.strip_prefix(root).unwrap_or(path);
        writeln!(out, "{}", shown.display()).map_err(prompt_err)?;
    }
    Ok(())
}

/// Prompts `[y/N]` and reads exactly one line.
///
/// Only a trimmed `y` or `Y` confirms; anything else, including an empty
/// line or EOF, declines.
pub fn confirm(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool, BlessError> {
    write!(out, "[y/N] ").map_err(prompt_err)?;
    out.flush().map_err(prompt_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(prompt_err)?;
    let answer = line.trim();
    Ok(answer == "y" || answer == "Y")
}

fn prompt_err(source: std::io::Error) -> BlessError {
    BlessError::Prompt { source }
}
