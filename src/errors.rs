//! The unified, `miette`-based diagnostic type for the bless tool.
//!
//! Every failure the tool can hit is one of these variants; all of them are
//! fatal. There is no internal recovery: the CLI renders the diagnostic and
//! exits, and the operator re-runs after fixing the cause. An empty match
//! list is not an error and never reaches this type.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum BlessError {
    /// A glob pattern failed to compile. Raised before any traversal.
    #[error("invalid glob pattern \"{pattern}\"")]
    #[diagnostic(
        code(bless::pattern),
        help("glob syntax supports `*`, `?`, and `[...]` character classes")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Traversal of the resources tree failed (missing root, permissions).
    #[error("failed to read the resources directory")]
    #[diagnostic(
        code(bless::walk),
        help("bless expects a `resources` directory under the current directory")
    )]
    Walk {
        #[source]
        source: walkdir::Error,
    },

    /// A copy failed. Processing stops at the first failing file.
    #[error("failed to bless {}", path.display())]
    #[diagnostic(
        code(bless::copy),
        help("earlier copies are already applied; re-running after a fix is safe")
    )]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stdin/stdout failed while prompting for confirmation.
    #[error("failed to read confirmation")]
    #[diagnostic(code(bless::prompt))]
    Prompt {
        #[source]
        source: io::Error,
    },
}
