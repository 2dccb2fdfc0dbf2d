//! Defines the command-line arguments for the bless CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "bless",
    version,
    about = "Accept test fixture outputs: copy matching `-actual.json.xz` snapshots \
             over their `-expect.json.xz` baselines under ./resources."
)]
pub struct BlessArgs {
    /// Glob pattern for module directory names under the resources root.
    #[arg(required = true)]
    pub mod_glob: String,

    /// Glob pattern for fixture tag prefixes; the `-actual.json.xz` suffix
    /// is appended before matching.
    #[arg(required = true)]
    pub tag_glob: String,
}
