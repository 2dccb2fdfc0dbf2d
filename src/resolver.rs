//! Expands the module and tag globs against the resources root.
//!
//! The fixture layout is strictly two levels: `resources/<module>/<file>`,
//! where each module is a directory grouping related snapshots and each
//! snapshot file is named `<tag>-actual.json.xz` or `<tag>-expect.json.xz`.
//! The resolver matches directory names against the module glob and file
//! names against the tag glob with the actual suffix appended, and returns
//! the candidate files in traversal order.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::errors::BlessError;

/// Suffix of snapshot files produced by a test run.
pub const ACTUAL_SUFFIX: &str = "-actual.json.xz";

/// Suffix of the stored baseline a candidate is blessed onto.
pub const EXPECT_SUFFIX: &str = "-expect.json.xz";

/// Name of the fixture root directory under the invocation root.
pub const RESOURCES_DIR: &str = "resources";

/// Compiled patterns plus the resources root they resolve against.
///
/// Both patterns are compiled up front so invalid glob syntax fails before
/// any traversal happens.
#[derive(Debug)]
pub struct Resolver {
    resources: PathBuf,
    mod_glob: String,
    mod_pattern: Pattern,
    tag_glob: String,
    tag_pattern: Pattern,
}

impl Resolver {
    /// Compiles the two patterns. The actual suffix is appended to the tag
    /// glob before compilation, so `foo` matches `foo-actual.json.xz`.
    pub fn new(root: &Path, mod_glob: &str, tag_glob: &str) -> Result<Self, BlessError> {
        let tag_with_suffix = format!("{tag_glob}{ACTUAL_SUFFIX}");
        Ok(Self {
            resources: root.join(RESOURCES_DIR),
            mod_pattern: compile(mod_glob)?,
            mod_glob: mod_glob.to_string(),
            tag_pattern: compile(&tag_with_suffix)?,
            tag_glob: tag_with_suffix,
        })
    }

    /// The module glob as supplied on the command line.
    pub fn mod_glob(&self) -> &str {
        &self.mod_glob
    }

    /// The tag glob with the actual suffix already appended.
    pub fn tag_glob(&self) -> &str {
        &self.tag_glob
    }

    /// Produces the ordered candidate list.
    ///
    /// Entries are sorted by name within each level so the displayed list is
    /// deterministic; nothing downstream depends on the order. An empty
    /// result is valid and simply yields an empty bless list.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, BlessError> {
        let mut candidates = Vec::new();
        for module in self.module_dirs()? {
            self.collect_actual_files(&module, &mut candidates)?;
        }
        Ok(candidates)
    }

    /// Directories directly under the resources root whose name matches the
    /// module glob. Non-directory entries are skipped; the check is a real
    /// file-type test on each entry.
    fn module_dirs(&self) -> Result<Vec<PathBuf>, BlessError> {
        let mut dirs = Vec::new();
        for entry in one_level(&self.resources) {
            let entry = entry.map_err(|source| BlessError::Walk { source })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if !self.mod_pattern.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }
            dirs.push(entry.into_path());
        }
        Ok(dirs)
    }

    /// Regular files within one module whose name matches the tag glob with
    /// the actual suffix appended.
    fn collect_actual_files(
        &self,
        module: &Path,
        candidates: &mut Vec<PathBuf>,
    ) -> Result<(), BlessError> {
        for entry in one_level(module) {
            let entry = entry.map_err(|source| BlessError::Walk { source })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !self.tag_pattern.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }
            candidates.push(entry.into_path());
        }
        Ok(())
    }
}

fn compile(pattern: &str) -> Result<Pattern, BlessError> {
    Pattern::new(pattern).map_err(|source| BlessError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// One directory level, sorted by file name for deterministic display.
fn one_level(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}
