//! Copies confirmed candidates onto their expected baselines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::BlessError;
use crate::resolver::{ACTUAL_SUFFIX, EXPECT_SUFFIX};

/// The sibling baseline path for a candidate: same directory, terminal
/// actual suffix replaced by the expect suffix. The resolver guarantees
/// every candidate name ends with the actual suffix; a name that does not
/// is returned unchanged.
pub fn expected_path(candidate: &Path) -> PathBuf {
    let name = candidate
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.strip_suffix(ACTUAL_SUFFIX) {
        Some(tag) => candidate.with_file_name(format!("{tag}{EXPECT_SUFFIX}")),
        None => candidate.to_path_buf(),
    }
}

/// Blesses every candidate in order, overwriting (or creating) the
/// expected file with the candidate's bytes. The candidate itself is left
/// untouched. Fail-fast: the first failing copy stops the run and the
/// error names the file.
pub fn bless_all(candidates: &[PathBuf]) -> Result<usize, BlessError> {
    for path in candidates {
        let target = expected_path(path);
        fs::copy(path, &target).map_err(|source| BlessError::Copy {
            path: path.clone(),
            source,
        })?;
    }
    Ok(candidates.len())
}
