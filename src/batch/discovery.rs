//! Candidate enumeration for the two page families of the site:
//! numbered blog pages and every page of a directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PatchError, Result};

/// A file the batch will try to patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name as shown in status lines.
    pub name: String,
    pub path: PathBuf,
    /// Check existence before reading and report a missing file as such.
    pub expect_existing: bool,
}

/// Zero-padded sequence pages `first..=last`, e.g. `0014.html`.
///
/// Candidates are produced lazily, one per page number.
pub fn sequence_candidates(
    dir: &Path,
    first: u32,
    last: u32,
) -> impl Iterator<Item = Candidate> + '_ {
    (first..=last).map(move |n| {
        let name = format!("{n:04}.html");
        Candidate {
            path: dir.join(&name),
            name,
            expect_existing: true,
        }
    })
}

/// Every file directly inside `dir` named `*.{extension}`, sorted by name.
///
/// Symbolic links count as files unless they point at a directory; a dangling
/// link is kept so the batch reports it instead of dropping it silently.
pub fn extension_candidates(dir: &Path, extension: &str) -> Result<Vec<Candidate>> {
    if !dir.is_dir() {
        return Err(PatchError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut candidates = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            PatchError::io(path, e.into())
        })?;
        let file_type = entry.file_type();
        let is_page = file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir());
        if !is_page {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&suffix) {
            candidates.push(Candidate {
                name,
                path: entry.into_path(),
                expect_existing: false,
            });
        }
    }

    Ok(candidates)
}
