pub mod discovery;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{PatchError, Result};
use crate::patch::{self, AnchorPattern, Fragment};

pub use discovery::Candidate;

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Updated,
    Unchanged,
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub status: FileStatus,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FileStatus::Updated => write!(f, "{}: Updated", self.name),
            FileStatus::Unchanged => write!(f, "{}: No changes needed", self.name),
            FileStatus::NotFound => write!(f, "File not found: {}", self.name),
            FileStatus::Failed(cause) => write!(f, "Error processing {}: {cause}", self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.missing + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    fn record(&mut self, status: &FileStatus) {
        match status {
            FileStatus::Updated => self.updated += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::NotFound => self.missing += 1,
            FileStatus::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        write!(
            f,
            "Processed {total} file{}: {} updated, {} unchanged",
            if total == 1 { "" } else { "s" },
            self.updated,
            self.unchanged,
        )?;
        if self.missing > 0 {
            write!(f, ", {} not found", self.missing)?;
        }
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        Ok(())
    }
}

/// Patch a single file in place. Returns whether it was rewritten.
///
/// The file is only written when the inserter reports a change, so untouched
/// files keep their contents and modification time. A failed write leaves the
/// original page intact.
pub fn patch_file(path: &Path, pattern: &AnchorPattern, fragment: &Fragment) -> Result<bool> {
    let html = fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
    let edit = patch::insert_fragment(&html, pattern, fragment);
    if !edit.changed {
        if fragment.is_present_in(&html) {
            tracing::debug!("{} already has the entry", path.display());
        }
        return Ok(false);
    }

    tracing::debug!(
        "Inserting into {} at {} anchor(s)",
        path.display(),
        pattern.count_matches(&html)
    );
    replace_contents(path, &edit.text)?;
    Ok(true)
}

/// Write `contents` to a temp file next to the page and rename it over the
/// page. Links are resolved first so the page behind them is replaced and the
/// link itself stays.
fn replace_contents(path: &Path, contents: &str) -> Result<()> {
    let io_err = |e: io::Error| PatchError::io(path, e);

    let target = fs::canonicalize(path).map_err(io_err)?;
    let permissions = fs::metadata(&target).map_err(io_err)?.permissions();
    if permissions.readonly() {
        return Err(io_err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )));
    }
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    fs::set_permissions(tmp.path(), permissions).map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;
    Ok(())
}

fn process_one(candidate: &Candidate, pattern: &AnchorPattern, fragment: &Fragment) -> FileStatus {
    if candidate.expect_existing && !candidate.path.exists() {
        return FileStatus::NotFound;
    }
    match patch_file(&candidate.path, pattern, fragment) {
        Ok(true) => FileStatus::Updated,
        Ok(false) => FileStatus::Unchanged,
        Err(e) => {
            tracing::warn!("Failed to patch {}: {e}", candidate.path.display());
            FileStatus::Failed(e.to_string())
        }
    }
}

/// Run the inserter over every candidate in order.
///
/// `on_report` is called once per candidate as soon as that file is done.
/// A failing file never stops the batch.
pub fn process<I, F>(
    candidates: I,
    pattern: &AnchorPattern,
    fragment: &Fragment,
    mut on_report: F,
) -> BatchSummary
where
    I: IntoIterator<Item = Candidate>,
    F: FnMut(&FileReport),
{
    let mut summary = BatchSummary::default();
    for candidate in candidates {
        let status = process_one(&candidate, pattern, fragment);
        summary.record(&status);
        on_report(&FileReport {
            name: candidate.name,
            status,
        });
    }
    summary
}
