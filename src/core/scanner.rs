use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{BundleError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub name: String,
    pub path: PathBuf,
}

/// Lists build output entries by file name prefix. Does not descend into subdirectories.
pub struct BundleScanner {
    sorted: bool,
}

impl BundleScanner {
    pub fn new() -> Self {
        Self { sorted: false }
    }

    /// Order results by file name instead of directory listing order.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn list_candidate_files(&self, dir: &Path, prefix: &str) -> Result<Vec<BundleFile>> {
        // Links are resolved per candidate below, so unrelated dangling links never fail a run.
        let mut walker = WalkDir::new(dir).max_depth(1).follow_links(false);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 && !error_matches_prefix(&err, prefix) => {
                    trace!("ignoring unrelated entry error: {err}");
                    continue;
                }
                Err(err) => return Err(walk_error(dir, err)),
            };

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return Err(BundleError::fs(dir, io::Error::other("not a directory")));
                }
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                trace!("skipping non UTF-8 entry {}", entry.path().display());
                continue;
            };
            if !name.starts_with(prefix) || !is_regular_file(&entry)? {
                continue;
            }
            files.push(BundleFile {
                name: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }

        debug!(
            "{} candidate(s) with prefix '{}' in {}",
            files.len(),
            prefix,
            dir.display()
        );
        Ok(files)
    }

    /// First entry in listing order whose name starts with `prefix`.
    pub fn find_first(&self, dir: &Path, prefix: &str) -> Result<Option<BundleFile>> {
        Ok(self.list_candidate_files(dir, prefix)?.into_iter().next())
    }
}

impl Default for BundleScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Regular file after following a symlink; a broken link on a matched name is an error.
fn is_regular_file(entry: &DirEntry) -> Result<bool> {
    if entry.path_is_symlink() {
        let metadata =
            fs::metadata(entry.path()).map_err(|err| BundleError::fs(entry.path(), err))?;
        return Ok(metadata.is_file());
    }
    Ok(entry.file_type().is_file())
}

fn error_matches_prefix(err: &walkdir::Error, prefix: &str) -> bool {
    err.path()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix))
}

fn walk_error(dir: &Path, err: walkdir::Error) -> BundleError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    BundleError::fs(path, source)
}
