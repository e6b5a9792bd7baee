use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::scanner::{BundleFile, BundleScanner};
use crate::error::{BundleError, Result};

/// Writes one bundle verbatim, for when the structured report is not enough.
pub struct BundleDumper {
    scanner: BundleScanner,
}

impl BundleDumper {
    pub fn new() -> Self {
        Self {
            scanner: BundleScanner::new(),
        }
    }

    /// Pick the first match by file name rather than listing order.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.scanner = self.scanner.with_sorted(sorted);
        self
    }

    pub fn locate(&self, dir: &Path, prefix: &str) -> Result<BundleFile> {
        self.scanner
            .find_first(dir, prefix)?
            .ok_or_else(|| BundleError::FileNotFound {
                prefix: prefix.to_string(),
                dir: dir.to_path_buf(),
            })
    }

    pub fn dump<W: Write>(&self, dir: &Path, prefix: &str, out: &mut W) -> Result<BundleFile> {
        let file = self.locate(dir, prefix)?;
        let bytes = fs::read(&file.path).map_err(|err| BundleError::fs(&file.path, err))?;
        info!("Dumping {} ({} bytes)", file.name, bytes.len());

        out.write_all(&bytes)?;
        out.flush()?;
        Ok(file)
    }
}

impl Default for BundleDumper {
    fn default() -> Self {
        Self::new()
    }
}
