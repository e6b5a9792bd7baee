use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

use super::scanner::{BundleFile, BundleScanner};
use crate::error::{BundleError, Result};
use crate::parsers::{BundleParser, ImportRecord};

/// Summary of one bundle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    pub file: String,
    pub imports: Vec<ImportRecord>,
    pub export_count: usize,
    pub size_bytes: u64,
}

impl BundleReport {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

pub struct BundleInspector {
    scanner: BundleScanner,
    parser: BundleParser,
}

impl BundleInspector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: BundleScanner::new(),
            parser: BundleParser::new()?,
        })
    }

    pub fn with_parts(scanner: BundleScanner, parser: BundleParser) -> Self {
        Self { scanner, parser }
    }

    /// Reports every file in `dir` starting with `prefix`, in scanner order.
    pub fn inspect(&self, dir: &Path, prefix: &str) -> Result<Vec<BundleReport>> {
        let start = Instant::now();
        let files = self.scanner.list_candidate_files(dir, prefix)?;

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.inspect_file(file)?);
        }

        info!(
            "Inspected {} bundle(s) in {:.2}ms",
            reports.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(reports)
    }

    pub fn inspect_file(&self, file: &BundleFile) -> Result<BundleReport> {
        let bytes = fs::read(&file.path).map_err(|err| BundleError::fs(&file.path, err))?;
        let content = String::from_utf8_lossy(&bytes);
        let parsed = self.parser.parse(&content);

        debug!(
            "{}: {} import(s), {} export(s), {} bytes",
            file.name,
            parsed.imports.len(),
            parsed.export_count,
            bytes.len()
        );

        Ok(BundleReport {
            file: file.name.clone(),
            imports: parsed.imports,
            export_count: parsed.export_count,
            size_bytes: bytes.len() as u64,
        })
    }
}
