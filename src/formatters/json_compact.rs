use serde_json::json;
use std::io::Write;

use super::text::DEFAULT_NAMES_LIMIT;
use crate::core::BundleReport;
use crate::error::Result;
use crate::parsers::bundle::leading_chars;

/// Single-document JSON output for scripts that post-process the report
pub struct JsonCompactFormatter {
    names_limit: usize,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self {
            names_limit: DEFAULT_NAMES_LIMIT,
        }
    }

    pub fn with_names_limit(mut self, limit: usize) -> Self {
        self.names_limit = limit;
        self
    }

    pub fn write_reports<W: Write>(&self, reports: &[BundleReport], out: &mut W) -> Result<()> {
        let json_content = self.format_reports(reports)?;
        writeln!(out, "{json_content}")?;
        out.flush()?;
        Ok(())
    }

    pub fn format_reports(&self, reports: &[BundleReport]) -> Result<String> {
        let bundles: Vec<_> = reports
            .iter()
            .map(|report| {
                // [module, names] pairs keep the token count down
                let imports: Vec<_> = report
                    .imports
                    .iter()
                    .map(|import| {
                        json!([import.module, leading_chars(&import.names, self.names_limit)])
                    })
                    .collect();
                json!({
                    "file": report.file,
                    "size": report.size_bytes,
                    "exports": report.export_count,
                    "imports": imports
                })
            })
            .collect();

        let output = json!({
            "meta": {
                "files": reports.len(),
                "format": "compact"
            },
            "bundles": bundles
        });

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
