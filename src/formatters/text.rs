use std::io::Write;

use crate::core::BundleReport;
use crate::error::Result;
use crate::parsers::bundle::leading_chars;

pub const DEFAULT_NAMES_LIMIT: usize = 200;

/// Plain-text report meant for a human reader; the layout is not a stable schema.
pub struct TextFormatter {
    names_limit: usize,
}

impl TextFormatter {
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
        for report in reports {
            self.write_report(report, out)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_report<W: Write>(&self, report: &BundleReport, out: &mut W) -> Result<()> {
        writeln!(out, "=== {} ===", report.file)?;
        for import in &report.imports {
            writeln!(
                out,
                "  from \"{}\": {}",
                import.module,
                leading_chars(&import.names, self.names_limit)
            )?;
        }
        writeln!(out, "  exports: {}", report.export_count)?;
        writeln!(out, "  size: {:.1} KB", round_tenths(report.size_kb()))?;
        writeln!(out)?;
        Ok(())
    }

    pub fn format_to_string(&self, reports: &[BundleReport]) -> Result<String> {
        let mut buf = Vec::new();
        self.write_reports(reports, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ties round away from zero; `{:.1}` alone would round 1.25 down to 1.2.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
