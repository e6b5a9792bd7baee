pub mod bundle;

use serde::Serialize;

pub use bundle::BundleParser;

/// Characters of a bundle searched for import declarations.
pub const DEFAULT_SCAN_WINDOW: usize = 1000;

/// Marker counted once per export statement.
pub const EXPORT_MARKER: &str = "export{";

/// One `import{<names>}from"<module>"` declaration found in a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    /// Binding list exactly as written, e.g. `useState,useEffect`.
    pub names: String,
    pub module: String,
}

impl ImportRecord {
    pub fn new(names: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            names: names.into(),
            module: module.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub imports: Vec<ImportRecord>,
    pub export_count: usize,
}
