use regex::Regex;

use super::{ImportRecord, ParseResult, DEFAULT_SCAN_WINDOW, EXPORT_MARKER};
use crate::error::{BundleError, Result};

/// Matches the minified form only; `import { a } from "x"` is not recognised.
const IMPORT_PATTERN: &str = r#"import\{([^}]+)\}from"([^"]+)""#;

/// Pattern-based reader for minified bundle output.
pub struct BundleParser {
    import_re: Regex,
    window: usize,
}

impl BundleParser {
    pub fn new() -> Result<Self> {
        Self::with_window(DEFAULT_SCAN_WINDOW)
    }

    pub fn with_window(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(BundleError::Config {
                message: "scan window must be at least one character".to_string(),
            });
        }
        Ok(Self {
            import_re: Regex::new(IMPORT_PATTERN)?,
            window,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn parse(&self, content: &str) -> ParseResult {
        ParseResult {
            imports: self.extract_imports(content),
            export_count: count_exports(content),
        }
    }

    /// Import declarations within the leading scan window, in order of appearance.
    pub fn extract_imports(&self, content: &str) -> Vec<ImportRecord> {
        let head = leading_chars(content, self.window);

        self.import_re
            .captures_iter(head)
            .map(|caps| ImportRecord::new(&caps[1], &caps[2]))
            .collect()
    }
}

/// Non-overlapping occurrences of `export{` across the whole content.
pub fn count_exports(content: &str) -> usize {
    content.matches(EXPORT_MARKER).count()
}

/// Prefix of `text` holding at most `limit` characters.
pub fn leading_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
