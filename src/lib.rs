//! # bundlescope
//!
//! Inspect JavaScript bundles already emitted by a build tool.
//!
//! Vendor bundles are picked out of a build output directory by file name prefix. For each one
//! the leading `import{..}from".."` declarations, the number of `export{` statements and the
//! file size are reported. A single bundle can also be dumped verbatim.
//!
//! Detection is textual and only understands minified output. Imports past the first
//! 1000 characters of a file are not seen.

pub mod config;
pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;

pub use error::{BundleError, Result};
