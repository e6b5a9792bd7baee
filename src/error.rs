//! Error types for bundle inspection.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Error, Debug)]
pub enum BundleError {
    /// Listing the build output directory or reading a bundle failed.
    #[error("failed to access {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No directory entry carries the requested prefix.
    #[error("no file starting with '{prefix}' found in {}", dir.display())]
    FileNotFound { prefix: String, dir: PathBuf },

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("invalid import pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing the report or dump failed, e.g. a closed stdout pipe.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl BundleError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BundleError::FileSystem {
            path: path.into(),
            source,
        }
    }
}
