use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, Result};
use crate::formatters::text::DEFAULT_NAMES_LIMIT;
use crate::parsers::DEFAULT_SCAN_WINDOW;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "bundlescope.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Build output directory holding the bundles
    pub dir: PathBuf,

    /// File name prefix selecting bundles to inspect
    pub prefix: String,

    /// File name prefix of the bundle to dump
    pub dump_prefix: String,

    /// Leading characters searched for imports
    pub window: usize,

    /// Characters of each binding list shown in reports
    pub names_limit: usize,

    /// Sort candidates by file name instead of listing order
    pub sorted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist/assets"),
            prefix: "vendor-".to_owned(),
            dump_prefix: "vendor-misc".to_owned(),
            window: DEFAULT_SCAN_WINDOW,
            names_limit: DEFAULT_NAMES_LIMIT,
            sorted: false,
        }
    }
}

impl Config {
    /// Reads `path`, or `bundlescope.toml` when present, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let raw = fs::read_to_string(path).map_err(|err| BundleError::fs(path, err))?;
        toml::from_str(&raw).map_err(|err| BundleError::Config {
            message: format!("{}: {err}", path.display()),
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| BundleError::Config {
            message: err.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(BundleError::Config {
                message: "window must be greater than zero".to_string(),
            });
        }
        if self.names_limit == 0 {
            return Err(BundleError::Config {
                message: "names_limit must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
