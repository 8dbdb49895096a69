//! Project configuration.
//!
//! A `nodebind.toml` next to the scanned tree may override the layout
//! conventions. Every key is optional:
//!
//! ```toml
//! root = "main"
//! entry_file = "index.js"
//! output_file = "index.js"
//! collisions = "reject"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Name of the optional configuration file inside the source directory.
pub const CONFIG_FILE: &str = "nodebind.toml";

/// What to do when two handler directories map to the same node identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Fail the run.
    #[default]
    Reject,
    /// Emit both entries; the later one shadows the earlier at runtime.
    LastWins,
}

/// Layout conventions for one source directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of the root node, relative to the source directory.
    pub root: String,
    /// File name marking a directory as a node.
    pub entry_file: String,
    /// Generated module, relative to the source directory.
    pub output_file: String,
    pub collisions: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: "main".to_string(),
            entry_file: "index.js".to_string(),
            output_file: "index.js".to_string(),
            collisions: CollisionPolicy::default(),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e, s, CONFIG_FILE))
    }
}

impl Config {
    /// Load `nodebind.toml` from `src_dir`, falling back to defaults when absent.
    pub fn load(src_dir: &Path) -> Result<Self> {
        let path = src_dir.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config: Self = content.parse()?;
        tracing::debug!(?config, "loaded config");
        Ok(config)
    }
}
