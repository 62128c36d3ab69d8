//! Configuration for hopmap (stored in ~/.config/hopmap/config.toml)
//!
//! Every key is optional; command-line flags take precedence over the file.
//!
//! ```toml
//! graph_file = "graph.json"
//! strategy = "layered"
//! symmetry = "enforce"
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HopmapError, Result};
use crate::format::OutputFormat;
use crate::graph::{Strategy, SymmetryPolicy};

const CONFIG_DIR: &str = "hopmap";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HOPMAP_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Graph file read by `run` and `validate` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_file: Option<PathBuf>,

    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub symmetry: SymmetryPolicy,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Location of the default config file.
    ///
    /// `HOPMAP_CONFIG_DIR` overrides the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    HopmapError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config at `explicit`, or the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Read and parse the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HopmapError::io_operation("read config", path.display(), e))?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// The graph file to read, preferring an explicit command-line path.
    pub fn resolve_graph_file(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.graph_file.clone())
            .unwrap_or_else(|| PathBuf::from(crate::input::DEFAULT_GRAPH_FILE))
    }
}
