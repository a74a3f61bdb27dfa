//! Configuration for tracegraph
//!
//! Read from `tracegraph.toml` in the working directory, or from an explicit
//! path. A missing default file means defaults; a missing explicit file is an
//! error.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, TraceError};

pub use types::{GraphConfig, OutputConfig, TraceConfig, CONFIG_FILE_NAME};

impl TraceConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TraceConfig =
            toml::from_str(&content).map_err(|e| TraceError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load `explicit` if given, else `tracegraph.toml` under `dir` if present
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TraceError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "loading config");
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let weight = self.graph.default_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(TraceError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!(
                    "graph.default_weight must be a finite non-negative number, got {}",
                    weight
                ),
            });
        }
        Ok(())
    }
}
