//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tracegraph.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Graph document loading
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for turning graph documents into adjacency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Weight used for edges that omit one (default 1.0)
    #[serde(default = "default_edge_weight")]
    pub default_weight: f64,

    /// List undirected edges under both endpoints (default true)
    #[serde(default = "default_mirror_undirected")]
    pub mirror_undirected: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: default_edge_weight(),
            mirror_undirected: default_mirror_undirected(),
        }
    }
}

/// Output defaults, overridden by `--format`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_edge_weight() -> f64 {
    1.0
}

fn default_mirror_undirected() -> bool {
    true
}
