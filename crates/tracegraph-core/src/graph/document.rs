//! Graph documents: the on-disk shape a caller hands to the engine
//!
//! ```json
//! { "nodes": [7], "edges": [ { "from": 1, "to": 2, "weight": 1.5, "type": "undirected" } ] }
//! ```
//!
//! JSON and YAML are accepted. Loading validates what the algorithms leave
//! undefined: every weight must be finite and non-negative.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_graph;
use crate::config::GraphConfig;
use crate::error::{Result, TraceError};
use crate::graph::types::{Edge, EdgeGeometry, EdgeKind, Graph, NodeId};

/// Serialization of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension; anything but `yaml`/`yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// One edge as written in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<EdgeGeometry>,
    #[serde(default)]
    pub used_in_traversal: bool,
}

/// A full graph document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes to register even when no edge touches them
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let document = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(document)
    }

    /// Read and parse a document, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TraceError::GraphNotFound {
                path: path.to_path_buf(),
            },
            _ => TraceError::Io(e),
        })?;

        Self::parse(&content, DocumentFormat::from_path(path))
            .map_err(|e| TraceError::invalid_graph(path, e))
    }

    /// Resolve default weights, validate, and build adjacency.
    ///
    /// `source` is only used to label errors.
    pub fn into_graph(self, config: &GraphConfig, source: &Path) -> Result<Graph> {
        let mut graph = Graph::new();
        for id in self.nodes {
            graph.add_node(id);
        }

        // Any simple path costs at most the sum of all weights
        let mut total_weight = 0.0_f64;
        for spec in self.edges {
            let weight = spec.weight.unwrap_or(config.default_weight);
            if !weight.is_finite() || weight < 0.0 {
                bail_graph!(
                    source,
                    "edge {} -> {} has weight {} (weights must be finite and non-negative)",
                    spec.from,
                    spec.to,
                    weight
                );
            }
            total_weight += weight;
            if !total_weight.is_finite() {
                bail_graph!(
                    source,
                    "edge {} -> {} pushes the total weight past the largest representable cost",
                    spec.from,
                    spec.to
                );
            }

            let edge = Edge {
                from: spec.from,
                to: spec.to,
                kind: spec.kind,
                weight,
                geometry: spec.geometry,
                used_in_traversal: spec.used_in_traversal,
            };

            let mirror = (edge.kind == EdgeKind::Undirected && config.mirror_undirected)
                .then(|| edge.reversed());
            graph.add_edge(edge);
            if let Some(reverse) = mirror {
                graph.add_edge(reverse);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }
}
