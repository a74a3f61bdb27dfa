//! Catalog of the algorithms the CLI can run

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracegraph_core::error::TraceError;

/// Failure message shown when a path search finds nothing
pub const PATH_NOT_POSSIBLE: &str = "Path is not possible for the given vertices.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmCategory {
    /// Needs a start node only
    Traversal,
    /// Needs a start and an end node
    Pathfinding,
}

impl fmt::Display for AlgorithmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmCategory::Traversal => write!(f, "traversal"),
            AlgorithmCategory::Pathfinding => write!(f, "pathfinding"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dfs => "Depth First Search",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn category(&self) -> AlgorithmCategory {
        match self {
            Algorithm::Bfs | Algorithm::Dfs => AlgorithmCategory::Traversal,
            Algorithm::Dijkstra => AlgorithmCategory::Pathfinding,
        }
    }

    /// Usage hint for picking nodes
    pub fn info(&self) -> &'static str {
        match self.category() {
            AlgorithmCategory::Traversal => "Pick any node to begin the traversal.",
            AlgorithmCategory::Pathfinding => {
                "Pick a starting node and an ending node to search for a path."
            }
        }
    }

    /// Message for the unsuccessful outcome, if the algorithm has one
    pub fn failure(&self) -> Option<&'static str> {
        match self.category() {
            AlgorithmCategory::Traversal => None,
            AlgorithmCategory::Pathfinding => Some(PATH_NOT_POSSIBLE),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}
