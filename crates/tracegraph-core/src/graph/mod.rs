//! Graph traversal and path-finding operations
//!
//! Every algorithm returns an ordered trace of steps meant to be replayed:
//! - BFS and DFS traversal from a start node
//! - Dijkstra shortest path between two nodes, plus its settle order
//! - Graph provider trait for caller-owned adjacency structures

pub mod algos;
pub mod document;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{bfs_traverse, dfs_traverse, dijkstra_search};
pub use document::{EdgeSpec, GraphDocument};
pub use path::backtrack;
pub use traversal::GraphProvider;
pub use types::{
    Edge, EdgeGeometry, EdgeKind, Graph, NodeId, SeedMarker, ShortestPathResult, TraceEdge,
};
