//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first and depth-first traversal over a shared frontier loop
//! - `dijkstra`: Weighted shortest path with settle-order trace
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::{bfs_traverse, dfs_traverse};
pub use dijkstra::dijkstra_search;
pub use shared::{collect_neighbor_steps, neighbor_step, seed_trace, trace_destinations};
