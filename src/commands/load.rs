//! Graph document loading shared by the algorithm commands

use std::path::Path;
use std::time::Instant;

use crate::commands::dispatch::CommandContext;
use tracegraph_core::error::Result;
use tracegraph_core::graph::{Graph, GraphDocument, GraphProvider, NodeId};
use tracegraph_core::trace_time;

/// Read, validate and build the graph at `path`
pub fn load_graph(ctx: &CommandContext, path: &Path) -> Result<Graph> {
    let start = Instant::now();

    let document = GraphDocument::load(path)?;
    let graph = document.into_graph(&ctx.config.graph, path)?;

    trace_time!(start, "load_graph", nodes = graph.node_count());
    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), path = %path.display(), "graph_loaded");
    }

    Ok(graph)
}

/// Note node ids the graph does not know about; the engine degrades quietly
pub fn warn_unknown_nodes(graph: &Graph, ids: &[NodeId]) {
    for id in ids {
        if !graph.contains_node(*id) {
            tracing::warn!(node = %id, "node is not part of the graph");
        }
    }
}
