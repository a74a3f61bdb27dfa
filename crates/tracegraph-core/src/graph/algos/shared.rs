use crate::graph::types::{Edge, NodeId, SeedMarker, TraceEdge};
use crate::graph::GraphProvider;

/// Virtual source step that opens every trace
pub fn seed_trace(start: NodeId) -> TraceEdge {
    SeedMarker::new(start).into_trace()
}

/// Synthetic step from `node_id` along `edge`, keeping only the edge kind
pub fn neighbor_step(node_id: NodeId, edge: &Edge) -> TraceEdge {
    TraceEdge {
        kind: edge.kind,
        ..TraceEdge::step(node_id, edge.to)
    }
}

/// Steps to every neighbour of `node_id`, in adjacency order
pub fn collect_neighbor_steps(provider: &dyn GraphProvider, node_id: NodeId) -> Vec<TraceEdge> {
    provider
        .outbound_edges(node_id)
        .iter()
        .map(|edge| neighbor_step(node_id, edge))
        .collect()
}

/// Destinations reached by a trace, in order, skipping nothing
pub fn trace_destinations(trace: &[TraceEdge]) -> Vec<NodeId> {
    trace.iter().map(|step| step.to).collect()
}
