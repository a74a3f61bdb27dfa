use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::algos::shared::{collect_neighbor_steps, seed_trace};
use crate::graph::types::{NodeId, TraceEdge};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// State tracked during a frontier-driven traversal
struct TraversalState {
    visited: HashSet<NodeId>,
    trace: Vec<TraceEdge>,
}

impl TraversalState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            trace: Vec::new(),
        }
    }
}

/// Drain `frontier` from `start`, recording each node's first arrival.
///
/// Visited checks happen when a step is taken off the frontier, not when it
/// is pushed, so the frontier may hold several steps into the same node.
/// Only the first one taken is recorded and expanded.
fn traverse_with<F: Frontier<TraceEdge>>(
    provider: &dyn GraphProvider,
    start: NodeId,
    mut frontier: F,
) -> Vec<TraceEdge> {
    let mut state = TraversalState::new();
    frontier.push(seed_trace(start));

    while let Some(step) = frontier.take_next() {
        let node_id = step.to;
        if !state.visited.insert(node_id) {
            continue;
        }

        for neighbor in collect_neighbor_steps(provider, node_id) {
            frontier.push(neighbor);
        }
        state.trace.push(step);
    }

    tracing::debug!(steps = state.trace.len(), "traversal_complete");
    state.trace
}

/// Breadth-first traversal from `start`.
///
/// The first element is always the virtual source step into `start`, even
/// when `start` is not part of the graph.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_traverse(provider: &dyn GraphProvider, start: NodeId) -> Vec<TraceEdge> {
    traverse_with(provider, start, Queue::new())
}

/// Depth-first traversal from `start`.
///
/// Neighbours are pushed in adjacency order, so the last listed neighbour is
/// explored first.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: NodeId) -> Vec<TraceEdge> {
    traverse_with(provider, start, Stack::new())
}
