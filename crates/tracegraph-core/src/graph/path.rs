//! Route reconstruction for shortest-path results

use crate::graph::algos::shared::seed_trace;
use crate::graph::types::{NodeId, TraceEdge};
use std::collections::HashMap;

/// Rebuild the route from `start` to `end` out of a predecessor table.
///
/// Walks back from `end` until it reaches `start` or a node without a
/// predecessor, then emits the seed step followed by one synthetic step per
/// consecutive pair. Steps carry placeholder weights; the route is for
/// display, not for re-deriving its cost.
pub fn backtrack(
    predecessors: &HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<TraceEdge> {
    let mut order = vec![end];
    let mut current = end;

    while current != start {
        match predecessors.get(&current) {
            Some(&pred) => {
                current = pred;
                order.push(current);
            }
            None => break,
        }
        if order.len() > predecessors.len() + 1 {
            // Not a tree; stop before looping forever
            break;
        }
    }

    order.reverse();

    let mut route = Vec::with_capacity(order.len());
    route.push(seed_trace(start));
    route.extend(
        order
            .windows(2)
            .map(|pair| TraceEdge::step(pair[0], pair[1])),
    );
    route
}
