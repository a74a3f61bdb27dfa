use crate::graph::algos::shared::seed_trace;
use crate::graph::path::backtrack;
use crate::graph::types::{NodeId, ShortestPathResult, TraceEdge};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then by
/// push order so that equal distances settle first-come first-served)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub distance: f64,
    pub sequence: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// State tracked during a Dijkstra search.
///
/// Distances are kept per node. A node absent from `distances` is unreached.
struct DijkstraState {
    distances: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, NodeId>,
    /// Edge that produced each node's current best distance
    arrivals: HashMap<NodeId, TraceEdge>,
    settled: HashSet<NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    visited_edges: Vec<TraceEdge>,
    next_sequence: u64,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            arrivals: HashMap::new(),
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            visited_edges: Vec::new(),
            next_sequence: 0,
        }
    }

    fn settle(&mut self, node_id: NodeId, arrival: TraceEdge) {
        self.settled.insert(node_id);
        self.visited_edges.push(arrival);
    }

    /// Relax every outgoing edge of a freshly settled node
    fn relax(&mut self, provider: &dyn GraphProvider, current: NodeId) {
        let Some(&base) = self.distances.get(&current) else {
            return;
        };

        for edge in provider.outbound_edges(current) {
            if self.settled.contains(&edge.to) {
                continue;
            }

            // NaN candidates fail this comparison, as do infinite ones
            let candidate = base + edge.weight;
            let best = self
                .distances
                .get(&edge.to)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < best {
                self.distances.insert(edge.to, candidate);
                self.predecessors.insert(edge.to, current);
                self.arrivals.insert(edge.to, TraceEdge::from(edge));
                self.heap.push(Reverse(HeapEntry {
                    node_id: edge.to,
                    distance: candidate,
                    sequence: self.next_sequence,
                }));
                self.next_sequence += 1;
            }
        }
    }

    /// Pop the closest unsettled node, skipping stale heap entries
    fn select_next(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled.contains(&entry.node_id) {
                continue;
            }
            let current_best = self.distances.get(&entry.node_id).copied();
            if current_best == Some(entry.distance) {
                return Some(entry.node_id);
            }
        }
        None
    }
}

/// Find a least-cost route from `start` to `end` and record settle order.
///
/// `visited_edges` starts with the seed step and then lists, for every node
/// settled, the real edge it was reached through. When `end` cannot be
/// reached, `shortest_path` is empty and `visited_edges` covers every node
/// reachable from `start`. Weights are assumed non-negative, with a finite
/// sum; a route whose cost overflows to infinity is never relaxed.
#[tracing::instrument(skip(provider), fields(start = %start, end = %end))]
pub fn dijkstra_search(
    provider: &dyn GraphProvider,
    start: NodeId,
    end: NodeId,
) -> ShortestPathResult {
    let seed = seed_trace(start);

    if start == end {
        return ShortestPathResult {
            start,
            end,
            shortest_path: vec![seed.clone()],
            visited_edges: vec![seed],
            cost: Some(0.0),
        };
    }

    let mut state = DijkstraState::new();
    state.distances.insert(start, 0.0);
    state.settle(start, seed);

    let mut current = start;
    loop {
        state.relax(provider, current);

        let Some(next) = state.select_next() else {
            tracing::debug!(
                settled = state.settled.len(),
                "target unreachable from start"
            );
            return ShortestPathResult {
                start,
                end,
                shortest_path: Vec::new(),
                visited_edges: state.visited_edges,
                cost: None,
            };
        };

        let arrival = state
            .arrivals
            .remove(&next)
            .unwrap_or_else(|| seed_trace(next));
        state.settle(next, arrival);

        if next == end {
            break;
        }
        current = next;
    }

    let shortest_path = backtrack(&state.predecessors, start, end);
    let cost = state.distances.get(&end).copied();
    tracing::debug!(
        settled = state.settled.len(),
        hops = shortest_path.len().saturating_sub(1),
        "path found"
    );

    ShortestPathResult {
        start,
        end,
        shortest_path,
        visited_edges: state.visited_edges,
        cost,
    }
}
