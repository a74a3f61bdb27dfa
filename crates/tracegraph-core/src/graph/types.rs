use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Node identifier, unique within one graph.
///
/// Nodes have no payload of their own; they exist because edges reference
/// them (or because a graph document lists them explicitly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(NodeId)
            .map_err(|_| format!("invalid node id '{}' (expected a non-negative integer)", s))
    }
}

/// Whether an edge was drawn with a direction.
///
/// Carried through to the trace; the algorithms always follow adjacency
/// lists, so an undirected edge only behaves as such if the caller listed it
/// under both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Directed,
    Undirected,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => write!(f, "directed"),
            EdgeKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Drawing coordinates attached to an edge by the caller.
///
/// Never read by the engine, only copied into trace output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeGeometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub node_x2: f64,
    pub node_y2: f64,
}

/// A real edge in the caller's graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<EdgeGeometry>,
    #[serde(default)]
    pub used_in_traversal: bool,
}

impl Edge {
    /// Directed edge without geometry
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Directed,
            weight,
            geometry: None,
            used_in_traversal: false,
        }
    }

    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_geometry(mut self, geometry: EdgeGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// The same edge walked from the other end
    pub fn reversed(&self) -> Self {
        let mut edge = self.clone();
        std::mem::swap(&mut edge.from, &mut edge.to);
        edge
    }
}

/// One animatable step emitted by an algorithm.
///
/// A step is not necessarily a real graph edge: `from == None` marks arrival
/// at the start node, and `weight == None` marks any synthetic step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEdge {
    pub from: Option<NodeId>,
    pub to: NodeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<EdgeGeometry>,
    #[serde(default)]
    pub used_in_traversal: bool,
}

impl TraceEdge {
    /// Synthetic step between two nodes, with placeholder weight and geometry
    pub fn step(from: NodeId, to: NodeId) -> Self {
        Self {
            from: Some(from),
            to,
            kind: EdgeKind::Directed,
            weight: None,
            geometry: None,
            used_in_traversal: false,
        }
    }

    /// True for the virtual source step that opens every trace
    pub fn is_seed(&self) -> bool {
        self.from.is_none()
    }

    /// True when this step carries a real edge weight
    pub fn is_real_edge(&self) -> bool {
        self.weight.is_some()
    }
}

impl From<&Edge> for TraceEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            from: Some(edge.from),
            to: edge.to,
            kind: edge.kind,
            weight: Some(edge.weight),
            geometry: edge.geometry,
            used_in_traversal: edge.used_in_traversal,
        }
    }
}

/// Start signal for a search: "arrive at `start` from nowhere"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMarker {
    pub start: NodeId,
}

impl SeedMarker {
    pub fn new(start: NodeId) -> Self {
        Self { start }
    }

    /// The virtual source edge that opens a trace
    pub fn into_trace(self) -> TraceEdge {
        TraceEdge {
            from: None,
            to: self.start,
            kind: EdgeKind::Directed,
            weight: None,
            geometry: None,
            used_in_traversal: false,
        }
    }
}

/// Outcome of a shortest-path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    pub start: NodeId,
    pub end: NodeId,
    /// Route from start to end, opened by the seed step. Empty when no path exists.
    pub shortest_path: Vec<TraceEdge>,
    /// Edges in the order their destinations were settled
    pub visited_edges: Vec<TraceEdge>,
    /// Total weight of the route, when one was found
    pub cost: Option<f64>,
}

impl ShortestPathResult {
    pub fn found(&self) -> bool {
        !self.shortest_path.is_empty()
    }

    /// Number of real hops on the route (the seed step is not a hop)
    pub fn path_length(&self) -> usize {
        self.shortest_path.len().saturating_sub(1)
    }
}

/// Caller-owned adjacency mapping
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list, keeping per-node edge order
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Register a node with no outgoing edges (no-op if already present)
    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Append an edge to its source's adjacency list.
    ///
    /// Both endpoints become nodes of the graph.
    pub fn add_edge(&mut self, edge: Edge) {
        self.add_node(edge.to);
        self.adjacency.entry(edge.from).or_default().push(edge);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn adjacency(&self) -> &HashMap<NodeId, Vec<Edge>> {
        &self.adjacency
    }
}

impl From<HashMap<NodeId, Vec<Edge>>> for Graph {
    fn from(adjacency: HashMap<NodeId, Vec<Edge>>) -> Self {
        let edge_count = adjacency.values().map(Vec::len).sum();
        let destinations: Vec<NodeId> = adjacency.values().flatten().map(|e| e.to).collect();
        let mut graph = Graph {
            adjacency,
            edge_count,
        };
        for id in destinations {
            graph.add_node(id);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_parse() {
        assert_eq!("42".parse::<NodeId>().unwrap(), NodeId(42));
        assert_eq!(" 7 ".parse::<NodeId>().unwrap(), NodeId(7));
        assert!("-1".parse::<NodeId>().is_err());
        assert!("Infinity".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_seed_marker_into_trace() {
        let seed = SeedMarker::new(NodeId(5)).into_trace();
        assert!(seed.is_seed());
        assert!(!seed.is_real_edge());
        assert_eq!(seed.to, NodeId(5));
        assert!(seed.geometry.is_none());
    }

    #[test]
    fn test_trace_edge_from_edge_keeps_metadata() {
        let geometry = EdgeGeometry {
            x1: 1.0,
            y1: 2.0,
            x2: 3.0,
            y2: 4.0,
            node_x2: 3.5,
            node_y2: 4.5,
        };
        let edge = Edge::new(1, 2, 2.5)
            .with_kind(EdgeKind::Undirected)
            .with_geometry(geometry);
        let trace = TraceEdge::from(&edge);

        assert_eq!(trace.from, Some(NodeId(1)));
        assert_eq!(trace.to, NodeId(2));
        assert_eq!(trace.weight, Some(2.5));
        assert_eq!(trace.kind, EdgeKind::Undirected);
        assert_eq!(trace.geometry, Some(geometry));
    }

    #[test]
    fn test_graph_registers_destinations() {
        let graph = Graph::from_edges([Edge::new(1, 2, 1.0), Edge::new(1, 3, 1.0)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.adjacency()[&NodeId(3)].is_empty());
    }

    #[test]
    fn test_graph_from_adjacency_map_registers_sinks() {
        let mut adjacency = HashMap::new();
        adjacency.insert(NodeId(1), vec![Edge::new(1, 2, 1.0), Edge::new(1, 5, 2.0)]);
        adjacency.insert(NodeId(2), vec![Edge::new(2, 5, 1.0)]);

        let graph = Graph::from(adjacency);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.adjacency()[&NodeId(5)].is_empty());
        assert_eq!(graph.adjacency()[&NodeId(1)][1].to, NodeId(5));
    }

    #[test]
    fn test_graph_preserves_edge_order() {
        let graph = Graph::from_edges([
            Edge::new(1, 3, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(1, 4, 1.0),
        ]);
        let targets: Vec<u64> = graph.adjacency()[&NodeId(1)]
            .iter()
            .map(|e| e.to.value())
            .collect();
        assert_eq!(targets, vec![3, 2, 4]);
    }

    #[test]
    fn test_edge_reversed() {
        let edge = Edge::new(1, 2, 3.0).reversed();
        assert_eq!(edge.from, NodeId(2));
        assert_eq!(edge.to, NodeId(1));
        assert_eq!(edge.weight, 3.0);
    }

    #[test]
    fn test_shortest_path_result_helpers() {
        let result = ShortestPathResult {
            start: NodeId(1),
            end: NodeId(2),
            shortest_path: vec![
                SeedMarker::new(NodeId(1)).into_trace(),
                TraceEdge::step(NodeId(1), NodeId(2)),
            ],
            visited_edges: vec![],
            cost: Some(1.0),
        };
        assert!(result.found());
        assert_eq!(result.path_length(), 1);
    }
}
