use crate::graph::types::{Edge, Graph, NodeId};
use std::collections::HashMap;

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    /// Outgoing edges of `id`, in caller order. Empty for unknown nodes.
    fn outbound_edges(&self, id: NodeId) -> &[Edge];
    fn contains_node(&self, id: NodeId) -> bool;
}

impl GraphProvider for HashMap<NodeId, Vec<Edge>> {
    fn outbound_edges(&self, id: NodeId) -> &[Edge] {
        self.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.contains_key(&id)
    }
}

impl GraphProvider for Graph {
    fn outbound_edges(&self, id: NodeId) -> &[Edge] {
        self.adjacency().outbound_edges(id)
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency().contains_key(&id)
    }
}
