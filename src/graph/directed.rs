//! Adjacency-list directed graph.
//!
//! [`DirectedGraph`] stores node payloads in a vector indexed by
//! [`NodeIndex`] and keeps two adjacency lists per node: outgoing edges for
//! forward traversal and incoming edges for reverse traversal. Both lists hold
//! positions into a single edge vector, so parallel edges are kept as distinct
//! entries and per-source insertion order is preserved.
//!
//! The graph is append-only: nodes and edges can be added but never removed.
//! Analysis code builds it once per call and then only reads from it.

use crate::{
    graph::{
        node::NodeIndex,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

#[derive(Debug, Clone)]
struct EdgeData<E> {
    source: NodeIndex,
    target: NodeIndex,
    data: E,
}

/// A directed multigraph with node payloads `N` and edge payloads `E`.
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, b, ())?; // parallel edges are kept
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.out_degree(a), 2);
/// assert_eq!(graph.in_degree(b), 2);
/// # Ok::<(), storyscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    nodes: Vec<N>,
    edges: Vec<EdgeData<E>>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates an empty graph with room for the given number of nodes and edges.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
        }
    }

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, data: N) -> NodeIndex {
        let id = NodeIndex::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Appends an edge `source -> target`.
    ///
    /// Returns the position of the new edge in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, data: E) -> Result<usize> {
        if source.index() >= self.nodes.len() {
            return Err(Error::GraphError(format!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.nodes.len()
            )));
        }
        if target.index() >= self.nodes.len() {
            return Err(Error::GraphError(format!(
                "target node {} does not exist in graph with {} nodes",
                target,
                self.nodes.len()
            )));
        }

        let position = self.edges.len();
        self.edges.push(EdgeData {
            source,
            target,
            data,
        });
        self.outgoing[source.index()].push(position);
        self.incoming[target.index()].push(position);

        Ok(position)
    }

    /// Returns the payload of `node`, if it exists.
    #[must_use]
    pub fn node(&self, node: NodeIndex) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Iterates `(index, payload)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeIndex::new(i), data))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the endpoints of the edge at `position`, if it exists.
    #[must_use]
    pub fn edge_endpoints(&self, position: usize) -> Option<(NodeIndex, NodeIndex)> {
        self.edges.get(position).map(|e| (e.source, e.target))
    }

    /// Targets of the edges leaving `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.outgoing[node.index()]
            .iter()
            .map(|&position| self.edges[position].target)
    }

    /// Sources of the edges entering `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.incoming[node.index()]
            .iter()
            .map(|&position| self.edges[position].source)
    }

    /// `(target, payload)` for each edge leaving `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn outgoing_edges(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, &E)> + '_ {
        self.outgoing[node.index()].iter().map(|&position| {
            let edge = &self.edges[position];
            (edge.target, &edge.data)
        })
    }

    /// Number of edges leaving `node`; 0 for unknown nodes.
    #[must_use]
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.outgoing.get(node.index()).map_or(0, Vec::len)
    }

    /// Number of edges entering `node`; 0 for unknown nodes.
    #[must_use]
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.incoming.get(node.index()).map_or(0, Vec::len)
    }

    /// Returns `true` if `node` has an edge to itself.
    #[must_use]
    pub fn has_self_loop(&self, node: NodeIndex) -> bool {
        node.index() < self.nodes.len() && self.successors(node).any(|s| s == node)
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
        DirectedGraph::successors(self, node)
    }
}

impl<N, E> Predecessors for DirectedGraph<N, E> {
    fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
        DirectedGraph::predecessors(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_nodes_sequential_indices() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::with_capacity(2, 0);
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        assert_eq!(a, NodeIndex::new(0));
        assert_eq!(b, NodeIndex::new(1));
        assert_eq!(graph.node(b), Some(&"B"));
        assert_eq!(graph.node(NodeIndex::new(5)), None);
    }

    #[test]
    fn test_successor_order_is_insertion_order() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());

        graph.add_edge(a, d, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();

        let succ: Vec<NodeIndex> = graph.successors(a).collect();
        assert_eq!(succ, vec![d, b, c]);
    }

    #[test]
    fn test_reverse_adjacency() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());

        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();

        let pred: Vec<NodeIndex> = graph.predecessors(c).collect();
        assert_eq!(pred, vec![a, b]);
        assert_eq!(graph.in_degree(c), 2);
        assert_eq!(graph.out_degree(c), 0);
    }

    #[test]
    fn test_parallel_edges_not_deduplicated() {
        let mut graph: DirectedGraph<(), usize> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());

        assert_eq!(graph.add_edge(a, b, 10).unwrap(), 0);
        assert_eq!(graph.add_edge(a, b, 11).unwrap(), 1);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_degree(a), 2);
        let payloads: Vec<usize> = graph.outgoing_edges(a).map(|(_, p)| *p).collect();
        assert_eq!(payloads, vec![10, 11]);
        assert_eq!(graph.edge_endpoints(1), Some((a, b)));
    }

    #[test]
    fn test_add_edge_rejects_unknown_endpoints() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());

        assert!(matches!(
            graph.add_edge(a, NodeIndex::new(3), ()),
            Err(Error::GraphError(_))
        ));
        assert!(matches!(
            graph.add_edge(NodeIndex::new(9), a, ()),
            Err(Error::GraphError(_))
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_detection() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, a, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();

        assert!(graph.has_self_loop(a));
        assert!(!graph.has_self_loop(b));
        assert!(!graph.has_self_loop(NodeIndex::new(8)));
    }
}
