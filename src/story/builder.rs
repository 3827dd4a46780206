//! Story graph construction.
//!
//! [`StoryGraph`] resolves string ids to dense [`NodeIndex`] values once, so
//! every pass after it works on plain vectors. It borrows the caller's node
//! and edge slices and never copies them.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::Endpoint,
    graph::{DirectedGraph, NodeIndex},
    story::{StoryEdge, StoryNode},
    Error, Result,
};

/// A story resolved into a [`DirectedGraph`].
///
/// Node `i` of the graph is `nodes[i]` of the input and carries a reference to
/// it. Edge payloads are the position of the edge in the input list, so the
/// original [`StoryEdge`] stays reachable from the graph.
///
/// # Examples
///
/// ```rust
/// use storyscope::{StoryEdge, StoryGraph, StoryNode};
///
/// let nodes = vec![StoryNode::start("s"), StoryNode::ending("e")];
/// let edges = vec![StoryEdge::new("s", "e")];
/// let story = StoryGraph::build(&nodes, &edges)?;
///
/// let s = story.index_of("s").unwrap();
/// assert_eq!(story.start(), Some(s));
/// assert_eq!(story.graph().out_degree(s), 1);
/// # Ok::<(), storyscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StoryGraph<'a> {
    graph: DirectedGraph<&'a StoryNode, usize>,
    nodes: &'a [StoryNode],
    edges: &'a [StoryEdge],
    index: HashMap<&'a str, NodeIndex>,
    start: Option<NodeIndex>,
}

impl<'a> StoryGraph<'a> {
    /// Resolves `nodes` and `edges` into a graph.
    ///
    /// Nodes keep their input order as their index. Edges are added in input
    /// order, which fixes the successor order of every node. Parallel edges
    /// and self-edges are kept.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateNode`] if a node id occurs twice
    /// - [`Error::UnknownNode`] for the first edge whose source or target id
    ///   is not in `nodes`
    pub fn build(nodes: &'a [StoryNode], edges: &'a [StoryEdge]) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(nodes.len(), edges.len());
        let mut index = HashMap::with_capacity(nodes.len());
        let mut start = None;

        for node in nodes {
            if index.contains_key(node.id.as_str()) {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
            let id = graph.add_node(node);
            index.insert(node.id.as_str(), id);
            if start.is_none() && node.is_start() {
                start = Some(id);
            }
        }

        for (position, edge) in edges.iter().enumerate() {
            let source = Self::resolve(&index, position, &edge.source, Endpoint::Source)?;
            let target = Self::resolve(&index, position, &edge.target, Endpoint::Target)?;
            graph.add_edge(source, target, position)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "story graph built"
        );

        Ok(StoryGraph {
            graph,
            nodes,
            edges,
            index,
            start,
        })
    }

    fn resolve(
        index: &HashMap<&'a str, NodeIndex>,
        edge: usize,
        id: &str,
        endpoint: Endpoint,
    ) -> Result<NodeIndex> {
        index
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownNode {
                edge,
                node: id.to_string(),
                endpoint,
            })
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph<&'a StoryNode, usize> {
        &self.graph
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the story has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// The first start node in input order, if any.
    #[must_use]
    pub fn start(&self) -> Option<NodeIndex> {
        self.start
    }

    /// Index of the node with the given id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// The input node at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this story.
    #[must_use]
    pub fn story_node(&self, node: NodeIndex) -> &'a StoryNode {
        &self.nodes[node.index()]
    }

    /// Id of the node at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this story.
    #[must_use]
    pub fn id(&self, node: NodeIndex) -> &'a str {
        self.story_node(node).id.as_str()
    }

    /// Returns `true` if `node` is an ending.
    #[must_use]
    pub fn is_ending(&self, node: NodeIndex) -> bool {
        self.graph.node(node).is_some_and(|n| n.is_ending())
    }

    /// Every input node, indexed by [`NodeIndex`].
    #[must_use]
    pub fn nodes(&self) -> &'a [StoryNode] {
        self.nodes
    }

    /// Indices of all ending nodes, in input order.
    pub fn endings(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .nodes()
            .filter(|(_, node)| node.is_ending())
            .map(|(id, _)| id)
    }

    /// Indices of all start nodes, in input order.
    pub fn starts(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .nodes()
            .filter(|(_, node)| node.is_start())
            .map(|(id, _)| id)
    }

    /// `(target, edge)` for each input edge leaving `node`, in input order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this story.
    pub fn outgoing(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, &'a StoryEdge)> + '_ {
        let edges = self.edges;
        self.graph
            .outgoing_edges(node)
            .map(move |(target, &position)| (target, &edges[position]))
    }
}
