//! Immutable analysis results.
//!
//! Everything in here is plain data keyed by node id strings. Map- and
//! set-valued fields are ordered collections, so two snapshots of the same
//! story compare equal and serialize byte-for-byte identically. Field names
//! serialize in camelCase for the editor front end.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

/// Per-node metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAnalysis {
    /// Id of the node these metrics describe
    pub node_id: String,
    /// Layer distance from the start node; `None` if unreachable from it
    pub depth: Option<usize>,
    /// Id of the strongly connected component containing the node
    pub scc_id: usize,
    /// Whether that component is a loop
    pub is_in_loop: bool,
    /// Longest cycle-safe route to an ending, in edges
    pub max_depth_to_end: usize,
    /// Number of outgoing edges, parallel edges included
    pub out_degree: usize,
    /// Number of incoming edges, parallel edges included
    pub in_degree: usize,
    /// Number of authored choices, independent of the edges
    pub choice_count: usize,
    /// Whether the node has at least the configured number of choices
    pub is_key_decision: bool,
    /// Ids of the endings reachable from the node
    pub reachable_endings: BTreeSet<String>,
}

impl NodeAnalysis {
    /// Returns `true` if the node can be reached from the start node.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.depth.is_some()
    }
}

/// A maximal set of mutually reachable nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StronglyConnectedComponent {
    /// Position in [`StoryAnalysis::sccs`]
    pub id: usize,
    /// Member node ids
    pub nodes: BTreeSet<String>,
    /// More than one member, or a single member with an edge to itself
    pub is_loop: bool,
}

impl StronglyConnectedComponent {
    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Components are never empty; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` is a member.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }
}

/// A concrete cycle `[n0, n1, ..., nk]` closed by the edge `nk -> n0`.
///
/// The closing node is not repeated; a self-edge yields a one-element cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Node ids along the cycle
    pub nodes: Vec<String>,
}

impl Cycle {
    /// Number of nodes on the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Cycles are never empty; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Cycle {
    /// Formats as `a -> b -> c -> a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.nodes.first() else {
            return Ok(());
        };
        for node in &self.nodes {
            write!(f, "{node} -> ")?;
        }
        write!(f, "{first}")
    }
}

/// Topology snapshot of a whole story.
///
/// Built fresh by every analysis call and never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use storyscope::{analyze, StoryEdge, StoryNode};
///
/// let nodes = vec![
///     StoryNode::start("1"),
///     StoryNode::normal("2"),
///     StoryNode::ending("3"),
/// ];
/// let edges = vec![StoryEdge::new("1", "2"), StoryEdge::new("2", "3")];
///
/// let analysis = analyze(&nodes, &edges)?;
/// assert_eq!(analysis.max_depth, 2);
/// assert_eq!(analysis.node("2").unwrap().depth, Some(1));
/// assert!(!analysis.has_cycles);
/// # Ok::<(), storyscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAnalysis {
    /// Metrics for every node, keyed by node id
    pub nodes: BTreeMap<String, NodeAnalysis>,
    /// Largest finite depth; 0 without a start node
    pub max_depth: usize,
    /// Id of the start node the depths are measured from
    pub start_node_id: Option<String>,
    /// Ids of all ending nodes, in input order
    pub ending_node_ids: Vec<String>,
    /// Whether the story contains any cycle
    pub has_cycles: bool,
    /// All strongly connected components, indexed by id
    pub sccs: Vec<StronglyConnectedComponent>,
    /// A bounded sample of concrete cycles
    pub cycles: Vec<Cycle>,
}

impl StoryAnalysis {
    /// The result for a story without a start node: nothing analyzed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if no node was analyzed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Metrics of the node with the given id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NodeAnalysis> {
        self.nodes.get(id)
    }

    /// The component containing the node with the given id.
    #[must_use]
    pub fn component_of(&self, id: &str) -> Option<&StronglyConnectedComponent> {
        self.node(id).and_then(|node| self.sccs.get(node.scc_id))
    }

    /// Components classified as loops.
    pub fn loop_components(&self) -> impl Iterator<Item = &StronglyConnectedComponent> {
        self.sccs.iter().filter(|scc| scc.is_loop)
    }

    /// Nodes that cannot be reached from the start node, in id order.
    pub fn unreachable_nodes(&self) -> impl Iterator<Item = &NodeAnalysis> {
        self.nodes.values().filter(|node| !node.is_reachable())
    }

    /// Nodes flagged as key decisions, in id order.
    pub fn key_decisions(&self) -> impl Iterator<Item = &NodeAnalysis> {
        self.nodes.values().filter(|node| node.is_key_decision)
    }
}
