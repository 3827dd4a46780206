use strum::Display;
use thiserror::Error;

/// Which end of an edge an [`Error::UnknownNode`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    /// The node the edge leaves
    Source,
    /// The node the edge enters
    Target,
}

/// The generic Error type, which covers every failure this library can report.
///
/// All variants describe malformed input or an internal graph misuse. No
/// variant is ever returned together with a partial result: when
/// [`analyze`](crate::analyze) fails, no snapshot exists.
///
/// # Error Categories
///
/// ## Malformed Story Input
/// - [`Error::UnknownNode`] - An edge references a node id that is not in the node list
/// - [`Error::DuplicateNode`] - The same node id appears twice in the node list
///
/// ## Graph Errors
/// - [`Error::GraphError`] - A graph operation was given an index that does not exist
///
/// # Examples
///
/// ```rust
/// use storyscope::{analyze, Error, StoryEdge, StoryNode};
///
/// let nodes = vec![StoryNode::start("intro")];
/// let edges = vec![StoryEdge::new("intro", "missing")];
///
/// match analyze(&nodes, &edges) {
///     Err(Error::UnknownNode { edge, node, .. }) => {
///         assert_eq!(edge, 0);
///         assert_eq!(node, "missing");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge references a node id that is absent from the node list.
    ///
    /// # Fields
    ///
    /// * `edge` - Position of the offending edge in the input edge list
    /// * `node` - The id that could not be resolved
    /// * `endpoint` - Whether the id was the edge's source or its target
    #[error("edge {edge} references unknown {endpoint} node '{node}'")]
    UnknownNode {
        /// Position of the edge in the input list
        edge: usize,
        /// The unresolved node id
        node: String,
        /// Which end of the edge is dangling
        endpoint: Endpoint,
    },

    /// The same node id appears more than once in the node list.
    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    /// Internal graph construction failure.
    ///
    /// Returned by [`DirectedGraph::add_edge`](crate::graph::DirectedGraph::add_edge)
    /// when an endpoint index is out of range.
    #[error("{0}")]
    GraphError(String),
}
