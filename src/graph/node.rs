//! Dense node indices for [`DirectedGraph`](crate::graph::DirectedGraph).
//!
//! Story beats are identified by opaque strings in the public API. Inside the
//! graph layer every beat is mapped once onto a [`NodeIndex`], a `usize`
//! newtype that doubles as the position of the node in every per-node vector
//! the algorithms allocate (`visited`, `lowlink`, memo tables and so on).

use std::fmt;

/// Position of a node inside a [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// Indices are handed out sequentially from 0 by
/// [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node), so a
/// graph with `n` nodes uses exactly the indices `0..n`. That density is what
/// lets the algorithms replace hash sets with plain `Vec<bool>`.
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::NodeIndex;
///
/// let node = NodeIndex::new(3);
/// let depths = vec![0, 1, 1, 2];
/// assert_eq!(depths[node.index()], 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Wraps a raw index.
    ///
    /// Intended for tests and for code that iterates `0..node_count()`;
    /// regular callers receive indices from the graph itself.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    /// Returns the raw 0-based index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}
