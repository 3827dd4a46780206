//! Adjacency traits the algorithms are written against.
//!
//! The SCC finder, cycle search and traversals only need to know how many
//! nodes exist and how to walk edges. Keeping that behind [`GraphBase`],
//! [`Successors`] and [`Predecessors`] lets the same code run on a
//! [`DirectedGraph`](crate::graph::DirectedGraph), on the quotient graph the
//! depth calculator builds, and on the tiny ad-hoc graphs in unit tests.

use crate::graph::NodeIndex;

/// Node count and node enumeration.
pub trait GraphBase {
    /// Number of nodes. Valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// All node indices in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count()).map(NodeIndex::new)
    }
}

/// Forward edge traversal.
pub trait Successors: GraphBase {
    /// Targets of the edges leaving `node`, in edge insertion order.
    ///
    /// Parallel edges yield the same target more than once.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a node of this graph.
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex>;
}

/// Backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Sources of the edges entering `node`, in edge insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a node of this graph.
    fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EdgeListGraph {
        node_count: usize,
        edges: Vec<(usize, usize)>,
    }

    impl GraphBase for EdgeListGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }
    }

    impl Successors for EdgeListGraph {
        fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == node.index())
                .map(|&(_, dst)| NodeIndex::new(dst))
        }
    }

    impl Predecessors for EdgeListGraph {
        fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
            self.edges
                .iter()
                .filter(move |(_, dst)| *dst == node.index())
                .map(|&(src, _)| NodeIndex::new(src))
        }
    }

    #[test]
    fn test_default_node_ids() {
        let graph = EdgeListGraph {
            node_count: 3,
            edges: vec![],
        };
        let ids: Vec<NodeIndex> = graph.node_ids().collect();
        assert_eq!(ids, vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)]);
    }

    #[test]
    fn test_parallel_edges_are_repeated() {
        let graph = EdgeListGraph {
            node_count: 2,
            edges: vec![(0, 1), (0, 1)],
        };
        assert_eq!(graph.successors(NodeIndex::new(0)).count(), 2);
        assert_eq!(graph.predecessors(NodeIndex::new(1)).count(), 2);
        assert_eq!(graph.successors(NodeIndex::new(1)).count(), 0);
    }
}
