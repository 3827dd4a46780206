//! Graph traversal algorithms.
//!
//! - [`dfs`] - Iterative depth-first search (pre-order), lazily evaluated
//! - [`bfs_distances`] - Breadth-first search recording the hop count from a
//!   start node to every node it reaches

use std::collections::VecDeque;

use crate::graph::{NodeIndex, Successors};

/// Depth-first search iterator over graph nodes.
///
/// Visits each node reachable from the start node exactly once, in pre-order.
/// Successors are explored in edge insertion order.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeIndex>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeIndex) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Reverse push so the first successor is popped first
        let successors: Vec<NodeIndex> = self.graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a depth-first search iterator starting from `start`.
///
/// An out-of-range `start` yields an empty iterator.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{DirectedGraph, NodeIndex, algorithms::dfs};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let order: Vec<NodeIndex> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// assert!(!order.contains(&d));
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeIndex) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Computes shortest hop counts from `start` by breadth-first search.
///
/// Entry `i` of the result is `Some(d)` when node `i` is reachable from
/// `start` through `d` edges, and `None` otherwise. `start` itself is at
/// distance 0. An out-of-range `start` reaches nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{DirectedGraph, algorithms::bfs_distances};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// let lonely = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let dist = bfs_distances(&graph, a);
/// assert_eq!(dist[c.index()], Some(1));
/// assert_eq!(dist[lonely.index()], None);
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn bfs_distances<G: Successors>(graph: &G, start: NodeIndex) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.node_count()];
    if start.index() >= distances.len() {
        return distances;
    }

    distances[start.index()] = Some(0);
    let mut queue = VecDeque::from([(start, 0usize)]);

    while let Some((node, distance)) = queue.pop_front() {
        for succ in graph.successors(node) {
            if distances[succ.index()].is_none() {
                distances[succ.index()] = Some(distance + 1);
                queue.push_back((succ, distance + 1));
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::traversal::{bfs_distances, dfs},
        DirectedGraph, NodeIndex,
    };

    fn graph_with(n: usize, edges: &[(usize, usize)]) -> DirectedGraph<(), ()> {
        let mut graph = DirectedGraph::new();
        for _ in 0..n {
            graph.add_node(());
        }
        for &(s, t) in edges {
            graph
                .add_edge(NodeIndex::new(s), NodeIndex::new(t), ())
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_dfs_preorder_follows_edge_order() {
        // 0 -> 1 -> 3, 0 -> 2
        let graph = graph_with(4, &[(0, 1), (0, 2), (1, 3)]);
        let order: Vec<usize> = dfs(&graph, NodeIndex::new(0)).map(|n| n.index()).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_visits_cycle_once() {
        let graph = graph_with(3, &[(0, 1), (1, 2), (2, 0), (2, 2)]);
        assert_eq!(dfs(&graph, NodeIndex::new(1)).count(), 3);
    }

    #[test]
    fn test_dfs_out_of_range_start() {
        let graph = graph_with(2, &[(0, 1)]);
        assert_eq!(dfs(&graph, NodeIndex::new(7)).count(), 0);
    }

    #[test]
    fn test_bfs_distances_shortest_path_wins() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        let dist = bfs_distances(&graph, NodeIndex::new(0));
        assert_eq!(dist, vec![Some(0), Some(1), Some(2), Some(1), None]);
    }

    #[test]
    fn test_bfs_distances_back_edge_keeps_start_at_zero() {
        let graph = graph_with(2, &[(0, 1), (1, 0)]);
        let dist = bfs_distances(&graph, NodeIndex::new(0));
        assert_eq!(dist, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_bfs_distances_out_of_range_start() {
        let graph = graph_with(2, &[(0, 1)]);
        assert_eq!(bfs_distances(&graph, NodeIndex::new(2)), vec![None, None]);
    }
}
