//! SCC partition of a story and loop classification.

use crate::graph::{
    algorithms::{condensation, strongly_connected_components, Condensation},
    NodeIndex, Successors,
};

/// The strongly connected components of a graph, classified.
///
/// Component `i` is `components[i]`; ids follow Tarjan completion order, which
/// is a reverse topological order of the condensation.
#[derive(Debug, Clone)]
pub(crate) struct Partition {
    pub components: Vec<Vec<NodeIndex>>,
    pub is_loop: Vec<bool>,
    pub condensation: Condensation,
}

impl Partition {
    /// Partitions `graph` and classifies every component.
    ///
    /// A component is a loop if it has more than one member, or if its only
    /// member has an edge to itself.
    pub fn compute<G: Successors>(graph: &G) -> Self {
        let components = strongly_connected_components(graph);
        let is_loop = components
            .iter()
            .map(|members| match members.as_slice() {
                [single] => graph.successors(*single).any(|s| s == *single),
                _ => true,
            })
            .collect();
        let condensation = condensation(graph, &components);

        Partition {
            components,
            is_loop,
            condensation,
        }
    }

    /// Component id of `node`.
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.condensation.component_of(node)
    }

    /// Returns `true` if `node` belongs to a loop component.
    pub fn in_loop(&self, node: NodeIndex) -> bool {
        self.is_loop[self.component_of(node)]
    }

    /// Number of loop components.
    pub fn loop_count(&self) -> usize {
        self.is_loop.iter().filter(|&&l| l).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

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
    fn test_singletons_are_not_loops() {
        let partition = Partition::compute(&graph_with(3, &[(0, 1), (1, 2)]));
        assert_eq!(partition.components.len(), 3);
        assert_eq!(partition.loop_count(), 0);
    }

    #[test]
    fn test_self_loop_is_loop() {
        let partition = Partition::compute(&graph_with(2, &[(0, 1), (1, 1)]));
        assert!(!partition.in_loop(NodeIndex::new(0)));
        assert!(partition.in_loop(NodeIndex::new(1)));
        assert_eq!(partition.loop_count(), 1);
    }

    #[test]
    fn test_multi_member_component_is_loop() {
        let partition = Partition::compute(&graph_with(4, &[(0, 1), (1, 2), (2, 1), (2, 3)]));
        let b = partition.component_of(NodeIndex::new(1));
        assert_eq!(b, partition.component_of(NodeIndex::new(2)));
        assert!(partition.is_loop[b]);
        assert!(!partition.in_loop(NodeIndex::new(3)));
    }

    #[test]
    fn test_partition_is_complete() {
        let graph = graph_with(6, &[(0, 1), (1, 0), (2, 3), (4, 4)]);
        let partition = Partition::compute(&graph);

        let mut seen = vec![0usize; 6];
        for members in &partition.components {
            for node in members {
                seen[node.index()] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }
}
