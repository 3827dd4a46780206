//! Endings reachable from each node.
//!
//! One DFS per node, not shared between nodes. An ending is collected when
//! reached but never expanded, so an ending only counts as reachable through
//! paths that do not pass another ending first. A node that is itself an
//! ending reaches exactly itself.

use crate::graph::{NodeIndex, Successors};

/// Reachable endings of every node, indexed by [`NodeIndex`], each list in
/// discovery order.
pub(crate) fn reachable_endings<G: Successors>(graph: &G, is_ending: &[bool]) -> Vec<Vec<NodeIndex>> {
    let node_count = graph.node_count();
    // stamp[i] == root + 1 means node i was seen in the search from root
    let mut stamp = vec![0usize; node_count];
    let mut stack: Vec<NodeIndex> = Vec::new();

    graph
        .node_ids()
        .map(|root| {
            if is_ending[root.index()] {
                return vec![root];
            }

            let mark = root.index() + 1;
            let mut found = Vec::new();
            stamp[root.index()] = mark;
            stack.clear();
            stack.extend(graph.successors(root));

            while let Some(node) = stack.pop() {
                if stamp[node.index()] == mark {
                    continue;
                }
                stamp[node.index()] = mark;

                if is_ending[node.index()] {
                    found.push(node);
                } else {
                    stack.extend(graph.successors(node));
                }
            }

            found
        })
        .collect()
}
