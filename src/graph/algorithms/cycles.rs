//! Cycle detection and bounded cycle extraction.
//!
//! [`has_cycle`] answers the yes/no question with one colouring DFS over the
//! whole graph. [`find_cycles`] extracts concrete cycles for diagnostics: a
//! single DFS forest in which every back edge `u -> v` yields the cycle formed
//! by the path from `v` to `u`. Each node is expanded at most once, so the
//! search is linear even on graphs with exponentially many simple cycles. The
//! price is that the result is a sample, not an enumeration.

use crate::graph::{NodeIndex, Successors};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet discovered
    White,
    /// On the current DFS path
    Gray,
    /// Fully explored
    Black,
}

/// Returns `true` if any node of `graph` lies on a directed cycle.
///
/// Runs an iterative colouring DFS from every undiscovered node and reports
/// the first back edge (an edge into a node on the current path). Self-edges
/// count as cycles.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{DirectedGraph, algorithms::has_cycle};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// assert!(!has_cycle(&graph));
///
/// graph.add_edge(b, a, ())?;
/// assert!(has_cycle(&graph));
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G) -> bool {
    let mut color = vec![Color::White; graph.node_count()];

    for root in graph.node_ids() {
        if color[root.index()] != Color::White {
            continue;
        }

        color[root.index()] = Color::Gray;
        let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> =
            vec![(root, graph.successors(root).collect(), 0)];

        while let Some((node, successors, next)) = stack.last_mut() {
            if let Some(&succ) = successors.get(*next) {
                *next += 1;
                match color[succ.index()] {
                    Color::Gray => return true,
                    Color::White => {
                        color[succ.index()] = Color::Gray;
                        let frame = (succ, graph.successors(succ).collect(), 0);
                        stack.push(frame);
                    }
                    Color::Black => {}
                }
            } else {
                color[node.index()] = Color::Black;
                stack.pop();
            }
        }
    }

    false
}

/// Extracts up to `limit` cycles from `graph`.
///
/// Each returned cycle is a non-empty node sequence `[n0, n1, ..., nk]` where
/// every consecutive pair is joined by an edge and `nk -> n0` closes the loop;
/// a self-edge yields the one-element cycle `[n]`. The search stops as soon as
/// `limit` cycles have been collected. Roots are tried in ascending index order
/// and successors in edge insertion order, so repeated calls on the same graph
/// return the same cycles.
///
/// Only one cycle is produced per back edge of a single DFS forest, so the
/// result is a representative sample: an acyclic graph yields nothing, a
/// cyclic graph yields at least one cycle (when `limit > 0`), but not every
/// simple cycle is reported.
///
/// # Complexity
///
/// - Time: O(V + E) plus O(V) per reported cycle for copying the path
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{DirectedGraph, algorithms::find_cycles};
///
/// // A -> B -> C -> A
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// graph.add_edge(c, a, ())?;
///
/// let cycles = find_cycles(&graph, 10);
/// assert_eq!(cycles, vec![vec![a, b, c]]);
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn find_cycles<G: Successors>(graph: &G, limit: usize) -> Vec<Vec<NodeIndex>> {
    let mut cycles = Vec::new();
    if limit == 0 {
        return cycles;
    }

    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_path = vec![false; node_count];
    let mut path: Vec<NodeIndex> = Vec::new();

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        on_path[root.index()] = true;
        path.push(root);
        let mut stack: Vec<(Vec<NodeIndex>, usize)> = vec![(graph.successors(root).collect(), 0)];

        while let Some((successors, next)) = stack.last_mut() {
            let Some(&succ) = successors.get(*next) else {
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path[done.index()] = false;
                }
                continue;
            };
            *next += 1;

            if !visited[succ.index()] {
                visited[succ.index()] = true;
                on_path[succ.index()] = true;
                path.push(succ);
                stack.push((graph.successors(succ).collect(), 0));
            } else if on_path[succ.index()] {
                if let Some(start) = path.iter().position(|&n| n == succ) {
                    cycles.push(path[start..].to_vec());
                    if cycles.len() >= limit {
                        return cycles;
                    }
                }
            }
        }
    }

    cycles
}
