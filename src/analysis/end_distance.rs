//! Longest remaining route to an ending.
//!
//! A memoized DFS over the whole graph: endings and nodes without successors
//! are at distance 0, every other node is one more than its farthest
//! successor. A successor that is still on the active path contributes 0
//! instead of being re-entered, which cuts every cycle at the point where the
//! DFS first closes it. The result is a conservative approximation that
//! depends on visitation order; exact longest paths on cyclic graphs are not
//! attempted.
//!
//! Roots are taken in node order and successors in edge order, so the
//! approximation is deterministic for a given input.

use crate::graph::{NodeIndex, Successors};

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    InProgress,
    Done,
}

struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    next: usize,
    farthest: usize,
}

/// End-distance of every node, indexed by [`NodeIndex`].
///
/// `is_ending[i]` tells whether node `i` is an ending.
pub(crate) fn end_distances<G: Successors>(graph: &G, is_ending: &[bool]) -> Vec<usize> {
    let node_count = graph.node_count();
    let mut distance = vec![0usize; node_count];
    let mut state = vec![State::Unvisited; node_count];

    for root in graph.node_ids() {
        if state[root.index()] != State::Unvisited {
            continue;
        }

        let mut stack: Vec<Frame> = Vec::new();
        stack.extend(open(graph, root, is_ending, &mut state));

        while let Some(frame) = stack.last_mut() {
            if let Some(&succ) = frame.successors.get(frame.next) {
                frame.next += 1;
                match state[succ.index()] {
                    State::Done => frame.farthest = frame.farthest.max(distance[succ.index()]),
                    State::InProgress => {}
                    State::Unvisited => stack.extend(open(graph, succ, is_ending, &mut state)),
                }
                continue;
            }

            let node = frame.node;
            let value = frame.farthest + 1;
            distance[node.index()] = value;
            state[node.index()] = State::Done;
            stack.pop();

            if let Some(parent) = stack.last_mut() {
                parent.farthest = parent.farthest.max(value);
            }
        }
    }

    distance
}

/// Marks `node` visited. Endings and sinks finish immediately at distance 0;
/// anything else gets a frame to be explored.
fn open<G: Successors>(
    graph: &G,
    node: NodeIndex,
    is_ending: &[bool],
    state: &mut [State],
) -> Option<Frame> {
    if is_ending[node.index()] {
        state[node.index()] = State::Done;
        return None;
    }

    let successors: Vec<NodeIndex> = graph.successors(node).collect();
    if successors.is_empty() {
        state[node.index()] = State::Done;
        return None;
    }

    state[node.index()] = State::InProgress;
    Some(Frame {
        node,
        successors,
        next: 0,
        farthest: 0,
    })
}
