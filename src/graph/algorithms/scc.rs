//! Strongly connected components (Tarjan) and the condensation graph.
//!
//! A strongly connected component is a maximal node set in which every node
//! can reach every other. In a story graph these are the loops: beats the
//! reader can cycle through indefinitely. Collapsing every component into a
//! single vertex yields the [`Condensation`], which is always acyclic and is
//! what the depth calculator walks to give all loop members one layer.
//!
//! Tarjan's algorithm is driven by an explicit call stack rather than native
//! recursion, so a long chain of beats cannot overflow the thread stack.

use crate::graph::{GraphBase, NodeIndex, Successors};

/// Computes the strongly connected components of `graph`.
///
/// Every node appears in exactly one component; isolated nodes and nodes that
/// only have a self-edge form singleton components. Components are returned in
/// **reverse topological order**: if some edge leads from component A to
/// component B, B is listed before A. Roots are tried in ascending index order
/// and successors in edge insertion order, so the output is deterministic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{DirectedGraph, algorithms::strongly_connected_components};
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0], vec![c]); // sink component first
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeIndex>>
where
    G: Successors,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(node_count);
    for node in graph.node_ids() {
        if state.index[node.index()].is_none() {
            state.strongconnect(graph, node);
        }
    }

    state.sccs
}

/// One suspended `strongconnect(v)` activation.
struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    next: usize,
}

struct TarjanState {
    /// Discovery order, `None` until visited
    index: Vec<Option<usize>>,
    /// Smallest discovery index reachable through the DFS subtree plus one back edge
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    current_index: usize,
    sccs: Vec<Vec<NodeIndex>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn discover<G: Successors>(&mut self, graph: &G, v: NodeIndex) -> Frame {
        let v_idx = v.index();
        self.index[v_idx] = Some(self.current_index);
        self.lowlink[v_idx] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v_idx] = true;

        Frame {
            node: v,
            successors: graph.successors(v).collect(),
            next: 0,
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: NodeIndex) {
        let mut call_stack = vec![self.discover(graph, root)];

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.node;

            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                let w_idx = w.index();

                match self.index[w_idx] {
                    None => {
                        let child = self.discover(graph, w);
                        call_stack.push(child);
                    }
                    Some(w_index) if self.on_stack[w_idx] => {
                        let v_idx = v.index();
                        self.lowlink[v_idx] = self.lowlink[v_idx].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors of v are done: v's activation returns.
            call_stack.pop();
            let v_idx = v.index();

            if Some(self.lowlink[v_idx]) == self.index[v_idx] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }

            if let Some(parent) = call_stack.last() {
                let p_idx = parent.node.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(self.lowlink[v_idx]);
            }
        }
    }
}

/// The quotient graph obtained by collapsing each component to one vertex.
///
/// Vertex `i` of the condensation stands for `sccs[i]`. Only edges between
/// different components survive, each at most once. The condensation is a DAG
/// and implements [`Successors`], so the generic traversals run on it directly.
#[derive(Debug, Clone)]
pub struct Condensation {
    node_to_component: Vec<usize>,
    adjacency: Vec<Vec<NodeIndex>>,
}

impl Condensation {
    /// Component index of an original node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of the original graph.
    #[must_use]
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.node_to_component[node.index()]
    }

    /// The full node-to-component map, indexed by original node index.
    #[must_use]
    pub fn components(&self) -> &[usize] {
        &self.node_to_component
    }

    /// Number of distinct inter-component edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl GraphBase for Condensation {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl Successors for Condensation {
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
        self.adjacency[node.index()].iter().copied()
    }
}

/// Builds the [`Condensation`] of `graph` for a partition produced by
/// [`strongly_connected_components`].
///
/// Inter-component edges keep the order in which they are first met while
/// scanning nodes by ascending index and their successors in insertion order.
///
/// # Examples
///
/// ```rust
/// use storyscope::graph::{
///     DirectedGraph, GraphBase,
///     algorithms::{condensation, strongly_connected_components},
/// };
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let sccs = strongly_connected_components(&graph);
/// let dag = condensation(&graph, &sccs);
/// assert_eq!(dag.component_of(a), dag.component_of(b));
/// assert_eq!(dag.node_count(), 2);
/// assert_eq!(dag.edge_count(), 1);
/// # Ok::<(), storyscope::Error>(())
/// ```
pub fn condensation<G>(graph: &G, sccs: &[Vec<NodeIndex>]) -> Condensation
where
    G: Successors,
{
    let mut node_to_component = vec![0; graph.node_count()];
    for (component, members) in sccs.iter().enumerate() {
        for &node in members {
            node_to_component[node.index()] = component;
        }
    }

    let mut adjacency: Vec<Vec<NodeIndex>> = vec![Vec::new(); sccs.len()];
    let mut seen = std::collections::HashSet::new();

    for from in graph.node_ids() {
        let from_component = node_to_component[from.index()];
        for to in graph.successors(from) {
            let to_component = node_to_component[to.index()];
            if from_component != to_component && seen.insert((from_component, to_component)) {
                adjacency[from_component].push(NodeIndex::new(to_component));
            }
        }
    }

    Condensation {
        node_to_component,
        adjacency,
    }
}
