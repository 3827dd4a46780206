//! Generic directed graph infrastructure.
//!
//! The story layer never runs algorithms on string ids. It maps every beat
//! onto a dense [`NodeIndex`] once, stores the edges in a [`DirectedGraph`],
//! and hands that to the algorithms in [`algorithms`].
//!
//! # Key Components
//!
//! - [`NodeIndex`] - Strongly-typed node identifier
//! - [`DirectedGraph`] - Adjacency-list multigraph with forward and reverse edges
//! - [`GraphBase`], [`Successors`], [`Predecessors`] - Traits the algorithms are generic over
//! - [`algorithms`] - Traversal, SCC, condensation and cycle search
//!
//! # Usage Examples
//!
//! ```rust
//! use storyscope::graph::{DirectedGraph, NodeIndex, algorithms};
//!
//! // A -> B -> C -> B
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(b, c, ())?;
//! graph.add_edge(c, b, ())?;
//!
//! let order: Vec<NodeIndex> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//!
//! let sccs = algorithms::strongly_connected_components(&graph);
//! assert_eq!(sccs.len(), 2);
//! assert!(algorithms::has_cycle(&graph));
//! # Ok::<(), storyscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`DirectedGraph`] is [`Send`] and [`Sync`] when its payload types are.
//! Graphs are built once and then only read.

pub mod algorithms;
mod directed;
mod node;
mod traits;

pub use directed::DirectedGraph;
pub use node::NodeIndex;
pub use traits::{GraphBase, Predecessors, Successors};
