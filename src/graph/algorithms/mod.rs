//! Graph algorithms for story topology analysis.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs_distances`] - Breadth-first hop counts from a start node
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycles
//! - [`find_cycles`] - Extract up to a given number of concrete cycles
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm
//! - [`condensation`] - Collapse each component into one vertex of a DAG
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, layer depth |
//! | Cycle search | O(V + E) | Loop diagnostics |
//! | SCC | O(V + E) | Loop grouping, quotient graph |
//!
//! All algorithms are iterative and take the graph through the
//! [`Successors`](crate::graph::Successors) trait.

mod cycles;
mod scc;
mod traversal;

pub use cycles::{find_cycles, has_cycle};
pub use scc::{condensation, strongly_connected_components, Condensation};
pub use traversal::{bfs_distances, dfs, DfsIterator};
