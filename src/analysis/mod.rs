//! Story topology analysis.
//!
//! [`StoryAnalyzer`] turns a node and edge list into a [`StoryAnalysis`]
//! snapshot. Internally the work is split into independent passes, each
//! operating on the resolved [`StoryGraph`](crate::StoryGraph):
//!
//! - **Components** - Tarjan SCC partition, loop classification and the
//!   condensation DAG
//! - **Depth** - BFS layers from the start node over the condensation, so
//!   loop members share one layer
//! - **End distance** - longest cycle-safe route to an ending
//! - **Reachability** - endings reachable from each node
//!
//! Cycle detection and bounded cycle extraction come straight from
//! [`graph::algorithms`](crate::graph::algorithms). The aggregator adds degree
//! counts and choice metadata and assembles the snapshot.
//!
//! # Determinism
//!
//! Every pass walks nodes in input order and successors in edge order. The
//! only order-sensitive outputs (SCC ids, the cycle sample and the end
//! distance approximation on cyclic graphs) are therefore stable for a given
//! input, and set-valued outputs are ordered collections.
//!
//! # Examples
//!
//! ```rust
//! use storyscope::{analyze, StoryEdge, StoryNode};
//!
//! let nodes = vec![StoryNode::start("1"), StoryNode::normal("2")];
//! let edges = vec![StoryEdge::new("1", "2"), StoryEdge::new("2", "1")];
//!
//! let analysis = analyze(&nodes, &edges)?;
//! assert!(analysis.has_cycles);
//! assert_eq!(analysis.sccs.len(), 1);
//! assert!(analysis.node("2").unwrap().is_in_loop);
//! assert_eq!(analysis.node("1").unwrap().depth, analysis.node("2").unwrap().depth);
//! # Ok::<(), storyscope::Error>(())
//! ```

mod analyzer;
mod components;
mod depth;
mod end_distance;
mod reachability;
mod snapshot;

pub use analyzer::{analyze, analyze_many, StoryAnalyzer};
pub use snapshot::{Cycle, NodeAnalysis, StoryAnalysis, StronglyConnectedComponent};
