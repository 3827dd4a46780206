// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # storyscope
//!
//! Topology analysis for branching narratives.
//!
//! A story is a directed graph: nodes are story beats, edges are the
//! transitions a reader can take between them. `storyscope` turns a node and
//! edge list into an immutable [`StoryAnalysis`] snapshot with, for every
//! node, its layer depth from the start node, whether it sits in a loop, the
//! longest remaining route to an ending, its degrees and choice count, and
//! the set of endings it can still reach. Globally it reports whether the
//! story has cycles, its strongly connected components and a bounded sample
//! of concrete cycles.
//!
//! ## Features
//!
//! - **Linear-time core** - iterative Tarjan SCC, condensation BFS and
//!   memoized DFS passes; no recursion, so deep stories cannot overflow the stack
//! - **Loop-aware depth** - all members of a loop share one layer
//! - **Bounded diagnostics** - cycle extraction stops at a configurable cap
//! - **Authoring checks** - orphans, dead ends, unconnected and fake choices
//!   via [`validation`]
//! - **Deterministic output** - ordered maps and sets, stable iteration order
//! - **Batch mode** - [`analyze_many`] spreads independent stories over a
//!   `rayon` thread pool
//!
//! ## Quick Start
//!
//! ```rust
//! use storyscope::prelude::*;
//!
//! let nodes = vec![
//!     StoryNode::start("intro").with_choices(3),
//!     StoryNode::normal("cellar"),
//!     StoryNode::ending("escape"),
//!     StoryNode::ending("caught"),
//! ];
//! let edges = vec![
//!     StoryEdge::new("intro", "cellar"),
//!     StoryEdge::new("cellar", "intro"),
//!     StoryEdge::new("cellar", "escape"),
//!     StoryEdge::new("intro", "caught"),
//! ];
//!
//! let analysis = analyze(&nodes, &edges)?;
//!
//! let intro = analysis.node("intro").unwrap();
//! assert!(intro.is_key_decision);
//! assert!(intro.is_in_loop);
//! assert_eq!(intro.reachable_endings.len(), 2);
//!
//! // intro and cellar form one loop and share layer 0
//! assert_eq!(analysis.node("cellar").unwrap().depth, Some(0));
//! assert_eq!(analysis.node("escape").unwrap().depth, Some(1));
//! assert!(analysis.has_cycles);
//! # Ok::<(), storyscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - index-based directed graph and the generic algorithms
//!   (SCC, condensation, cycle search, traversals)
//! - [`story`] - the input model and [`StoryGraph`], which resolves string
//!   ids onto graph indices
//! - [`analysis`] - the topology passes and the [`StoryAnalysis`] snapshot
//! - [`validation`] - structural authoring checks
//! - [`AnalysisConfig`] - tunables shared by analysis and validation
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Logging
//!
//! The crate emits `tracing` events (span per analysis, `debug` summaries,
//! a `warn` when cycle extraction hits its cap). It never installs a
//! subscriber; that is left to the application.

pub(crate) mod config;
pub(crate) mod error;

pub mod analysis;
pub mod graph;
pub mod prelude;
pub mod story;
pub mod validation;

/// `storyscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use error::{Endpoint, Error};

pub use config::AnalysisConfig;

pub use story::{Choice, NodeRole, Story, StoryEdge, StoryGraph, StoryNode};

pub use analysis::{
    analyze, analyze_many, Cycle, NodeAnalysis, StoryAnalysis, StoryAnalyzer,
    StronglyConnectedComponent,
};
