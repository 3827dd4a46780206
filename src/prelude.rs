//! # storyscope Prelude
//!
//! Convenient re-exports of the types most callers need: the input model,
//! the analyzer and its snapshot, and the validator.
//!
//! ```rust
//! use storyscope::prelude::*;
//!
//! let nodes = vec![StoryNode::start("s"), StoryNode::ending("e")];
//! let edges = vec![StoryEdge::new("s", "e")];
//!
//! let analysis = analyze(&nodes, &edges)?;
//! let report = StoryValidator::default().validate(&nodes, &edges)?;
//! assert_eq!(analysis.max_depth, 1);
//! assert!(report.valid);
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all storyscope operations
pub use crate::Error;

/// The result type used throughout storyscope
pub use crate::Result;

/// Configuration shared by analysis and validation
pub use crate::AnalysisConfig;

// ================================================================================================
// Input Model
// ================================================================================================

/// Story nodes, edges and choices
pub use crate::story::{Choice, NodeRole, Story, StoryEdge, StoryNode};

// ================================================================================================
// Analysis
// ================================================================================================

/// Entry points for topology analysis
pub use crate::analysis::{analyze, analyze_many, StoryAnalyzer};

/// Analysis snapshot types
pub use crate::analysis::{Cycle, NodeAnalysis, StoryAnalysis, StronglyConnectedComponent};

// ================================================================================================
// Validation
// ================================================================================================

/// Authoring checks and their report
pub use crate::validation::{Finding, FindingKind, Severity, StoryValidator, ValidationReport};
