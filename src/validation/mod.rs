//! Structural authoring checks.
//!
//! Where [`analysis`](crate::analysis) measures a story, validation judges it:
//! it looks for structure that is almost certainly an authoring mistake
//! (unreachable beats, dead ends, choices that lead nowhere) or that deserves
//! a second look (cycles, choices that all lead to the same place).
//!
//! | Kind | Severity | Condition |
//! |------|----------|-----------|
//! | [`FindingKind::NoStartNode`] | Error | no node has the start role |
//! | [`FindingKind::MultipleStartNodes`] | Error | more than one start node |
//! | [`FindingKind::OrphanNode`] | Error | non-start node unreachable from the start node |
//! | [`FindingKind::DeadEnd`] | Error | non-ending node without outgoing edges |
//! | [`FindingKind::UnconnectedChoice`] | Error | a choice no edge realises |
//! | [`FindingKind::CircularReference`] | Warning | one per extracted cycle |
//! | [`FindingKind::NoEndings`] | Warning | no ending node at all |
//! | [`FindingKind::UnreachableEnding`] | Warning | ending unreachable from the start node |
//! | [`FindingKind::NoReachableEnding`] | Error | endings exist, none reachable |
//! | [`FindingKind::FakeChoice`] | Warning | two or more choices, one distinct target |
//! | [`FindingKind::DuplicateChoiceTarget`] | Warning | several edges of a multi-choice node hit one target |
//!
//! The last two only run when
//! [`AnalysisConfig::fake_choice_detection`](crate::AnalysisConfig::fake_choice_detection)
//! is set. Reachability checks are skipped when there is no start node.

mod report;
mod validator;

pub use report::{Finding, FindingKind, Severity, ValidationReport};
pub use validator::{validate, StoryValidator};
