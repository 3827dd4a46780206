use std::fmt;

use serde::{Deserialize, Serialize};
use strum::Display;

/// How serious a finding is.
///
/// Any [`Severity::Error`] makes the story invalid; warnings never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structural problem that breaks the story
    Error,
    /// Suspicious structure that may be intended
    Warning,
}

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// No node has the start role
    NoStartNode,
    /// More than one node has the start role
    MultipleStartNodes,
    /// A non-start node cannot be reached from the start node
    OrphanNode,
    /// A non-ending node has no outgoing edge
    DeadEnd,
    /// An authored choice has no edge realising it
    UnconnectedChoice,
    /// The story contains a cycle
    CircularReference,
    /// The story has no ending node
    NoEndings,
    /// An ending cannot be reached from the start node
    UnreachableEnding,
    /// Endings exist but none can be reached from the start node
    NoReachableEnding,
    /// Every choice of a node leads to the same target
    FakeChoice,
    /// Several edges of one node lead to the same target
    DuplicateChoiceTarget,
}

impl FindingKind {
    /// Severity every finding of this kind carries.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            FindingKind::NoStartNode
            | FindingKind::MultipleStartNodes
            | FindingKind::OrphanNode
            | FindingKind::DeadEnd
            | FindingKind::UnconnectedChoice
            | FindingKind::NoReachableEnding => Severity::Error,
            FindingKind::CircularReference
            | FindingKind::NoEndings
            | FindingKind::UnreachableEnding
            | FindingKind::FakeChoice
            | FindingKind::DuplicateChoiceTarget => Severity::Warning,
        }
    }
}

/// A single validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Error or warning
    pub severity: Severity,
    /// Which check produced it
    pub kind: FindingKind,
    /// The node it concerns, if it concerns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    pub(crate) fn new(kind: FindingKind, node: Option<&str>, message: String) -> Self {
        Finding {
            severity: kind.severity(),
            kind,
            node: node.map(str::to_string),
            message,
        }
    }

    /// Returns `true` for error findings.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// All findings for one story, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in the order the checks ran
    pub findings: Vec<Finding>,
    /// `true` iff no finding is an error
    pub valid: bool,
}

impl ValidationReport {
    pub(crate) fn from_findings(findings: Vec<Finding>) -> Self {
        let valid = !findings.iter().any(Finding::is_error);
        ValidationReport { findings, valid }
    }

    /// Error findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    /// Warning findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Findings of one kind.
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Returns `true` if any finding has the given kind.
    #[must_use]
    pub fn has(&self, kind: FindingKind) -> bool {
        self.of_kind(kind).next().is_some()
    }
}
