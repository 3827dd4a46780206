use tracing::{debug, instrument};

use crate::{
    analysis::Cycle,
    config::AnalysisConfig,
    graph::{
        algorithms::{dfs, find_cycles},
        NodeIndex,
    },
    story::{Story, StoryEdge, StoryGraph, StoryNode},
    validation::report::{Finding, FindingKind, ValidationReport},
    Result,
};

/// Structural authoring checks for a story.
///
/// Checks run in a fixed order: start nodes, orphans, dead ends, unconnected
/// choices, cycles, ending reachability and, if enabled, fake choices. The
/// report lists findings in that order.
///
/// # Examples
///
/// ```rust
/// use storyscope::{validation::{FindingKind, StoryValidator}, StoryEdge, StoryNode};
///
/// let nodes = vec![
///     StoryNode::start("s"),
///     StoryNode::normal("hall"),
///     StoryNode::ending("e"),
/// ];
/// let edges = vec![StoryEdge::new("s", "e")];
///
/// let report = StoryValidator::default().validate(&nodes, &edges)?;
/// assert!(!report.valid);
/// assert!(report.has(FindingKind::OrphanNode));
/// assert!(report.has(FindingKind::DeadEnd));
/// # Ok::<(), storyscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryValidator {
    config: AnalysisConfig,
}

impl StoryValidator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        StoryValidator { config }
    }

    /// Validates one story given as node and edge lists.
    ///
    /// # Errors
    ///
    /// Malformed input (duplicate node ids, edges to unknown nodes) is an
    /// [`Error`](crate::Error), not a finding.
    #[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn validate(&self, nodes: &[StoryNode], edges: &[StoryEdge]) -> Result<ValidationReport> {
        let story = StoryGraph::build(nodes, edges)?;
        let mut findings = Vec::new();

        let reachable = story.start().map(|start| {
            let mut seen = vec![false; story.node_count()];
            for node in dfs(story.graph(), start) {
                seen[node.index()] = true;
            }
            seen
        });

        check_start_nodes(&story, &mut findings);
        if let Some(reachable) = &reachable {
            check_orphans(&story, reachable, &mut findings);
        }
        check_dead_ends(&story, &mut findings);
        check_unconnected_choices(&story, &mut findings);
        self.check_cycles(&story, &mut findings);
        check_ending_reachability(&story, reachable.as_deref(), &mut findings);
        if self.config.fake_choice_detection {
            check_fake_choices(&story, &mut findings);
        }

        let report = ValidationReport::from_findings(findings);
        debug!(
            findings = report.findings.len(),
            valid = report.valid,
            "validation finished"
        );
        Ok(report)
    }

    /// Validates a [`Story`].
    ///
    /// # Errors
    ///
    /// See [`StoryValidator::validate`].
    pub fn validate_story(&self, story: &Story) -> Result<ValidationReport> {
        self.validate(&story.nodes, &story.edges)
    }

    fn check_cycles(&self, story: &StoryGraph<'_>, findings: &mut Vec<Finding>) {
        for cycle in find_cycles(story.graph(), self.config.max_cycles) {
            let first = cycle.first().map(|&n| story.id(n));
            let cycle = Cycle {
                nodes: cycle.iter().map(|&n| story.id(n).to_string()).collect(),
            };
            findings.push(Finding::new(
                FindingKind::CircularReference,
                first,
                format!("cycle detected: {cycle}"),
            ));
        }
    }
}

/// Validates a story with the default configuration.
///
/// # Errors
///
/// See [`StoryValidator::validate`].
pub fn validate(nodes: &[StoryNode], edges: &[StoryEdge]) -> Result<ValidationReport> {
    StoryValidator::default().validate(nodes, edges)
}

fn check_start_nodes(story: &StoryGraph<'_>, findings: &mut Vec<Finding>) {
    match story.starts().count() {
        0 => findings.push(Finding::new(
            FindingKind::NoStartNode,
            None,
            "story has no start node".to_string(),
        )),
        1 => {}
        count => findings.push(Finding::new(
            FindingKind::MultipleStartNodes,
            None,
            format!("story has {count} start nodes, expected exactly one"),
        )),
    }
}

fn check_orphans(story: &StoryGraph<'_>, reachable: &[bool], findings: &mut Vec<Finding>) {
    for (index, node) in story.nodes().iter().enumerate() {
        if !reachable[index] && !node.is_start() {
            findings.push(Finding::new(
                FindingKind::OrphanNode,
                Some(node.id.as_str()),
                format!("node '{}' cannot be reached from the start node", node.id),
            ));
        }
    }
}

fn check_dead_ends(story: &StoryGraph<'_>, findings: &mut Vec<Finding>) {
    for (index, node) in story.nodes().iter().enumerate() {
        if !node.is_ending() && story.graph().out_degree(NodeIndex::new(index)) == 0 {
            findings.push(Finding::new(
                FindingKind::DeadEnd,
                Some(node.id.as_str()),
                format!(
                    "node '{}' is not an ending but has no outgoing transition",
                    node.id
                ),
            ));
        }
    }
}

fn check_unconnected_choices(story: &StoryGraph<'_>, findings: &mut Vec<Finding>) {
    for (index, node) in story.nodes().iter().enumerate() {
        if node.is_ending() {
            continue;
        }
        for choice in &node.choices {
            let connected = story
                .outgoing(NodeIndex::new(index))
                .any(|(_, edge)| edge.choice.as_deref() == Some(choice.id.as_str()));
            if !connected {
                findings.push(Finding::new(
                    FindingKind::UnconnectedChoice,
                    Some(node.id.as_str()),
                    format!(
                        "choice '{}' of node '{}' does not lead anywhere",
                        choice.text, node.id
                    ),
                ));
            }
        }
    }
}

fn check_ending_reachability(
    story: &StoryGraph<'_>,
    reachable: Option<&[bool]>,
    findings: &mut Vec<Finding>,
) {
    let endings: Vec<NodeIndex> = story.endings().collect();
    if endings.is_empty() {
        findings.push(Finding::new(
            FindingKind::NoEndings,
            None,
            "story has no ending node".to_string(),
        ));
        return;
    }

    let Some(reachable) = reachable else {
        return;
    };

    let mut any_reachable = false;
    for ending in endings {
        if reachable[ending.index()] {
            any_reachable = true;
        } else {
            let id = story.id(ending);
            findings.push(Finding::new(
                FindingKind::UnreachableEnding,
                Some(id),
                format!("ending '{id}' cannot be reached from the start node"),
            ));
        }
    }

    if !any_reachable {
        findings.push(Finding::new(
            FindingKind::NoReachableEnding,
            None,
            "no ending can be reached from the start node".to_string(),
        ));
    }
}

fn check_fake_choices(story: &StoryGraph<'_>, findings: &mut Vec<Finding>) {
    for (index, node) in story.nodes().iter().enumerate() {
        if node.is_ending() || node.choice_count() < 2 {
            continue;
        }

        // (target, edge count) in first-seen order
        let mut targets: Vec<(NodeIndex, usize)> = Vec::new();
        for target in story.graph().successors(NodeIndex::new(index)) {
            match targets.iter_mut().find(|(t, _)| *t == target) {
                Some((_, count)) => *count += 1,
                None => targets.push((target, 1)),
            }
        }

        if targets.len() == 1 {
            findings.push(Finding::new(
                FindingKind::FakeChoice,
                Some(node.id.as_str()),
                format!("all choices of node '{}' lead to the same node", node.id),
            ));
        }

        for (target, count) in targets {
            if count > 1 {
                findings.push(Finding::new(
                    FindingKind::DuplicateChoiceTarget,
                    Some(node.id.as_str()),
                    format!(
                        "node '{}' has {count} transitions to '{}'",
                        node.id,
                        story.id(target)
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(report: &ValidationReport) -> Vec<FindingKind> {
        report.findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_clean_story_is_valid() {
        let nodes = vec![
            StoryNode::start("s").with_choice("go", "Go on"),
            StoryNode::ending("e"),
        ];
        let edges = vec![StoryEdge::new("s", "e").via("go")];
        let report = validate(&nodes, &edges).unwrap();
        assert!(report.valid);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_no_start_skips_reachability_checks() {
        let nodes = vec![StoryNode::normal("a"), StoryNode::ending("e")];
        let edges = vec![StoryEdge::new("a", "e")];
        let report = validate(&nodes, &edges).unwrap();
        assert_eq!(kinds(&report), vec![FindingKind::NoStartNode]);
        assert!(!report.valid);
    }

    #[test]
    fn test_multiple_starts_second_not_orphan() {
        let nodes = vec![
            StoryNode::start("s1"),
            StoryNode::start("s2"),
            StoryNode::ending("e"),
        ];
        let edges = vec![StoryEdge::new("s1", "e"), StoryEdge::new("s2", "e")];
        let report = validate(&nodes, &edges).unwrap();
        assert_eq!(kinds(&report), vec![FindingKind::MultipleStartNodes]);
    }

    #[test]
    fn test_unconnected_choice_uses_choice_text() {
        let nodes = vec![
            StoryNode::start("s")
                .with_choice("a", "Open the door")
                .with_choice("b", "Walk away"),
            StoryNode::ending("e"),
        ];
        let edges = vec![StoryEdge::new("s", "e").via("a")];
        let report = validate(&nodes, &edges).unwrap();

        let unconnected: Vec<&Finding> = report.of_kind(FindingKind::UnconnectedChoice).collect();
        assert_eq!(unconnected.len(), 1);
        assert!(unconnected[0].message.contains("Walk away"));
        assert_eq!(unconnected[0].node.as_deref(), Some("s"));
    }

    #[test]
    fn test_fake_choice_and_duplicate_target() {
        let nodes = vec![
            StoryNode::start("s")
                .with_choice("a", "Left")
                .with_choice("b", "Right"),
            StoryNode::ending("e"),
        ];
        let edges = vec![
            StoryEdge::new("s", "e").via("a"),
            StoryEdge::new("s", "e").via("b"),
        ];

        let report = validate(&nodes, &edges).unwrap();
        assert_eq!(
            kinds(&report),
            vec![FindingKind::FakeChoice, FindingKind::DuplicateChoiceTarget]
        );
        assert!(report.valid);

        let quiet = StoryValidator::new(AnalysisConfig::default().with_fake_choice_detection(false))
            .validate(&nodes, &edges)
            .unwrap();
        assert!(quiet.findings.is_empty());
    }

    #[test]
    fn test_cycle_findings_follow_cap() {
        let nodes = vec![
            StoryNode::start("a"),
            StoryNode::normal("b"),
            StoryNode::ending("e"),
        ];
        let edges = vec![
            StoryEdge::new("a", "b"),
            StoryEdge::new("b", "a"),
            StoryEdge::new("b", "b"),
            StoryEdge::new("b", "e"),
        ];

        let report = validate(&nodes, &edges).unwrap();
        let cycles: Vec<&Finding> = report.of_kind(FindingKind::CircularReference).collect();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].message, "cycle detected: a -> b -> a");
        assert!(report.valid);

        let capped = StoryValidator::new(AnalysisConfig::default().with_max_cycles(1))
            .validate(&nodes, &edges)
            .unwrap();
        assert_eq!(capped.of_kind(FindingKind::CircularReference).count(), 1);
    }

    #[test]
    fn test_no_reachable_ending() {
        let nodes = vec![
            StoryNode::start("s"),
            StoryNode::normal("loop"),
            StoryNode::ending("e"),
        ];
        let edges = vec![
            StoryEdge::new("s", "loop"),
            StoryEdge::new("loop", "s"),
        ];
        let report = validate(&nodes, &edges).unwrap();

        assert!(report.has(FindingKind::OrphanNode));
        assert!(report.has(FindingKind::UnreachableEnding));
        assert!(report.has(FindingKind::NoReachableEnding));
        assert!(!report.valid);
    }

    #[test]
    fn test_malformed_is_error_not_finding() {
        let nodes = vec![StoryNode::start("s")];
        let edges = vec![StoryEdge::new("s", "ghost")];
        assert!(validate(&nodes, &edges).is_err());
    }
}
