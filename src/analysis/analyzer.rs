use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::{
    analysis::{
        components::Partition,
        depth::layer_depths,
        end_distance::end_distances,
        reachability::reachable_endings,
        snapshot::{Cycle, NodeAnalysis, StoryAnalysis, StronglyConnectedComponent},
    },
    config::AnalysisConfig,
    graph::{
        algorithms::{find_cycles, has_cycle},
        NodeIndex,
    },
    story::{Story, StoryEdge, StoryGraph, StoryNode},
    Result,
};

/// Runs every topology pass over a story and aggregates the results.
///
/// The analyzer holds only its configuration. Each call builds its own graph
/// and scratch state, so one analyzer can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use storyscope::{AnalysisConfig, StoryAnalyzer, StoryEdge, StoryNode};
///
/// let analyzer = StoryAnalyzer::new(AnalysisConfig::default().with_key_decision_threshold(2));
///
/// let nodes = vec![
///     StoryNode::start("hub").with_choices(2),
///     StoryNode::ending("left"),
///     StoryNode::ending("right"),
/// ];
/// let edges = vec![StoryEdge::new("hub", "left"), StoryEdge::new("hub", "right")];
///
/// let analysis = analyzer.analyze(&nodes, &edges)?;
/// assert!(analysis.node("hub").unwrap().is_key_decision);
/// assert_eq!(analysis.node("hub").unwrap().reachable_endings.len(), 2);
/// # Ok::<(), storyscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryAnalyzer {
    config: AnalysisConfig,
}

impl StoryAnalyzer {
    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        StoryAnalyzer { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes one story given as node and edge lists.
    ///
    /// A story without a start node yields [`StoryAnalysis::empty`]. Nodes
    /// that cannot be reached from the start node get no depth but every
    /// other metric.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`](crate::Error::DuplicateNode) or
    /// [`Error::UnknownNode`](crate::Error::UnknownNode) for malformed input.
    /// Edges are checked before the start node is looked up, so malformed
    /// input is reported even when there is nothing to analyze.
    #[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn analyze(&self, nodes: &[StoryNode], edges: &[StoryEdge]) -> Result<StoryAnalysis> {
        let story = StoryGraph::build(nodes, edges)?;

        let Some(start) = story.start() else {
            debug!("no start node, nothing to analyze");
            return Ok(StoryAnalysis::empty());
        };

        Ok(self.aggregate(&story, start))
    }

    /// Analyzes a [`Story`].
    ///
    /// # Errors
    ///
    /// See [`StoryAnalyzer::analyze`].
    pub fn analyze_story(&self, story: &Story) -> Result<StoryAnalysis> {
        self.analyze(&story.nodes, &story.edges)
    }

    /// Analyzes independent stories in parallel.
    ///
    /// Results are returned in input order; one malformed story does not
    /// affect the others.
    pub fn analyze_many(&self, stories: &[Story]) -> Vec<Result<StoryAnalysis>> {
        stories
            .par_iter()
            .map(|story| self.analyze_story(story))
            .collect()
    }

    fn aggregate(&self, story: &StoryGraph<'_>, start: NodeIndex) -> StoryAnalysis {
        let graph = story.graph();

        let partition = Partition::compute(graph);
        let has_cycles = has_cycle(graph);
        debug_assert_eq!(has_cycles, partition.loop_count() > 0);
        debug!(
            components = partition.components.len(),
            loops = partition.loop_count(),
            "strongly connected components"
        );

        let cycles = if has_cycles {
            find_cycles(graph, self.config.max_cycles)
        } else {
            Vec::new()
        };
        let truncated = self.config.max_cycles > 0 && cycles.len() >= self.config.max_cycles;
        debug!(count = cycles.len(), truncated, "cycles extracted");
        if truncated {
            warn!(
                cap = self.config.max_cycles,
                "cycle extraction stopped at the configured cap"
            );
        }

        let depths = layer_depths(&partition, start);
        let is_ending: Vec<bool> = story.nodes().iter().map(StoryNode::is_ending).collect();
        let distances = end_distances(graph, &is_ending);
        let endings = reachable_endings(graph, &is_ending);

        let max_depth = depths.iter().flatten().copied().max().unwrap_or(0);
        debug!(max_depth, "depths computed");

        let mut nodes = BTreeMap::new();
        for (index, node) in story.nodes().iter().enumerate() {
            let id = NodeIndex::new(index);
            let choice_count = node.choice_count();
            nodes.insert(
                node.id.clone(),
                NodeAnalysis {
                    node_id: node.id.clone(),
                    depth: depths[index],
                    scc_id: partition.component_of(id),
                    is_in_loop: partition.in_loop(id),
                    max_depth_to_end: distances[index],
                    out_degree: graph.out_degree(id),
                    in_degree: graph.in_degree(id),
                    choice_count,
                    is_key_decision: choice_count >= self.config.key_decision_threshold,
                    reachable_endings: endings[index]
                        .iter()
                        .map(|&ending| story.id(ending).to_string())
                        .collect(),
                },
            );
        }

        let sccs = partition
            .components
            .iter()
            .zip(&partition.is_loop)
            .enumerate()
            .map(|(id, (members, &is_loop))| StronglyConnectedComponent {
                id,
                nodes: members
                    .iter()
                    .map(|&member| story.id(member).to_string())
                    .collect::<BTreeSet<_>>(),
                is_loop,
            })
            .collect();

        let cycles = cycles
            .into_iter()
            .map(|cycle| Cycle {
                nodes: cycle
                    .into_iter()
                    .map(|node| story.id(node).to_string())
                    .collect(),
            })
            .collect();

        StoryAnalysis {
            nodes,
            max_depth,
            start_node_id: Some(story.id(start).to_string()),
            ending_node_ids: story.endings().map(|e| story.id(e).to_string()).collect(),
            has_cycles,
            sccs,
            cycles,
        }
    }
}

/// Analyzes a story with the default configuration.
///
/// Shorthand for `StoryAnalyzer::default().analyze(nodes, edges)`.
///
/// # Errors
///
/// See [`StoryAnalyzer::analyze`].
pub fn analyze(nodes: &[StoryNode], edges: &[StoryEdge]) -> Result<StoryAnalysis> {
    StoryAnalyzer::default().analyze(nodes, edges)
}

/// Analyzes independent stories in parallel with the given configuration.
pub fn analyze_many(stories: &[Story], config: AnalysisConfig) -> Vec<Result<StoryAnalysis>> {
    StoryAnalyzer::new(config).analyze_many(stories)
}
