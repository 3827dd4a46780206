//! Layer depth from the start node.
//!
//! Depth is a BFS distance measured on the condensation rather than on the
//! story itself: every component is one vertex, so all members of a loop
//! share one layer, and stepping into a different component always costs
//! exactly one. The result is broadcast back from components to nodes.

use crate::{
    analysis::components::Partition,
    graph::{algorithms::bfs_distances, NodeIndex},
};

/// Depth of every node, indexed by [`NodeIndex`]. `None` marks nodes that
/// cannot be reached from `start`.
pub(crate) fn layer_depths(partition: &Partition, start: NodeIndex) -> Vec<Option<usize>> {
    let start_component = NodeIndex::new(partition.component_of(start));
    let component_depths = bfs_distances(&partition.condensation, start_component);

    partition
        .condensation
        .components()
        .iter()
        .map(|&component| component_depths[component])
        .collect()
}
