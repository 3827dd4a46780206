//! Story input model.
//!
//! A story is an ordered list of [`StoryNode`]s (the beats) and an ordered
//! list of [`StoryEdge`]s (the transitions a reader can take). Both orders
//! matter: the first start node wins, cycle extraction follows node order,
//! and successors are explored in edge order.
//!
//! The analysis core only reads node ids, roles, choice counts and edge
//! endpoints. Choice ids and the `choice` link on edges are authoring data
//! consumed by [`validation`](crate::validation).

mod builder;

pub use builder::StoryGraph;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a node in the story.
///
/// Displays and parses as `start`, `normal` or `ending`, and serializes the
/// same way.
///
/// # Examples
///
/// ```rust
/// use std::str::FromStr;
/// use storyscope::NodeRole;
///
/// assert_eq!(NodeRole::Ending.to_string(), "ending");
/// assert_eq!(NodeRole::from_str("start").unwrap(), NodeRole::Start);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Entry point of the story
    Start,
    /// An ordinary beat
    #[default]
    Normal,
    /// A terminal beat
    Ending,
}

/// One authored choice on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within the owning node
    pub id: String,
    /// Text shown to the reader
    pub text: String,
}

/// A beat of the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Unique identifier
    pub id: String,
    /// Start, normal or ending
    #[serde(default)]
    pub role: NodeRole,
    /// Authored choices, in display order
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl StoryNode {
    /// Creates a node with the given role and no choices.
    pub fn new(id: impl Into<String>, role: NodeRole) -> Self {
        StoryNode {
            id: id.into(),
            role,
            choices: Vec::new(),
        }
    }

    /// Creates a start node.
    pub fn start(id: impl Into<String>) -> Self {
        Self::new(id, NodeRole::Start)
    }

    /// Creates a normal node.
    pub fn normal(id: impl Into<String>) -> Self {
        Self::new(id, NodeRole::Normal)
    }

    /// Creates an ending node.
    pub fn ending(id: impl Into<String>) -> Self {
        Self::new(id, NodeRole::Ending)
    }

    /// Appends a choice.
    #[must_use]
    pub fn with_choice(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.choices.push(Choice {
            id: id.into(),
            text: text.into(),
        });
        self
    }

    /// Appends `count` placeholder choices with ids `<node>-c1`, `<node>-c2`, ...
    ///
    /// Useful when only the choice count matters, as it does for the
    /// topology analysis.
    #[must_use]
    pub fn with_choices(mut self, count: usize) -> Self {
        let offset = self.choices.len();
        for i in 1..=count {
            let n = offset + i;
            self.choices.push(Choice {
                id: format!("{}-c{n}", self.id),
                text: format!("Choice {n}"),
            });
        }
        self
    }

    /// Number of authored choices.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` for start nodes.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.role == NodeRole::Start
    }

    /// Returns `true` for ending nodes.
    #[must_use]
    pub fn is_ending(&self) -> bool {
        self.role == NodeRole::Ending
    }
}

/// A directed transition between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryEdge {
    /// Id of the node the transition leaves
    pub source: String,
    /// Id of the node the transition enters
    pub target: String,
    /// Id of the source node's choice this edge realises, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

impl StoryEdge {
    /// Creates an edge not bound to any choice.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        StoryEdge {
            source: source.into(),
            target: target.into(),
            choice: None,
        }
    }

    /// Binds the edge to a choice of its source node.
    #[must_use]
    pub fn via(mut self, choice: impl Into<String>) -> Self {
        self.choice = Some(choice.into());
        self
    }
}

/// A complete story: nodes and edges, both in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story beats
    pub nodes: Vec<StoryNode>,
    /// Transitions between beats
    #[serde(default)]
    pub edges: Vec<StoryEdge>,
}

impl Story {
    /// Creates a story from its parts.
    #[must_use]
    pub fn new(nodes: Vec<StoryNode>, edges: Vec<StoryEdge>) -> Self {
        Story { nodes, edges }
    }
}
