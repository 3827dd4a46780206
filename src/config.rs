//! Analysis configuration
//!
//! The topology passes themselves have no knobs. What can be tuned is how much
//! diagnostic output is produced around them: how many concrete cycles are
//! extracted, where the key-decision line is drawn, and whether validation
//! looks for choices that do not actually branch.

use serde::{Deserialize, Serialize};

/// Configuration shared by [`StoryAnalyzer`](crate::StoryAnalyzer) and
/// [`StoryValidator`](crate::validation::StoryValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of cycles extracted into the snapshot (default: 10)
    /// Cycle detection itself is unaffected; `has_cycles` is always exact
    pub max_cycles: usize,

    /// Minimum number of authored choices for a node to count as a key decision (default: 3)
    pub key_decision_threshold: usize,

    /// Report nodes whose choices all lead to the same place (default: true)
    pub fake_choice_detection: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_cycles: 10,
            key_decision_threshold: 3,
            fake_choice_detection: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration that skips cycle extraction
    ///
    /// `has_cycles` and the loop flags are still computed; only the list of
    /// concrete cycles stays empty.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            max_cycles: 0,
            ..Self::default()
        }
    }

    /// Sets the cycle extraction cap.
    #[must_use]
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Sets the key-decision threshold.
    #[must_use]
    pub fn with_key_decision_threshold(mut self, threshold: usize) -> Self {
        self.key_decision_threshold = threshold;
        self
    }

    /// Enables or disables fake-choice findings during validation.
    #[must_use]
    pub fn with_fake_choice_detection(mut self, enabled: bool) -> Self {
        self.fake_choice_detection = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_cycles, 10);
        assert_eq!(config.key_decision_threshold, 3);
        assert!(config.fake_choice_detection);
    }

    #[test]
    fn test_analysis_config_presets() {
        let minimal = AnalysisConfig::minimal();
        assert_eq!(minimal.max_cycles, 0);
        assert_eq!(minimal.key_decision_threshold, 3);
        assert!(minimal.fake_choice_detection);

        let tuned = AnalysisConfig::default()
            .with_max_cycles(2)
            .with_key_decision_threshold(5)
            .with_fake_choice_detection(false);
        assert_eq!(tuned.max_cycles, 2);
        assert_eq!(tuned.key_decision_threshold, 5);
        assert!(!tuned.fake_choice_detection);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"max_cycles": 4}"#).unwrap();
        assert_eq!(config, AnalysisConfig::default().with_max_cycles(4));
    }
}
