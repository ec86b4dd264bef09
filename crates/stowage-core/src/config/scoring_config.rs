use serde::{Deserialize, Serialize};

use crate::item::ItemCategory;

/// Priority scoring configuration: the category weight table and the
/// contextual boost multipliers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub category_weights: CategoryWeights,
    pub boosts: ContextualBoosts,
}

/// Per-category type weights used by the priority scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub instruction: f64,
    pub error_context: f64,
    pub decision: f64,
    pub file_content: f64,
    pub understanding_node: f64,
    pub dependency: f64,
    pub summary: f64,
    pub memory: f64,
}

impl CategoryWeights {
    pub fn weight(&self, category: ItemCategory) -> f64 {
        match category {
            ItemCategory::Instruction => self.instruction,
            ItemCategory::ErrorContext => self.error_context,
            ItemCategory::Decision => self.decision,
            ItemCategory::FileContent => self.file_content,
            ItemCategory::UnderstandingNode => self.understanding_node,
            ItemCategory::Dependency => self.dependency,
            ItemCategory::Summary => self.summary,
            ItemCategory::Memory => self.memory,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            instruction: 1.0,
            error_context: 0.9,
            decision: 0.8,
            file_content: 0.7,
            understanding_node: 0.6,
            dependency: 0.5,
            summary: 0.4,
            memory: 0.3,
        }
    }
}

/// Contextual multipliers applied after the weighted factor sum.
///
/// Order-independent: the multipliers compose multiplicatively and the
/// result is re-clamped to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextualBoosts {
    /// File-content item whose metadata file path is currently active.
    pub active_file: f64,
    /// Error-context item younger than `recent_error_max_age_hours`.
    pub recent_error: f64,
    pub recent_error_max_age_hours: f64,
    /// Decision item with recorded confidence above the threshold.
    pub confident_decision: f64,
    pub confident_decision_threshold: f64,
}

impl Default for ContextualBoosts {
    fn default() -> Self {
        Self {
            active_file: 1.2,
            recent_error: 1.5,
            recent_error_max_age_hours: 1.0,
            confident_decision: 1.1,
            confident_decision_threshold: 0.8,
        }
    }
}
