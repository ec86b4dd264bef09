use serde::{Deserialize, Serialize};

use super::defaults;
use crate::item::ItemCategory;

/// Relevance decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Base decay rate for items that do not override it.
    pub default_rate: f64,
    /// Relevance never decays below this floor.
    pub relevance_floor: f64,
    /// Per-category decay modifiers.
    pub modifiers: DecayModifiers,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            default_rate: defaults::DEFAULT_DECAY_RATE,
            relevance_floor: defaults::RELEVANCE_FLOOR,
            modifiers: DecayModifiers::default(),
        }
    }
}

/// Per-category multipliers on the base decay rate.
///
/// Instructions carry 0.0: they never decay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayModifiers {
    pub instruction: f64,
    pub error_context: f64,
    pub decision: f64,
    pub file_content: f64,
    pub understanding_node: f64,
    pub memory: f64,
    pub summary: f64,
    pub dependency: f64,
}

impl DecayModifiers {
    pub fn for_category(&self, category: ItemCategory) -> f64 {
        match category {
            ItemCategory::Instruction => self.instruction,
            ItemCategory::ErrorContext => self.error_context,
            ItemCategory::Decision => self.decision,
            ItemCategory::FileContent => self.file_content,
            ItemCategory::UnderstandingNode => self.understanding_node,
            ItemCategory::Memory => self.memory,
            ItemCategory::Summary => self.summary,
            ItemCategory::Dependency => self.dependency,
        }
    }
}

impl Default for DecayModifiers {
    fn default() -> Self {
        Self {
            instruction: 0.0,
            error_context: 0.5,
            decision: 1.0,
            file_content: 1.2,
            understanding_node: 0.8,
            memory: 1.5,
            summary: 0.7,
            dependency: 0.9,
        }
    }
}
