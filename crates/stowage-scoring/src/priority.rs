//! Multi-factor priority scorer (5 factors + contextual boosts).
//!
//! Factors: category weight, objective keyword coverage, recency,
//! access frequency, dependency satisfaction. Contextual boosts multiply
//! the weighted sum and the result is re-clamped to [0, 1].

use chrono::{DateTime, Utc};

use stowage_core::config::ScoringConfig;
use stowage_core::models::SessionSnapshot;
use stowage_core::{ContextItem, ItemCategory};

/// Weights for the five priority factors.
#[derive(Debug, Clone)]
pub struct PriorityWeights {
    pub type_weight: f64,
    pub objective_weight: f64,
    pub recency_weight: f64,
    pub frequency_weight: f64,
    pub dependency_weight: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            type_weight: 0.3,
            objective_weight: 0.3,
            recency_weight: 0.3 * 0.4,
            frequency_weight: 0.2 * 0.4,
            dependency_weight: 0.2,
        }
    }
}

/// Each factor of a priority computation, for observability and tests.
#[derive(Debug, Clone)]
pub struct PriorityBreakdown {
    pub type_score: f64,
    pub objective_score: f64,
    pub recency_score: f64,
    pub frequency_score: f64,
    pub dependency_score: f64,
    /// Composed contextual multiplier (1.0 when no boost applies).
    pub boost: f64,
    /// Final clamped priority.
    pub priority: f64,
}

/// Priority scorer combining category weight, objective relevance,
/// recency, frequency, dependency satisfaction, and contextual boosts.
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    weights: PriorityWeights,
    config: ScoringConfig,
}

impl PriorityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            weights: PriorityWeights::default(),
            config,
        }
    }

    pub fn with_weights(config: ScoringConfig, weights: PriorityWeights) -> Self {
        Self { weights, config }
    }

    /// Score an item against the current objectives and session snapshot.
    /// Result is clamped to [0, 1].
    pub fn score(
        &self,
        item: &ContextItem,
        objectives: &[String],
        session: &SessionSnapshot,
        now: DateTime<Utc>,
    ) -> f64 {
        self.breakdown(item, objectives, session, now).priority
    }

    /// Score with each factor exposed individually.
    pub fn breakdown(
        &self,
        item: &ContextItem,
        objectives: &[String],
        session: &SessionSnapshot,
        now: DateTime<Utc>,
    ) -> PriorityBreakdown {
        let w = &self.weights;

        // Factor 1: category weight.
        let type_score = self.config.category_weights.weight(item.category);

        // Factor 2: objective keyword coverage over the item content.
        let objective_score = objective_score(&item.content, objectives);

        // Factor 3: recency, halving after a day without access.
        let recency_score = 1.0 / (1.0 + item.hours_since_access(now) / 24.0);

        // Factor 4: access frequency, saturating at 10 accesses.
        let frequency_score = (item.access_count as f64 / 10.0).min(1.0);

        // Factor 5: dependency satisfaction against the session snapshot.
        let dependency_score = dependency_score(item, session);

        let weighted = w.type_weight * type_score
            + w.objective_weight * objective_score
            + w.recency_weight * recency_score
            + w.frequency_weight * frequency_score
            + w.dependency_weight * dependency_score;

        let boost = self.boost_multiplier(item, session, now);
        let priority = (weighted.clamp(0.0, 1.0) * boost).clamp(0.0, 1.0);

        PriorityBreakdown {
            type_score,
            objective_score,
            recency_score,
            frequency_score,
            dependency_score,
            boost,
            priority,
        }
    }

    /// Compose the contextual multipliers. Multiplicative, so the order
    /// the conditions are checked in does not matter.
    fn boost_multiplier(
        &self,
        item: &ContextItem,
        session: &SessionSnapshot,
        now: DateTime<Utc>,
    ) -> f64 {
        let b = &self.config.boosts;
        let mut boost = 1.0;
        match item.category {
            ItemCategory::FileContent => {
                if let Some(path) = item.metadata.get("file_path").and_then(|v| v.as_str()) {
                    if session.is_active_file(path) {
                        boost *= b.active_file;
                    }
                }
            }
            ItemCategory::ErrorContext => {
                if item.age_hours(now) < b.recent_error_max_age_hours {
                    boost *= b.recent_error;
                }
            }
            ItemCategory::Decision => {
                if let Some(confidence) = item.metadata.get("confidence").and_then(|v| v.as_f64())
                {
                    if confidence > b.confident_decision_threshold {
                        boost *= b.confident_decision;
                    }
                }
            }
            _ => {}
        }
        boost
    }
}

/// Fraction of objective keywords found in the content, case-insensitive.
/// 0.5 when no objectives are supplied.
fn objective_score(content: &str, objectives: &[String]) -> f64 {
    if objectives.is_empty() {
        return 0.5;
    }
    let haystack = content.to_lowercase();
    let hits = objectives
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count();
    hits as f64 / objectives.len() as f64
}

/// 1.0 when every dependency is known to the session, 0.5 when the item
/// has none, otherwise the satisfied fraction.
fn dependency_score(item: &ContextItem, session: &SessionSnapshot) -> f64 {
    if item.dependencies.is_empty() {
        return 0.5;
    }
    let satisfied = item
        .dependencies
        .iter()
        .filter(|dep| session.is_known(dep))
        .count();
    satisfied as f64 / item.dependencies.len() as f64
}
