//! Composite value score shared by eviction and the knapsack optimizer.
//!
//! ```text
//! value = priority × 0.4
//!       + relevance × 0.3
//!       + recency_boost × 0.2      recency_boost = 1 / (1 + hours_since_access)
//!       + frequency_boost × 0.1    frequency_boost = ln(1 + access_count) / 10
//! ```

use chrono::{DateTime, Utc};

use stowage_core::ContextItem;

/// Weights for the four value factors.
#[derive(Debug, Clone)]
pub struct ValueWeights {
    pub priority: f64,
    pub relevance: f64,
    pub recency: f64,
    pub frequency: f64,
}

impl Default for ValueWeights {
    fn default() -> Self {
        Self {
            priority: 0.4,
            relevance: 0.3,
            recency: 0.2,
            frequency: 0.1,
        }
    }
}

/// Value score with the default weights.
pub fn value_score(item: &ContextItem, now: DateTime<Utc>) -> f64 {
    value_score_weighted(item, now, &ValueWeights::default())
}

/// Value score with explicit weights.
pub fn value_score_weighted(item: &ContextItem, now: DateTime<Utc>, weights: &ValueWeights) -> f64 {
    let recency_boost = 1.0 / (1.0 + item.hours_since_access(now));
    let frequency_boost = (1.0 + item.access_count as f64).ln() / 10.0;
    weights.priority * item.priority
        + weights.relevance * item.relevance
        + weights.recency * recency_boost
        + weights.frequency * frequency_boost
}
