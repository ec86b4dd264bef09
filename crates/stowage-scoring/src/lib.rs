//! # stowage-scoring
//!
//! Priority scoring (5 weighted factors plus contextual boosts) and the
//! composite value score shared by eviction and the knapsack optimizer.

pub mod priority;
pub mod value;

pub use priority::{PriorityBreakdown, PriorityScorer, PriorityWeights};
pub use value::{value_score, value_score_weighted, ValueWeights};
