use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of one optimization pass.
///
/// `selected` and `excluded` are disjoint and together cover every item
/// the pass considered. Total tokens stay within capacity except on the
/// degenerate required-overflow path, which reports the sentinel
/// pressure 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Ids retained by the pass.
    pub selected: Vec<String>,
    /// Ids excluded by the pass.
    pub excluded: Vec<String>,
    /// Token units consumed by the selected items.
    pub total_tokens: u32,
    /// Sum of value scores of the selected items.
    pub total_value: f64,
    /// Wall time spent selecting. Zero when the emergency eviction path
    /// ran instead of the DP.
    pub elapsed: Duration,
    /// Resulting pressure ratio. 1.0 is the sentinel for a required set
    /// that cannot fit.
    pub pressure: f64,
}

impl OptimizationResult {
    /// Number of items the pass considered.
    pub fn considered(&self) -> usize {
        self.selected.len() + self.excluded.len()
    }
}
