use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptive eviction feedback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvictionConfig {
    /// Maximum entries in the reinsertion-penalty map.
    pub max_penalty_entries: usize,
    /// Penalty added on each re-admission of a previously evicted id.
    pub penalty_increment: f64,
    /// Multiplier applied to all penalties on every evict call.
    pub penalty_decay: f64,
    /// Penalties below this are pruned.
    pub penalty_prune_threshold: f64,
    /// Maximum evicted ids remembered for reinsertion tracking.
    pub max_tracked_evictions: usize,
}

impl Default for EvictionConfig {
    fn default() -> Self {
        Self {
            max_penalty_entries: defaults::DEFAULT_MAX_PENALTY_ENTRIES,
            penalty_increment: defaults::DEFAULT_PENALTY_INCREMENT,
            penalty_decay: defaults::DEFAULT_PENALTY_DECAY,
            penalty_prune_threshold: defaults::DEFAULT_PENALTY_PRUNE_THRESHOLD,
            max_tracked_evictions: defaults::DEFAULT_MAX_TRACKED_EVICTIONS,
        }
    }
}
