use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemCategory;

/// Aggregate engine snapshot for callers to render, log, or persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    pub item_count: usize,
    pub total_tokens: u32,
    pub pressure: f64,
    /// Item counts per category, in stable category order.
    pub category_counts: BTreeMap<ItemCategory, usize>,
    /// Name of the active eviction policy.
    pub policy: String,
    /// Cumulative optimization passes run.
    pub optimize_runs: u64,
    /// Cumulative eviction passes run.
    pub evict_runs: u64,
}
