//! Strategy dispatch and the shared selection contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stowage_core::config::EvictionConfig;
use stowage_core::{ContextItem, ItemCategory};

use crate::adaptive::{self, AdaptiveState};
use crate::{priority, recency};

/// Policy selector for the engine's eviction behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    Recency,
    Priority,
    Adaptive,
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvictionPolicy::Recency => "recency",
            EvictionPolicy::Priority => "priority",
            EvictionPolicy::Adaptive => "adaptive",
        })
    }
}

/// Closed set of eviction behaviors.
///
/// All variants answer `select(items, tokens_to_free, now)` with the ids
/// to remove. Candidates are expected to be non-required items; the
/// strategies additionally skip instruction items, uniformly across all
/// three variants.
#[derive(Debug)]
pub enum EvictionStrategy {
    /// Oldest last-access first.
    Recency,
    /// Lowest value score first.
    Priority,
    /// Lowest value score minus reinsertion penalty first, with penalty
    /// feedback on re-admissions.
    Adaptive(AdaptiveState),
}

impl EvictionStrategy {
    pub fn from_policy(policy: EvictionPolicy, config: &EvictionConfig) -> Self {
        match policy {
            EvictionPolicy::Recency => EvictionStrategy::Recency,
            EvictionPolicy::Priority => EvictionStrategy::Priority,
            EvictionPolicy::Adaptive => EvictionStrategy::Adaptive(AdaptiveState::new(config)),
        }
    }

    pub fn policy(&self) -> EvictionPolicy {
        match self {
            EvictionStrategy::Recency => EvictionPolicy::Recency,
            EvictionStrategy::Priority => EvictionPolicy::Priority,
            EvictionStrategy::Adaptive(_) => EvictionPolicy::Adaptive,
        }
    }

    /// Select ids to evict until at least `tokens_to_free` token units are
    /// freed, or the candidates run out. A zero target selects nothing.
    pub fn select(
        &mut self,
        items: &[&ContextItem],
        tokens_to_free: u32,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        match self {
            EvictionStrategy::Recency => recency::select(items, tokens_to_free),
            EvictionStrategy::Priority => priority::select(items, tokens_to_free, now),
            EvictionStrategy::Adaptive(state) => {
                adaptive::select(state, items, tokens_to_free, now)
            }
        }
    }

    /// Feedback hook: an id is being admitted. If the adaptive strategy
    /// previously evicted it, its reinsertion penalty grows.
    pub fn note_admission(&mut self, id: &str) {
        if let EvictionStrategy::Adaptive(state) = self {
            state.note_admission(id);
        }
    }
}

/// Whether a strategy may evict the item at all.
pub(crate) fn evictable(item: &ContextItem) -> bool {
    item.category != ItemCategory::Instruction
}

/// Accumulate ids in the given order until the freed total reaches the
/// target.
pub(crate) fn take_until_freed<'a, I>(ordered: I, tokens_to_free: u32) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContextItem>,
{
    let mut freed = 0u32;
    let mut selected = Vec::new();
    for item in ordered {
        if freed >= tokens_to_free {
            break;
        }
        freed += item.size;
        selected.push(item.id.clone());
    }
    selected
}
