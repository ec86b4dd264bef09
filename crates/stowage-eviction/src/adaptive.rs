//! Adaptive eviction: value score minus a learned reinsertion penalty.
//!
//! Items that were evicted and then admitted again accumulate a penalty,
//! pushing them to the front of the next eviction pass. Penalties decay
//! on every evict call and the bookkeeping is bounded.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::debug;

use stowage_core::config::EvictionConfig;
use stowage_core::ContextItem;
use stowage_scoring::value_score;

use crate::penalties::ReinsertionPenalties;
use crate::priority::sort_ascending;
use crate::strategy::{evictable, take_until_freed};

/// Feedback state carried by the adaptive strategy.
#[derive(Debug)]
pub struct AdaptiveState {
    penalties: ReinsertionPenalties,
    /// Recently evicted ids, oldest first. Admission of one of these
    /// counts as a reinsertion.
    recently_evicted: VecDeque<String>,
    max_tracked: usize,
}

impl AdaptiveState {
    pub fn new(config: &EvictionConfig) -> Self {
        Self {
            penalties: ReinsertionPenalties::new(config),
            recently_evicted: VecDeque::new(),
            max_tracked: config.max_tracked_evictions,
        }
    }

    pub fn penalties(&self) -> &ReinsertionPenalties {
        &self.penalties
    }

    /// An id is being admitted; if it was evicted earlier, record the
    /// reinsertion and stop tracking it (it is present again).
    pub fn note_admission(&mut self, id: &str) {
        if let Some(pos) = self.recently_evicted.iter().position(|e| e == id) {
            self.recently_evicted.remove(pos);
            self.penalties.record(id);
        }
    }

    fn note_evicted(&mut self, ids: &[String]) {
        for id in ids {
            if let Some(pos) = self.recently_evicted.iter().position(|e| e == id) {
                self.recently_evicted.remove(pos);
            }
            self.recently_evicted.push_back(id.clone());
        }
        while self.recently_evicted.len() > self.max_tracked {
            self.recently_evicted.pop_front();
        }
    }
}

pub(crate) fn select(
    state: &mut AdaptiveState,
    items: &[&ContextItem],
    tokens_to_free: u32,
    now: DateTime<Utc>,
) -> Vec<String> {
    // Every evict call decays and prunes the penalty map first.
    state.penalties.decay_all();

    let mut candidates: Vec<(f64, &ContextItem)> = items
        .iter()
        .copied()
        .filter(|i| evictable(i))
        .map(|i| (value_score(i, now) - state.penalties.get(&i.id), i))
        .collect();
    sort_ascending(&mut candidates);

    let selected = take_until_freed(candidates.into_iter().map(|(_, i)| i), tokens_to_free);
    state.note_evicted(&selected);
    debug!(
        count = selected.len(),
        tokens_to_free,
        tracked = state.recently_evicted.len(),
        "adaptive selection"
    );
    selected
}
