//! Bounded reinsertion-penalty map for the adaptive strategy.

use std::collections::HashMap;

use tracing::debug;

use stowage_core::config::EvictionConfig;

/// Penalty bookkeeping for items that keep coming back after eviction.
///
/// Bounded: when the map is full, the smallest penalty is dropped to make
/// room. Decay and pruning run synchronously inside the evict path, never
/// as a background task.
#[derive(Debug)]
pub struct ReinsertionPenalties {
    penalties: HashMap<String, f64>,
    increment: f64,
    decay: f64,
    prune_below: f64,
    max_entries: usize,
}

impl ReinsertionPenalties {
    pub fn new(config: &EvictionConfig) -> Self {
        Self {
            penalties: HashMap::new(),
            increment: config.penalty_increment,
            decay: config.penalty_decay,
            prune_below: config.penalty_prune_threshold,
            max_entries: config.max_penalty_entries,
        }
    }

    /// Record a reinsertion: the id's penalty grows by the increment.
    pub fn record(&mut self, id: &str) {
        if !self.penalties.contains_key(id) && self.penalties.len() >= self.max_entries {
            self.drop_smallest();
        }
        let penalty = self.penalties.entry(id.to_string()).or_insert(0.0);
        *penalty += self.increment;
        debug!(id, penalty = *penalty, "reinsertion penalty recorded");
    }

    /// Decay all penalties and prune entries below the threshold.
    pub fn decay_all(&mut self) {
        for penalty in self.penalties.values_mut() {
            *penalty *= self.decay;
        }
        self.penalties.retain(|_, p| *p >= self.prune_below);
    }

    /// Current penalty for an id, 0.0 when untracked.
    pub fn get(&self, id: &str) -> f64 {
        self.penalties.get(id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.penalties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }

    fn drop_smallest(&mut self) {
        let smallest = self
            .penalties
            .iter()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id.clone());
        if let Some(id) = smallest {
            self.penalties.remove(&id);
        }
    }
}
