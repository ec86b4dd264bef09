//! ContextOptimizer, the orchestrator behind admit/access/optimize/
//! evict/state.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use stowage_core::models::{EngineState, OptimizationResult, SessionSnapshot};
use stowage_core::{
    Clock, ContextItem, EngineConfig, ItemCategory, StowageError, StowageResult, SystemClock,
};
use stowage_decay::{DecayContext, DecayEngine};
use stowage_eviction::{EvictionPolicy, EvictionStrategy};
use stowage_knapsack::KnapsackOptimizer;
use stowage_scoring::{value_score, PriorityScorer};

use crate::window::{ContextWindowManager, PressureTier};

/// The orchestrator: owns the item store and composes the scorer, decay
/// engine, eviction strategy, window manager, and knapsack optimizer.
///
/// The store is an ordered map keyed by id so optimization input order,
/// and therefore equal-value tie-breaking, is deterministic.
pub struct ContextOptimizer {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
    items: BTreeMap<String, ContextItem>,
    scorer: PriorityScorer,
    decay: DecayEngine,
    strategy: EvictionStrategy,
    window: ContextWindowManager,
    knapsack: KnapsackOptimizer,
    /// Most recent admission context, reused when optimize() rescores.
    objectives: Vec<String>,
    session: SessionSnapshot,
    optimize_runs: u64,
    evict_runs: u64,
}

impl ContextOptimizer {
    /// Construct with the system clock. Fails fast on invalid config.
    pub fn new(config: EngineConfig) -> StowageResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Construct with an injected clock (manual clocks in tests).
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> StowageResult<Self> {
        config.validate()?;
        Ok(Self {
            scorer: PriorityScorer::new(config.scoring.clone()),
            decay: DecayEngine::new(config.decay.clone()),
            strategy: EvictionStrategy::from_policy(EvictionPolicy::Priority, &config.eviction),
            window: ContextWindowManager::new(config.capacity, config.window.clone()),
            knapsack: KnapsackOptimizer::new(config.knapsack.clone()),
            clock,
            items: BTreeMap::new(),
            objectives: Vec::new(),
            session: SessionSnapshot::default(),
            optimize_runs: 0,
            evict_runs: 0,
            config,
        })
    }

    /// Admit an item, scoring its priority against the supplied
    /// objectives and session snapshot.
    ///
    /// Returns whether the item is still present afterwards; admission
    /// can trigger an optimization pass that immediately excludes it.
    /// Rejects duplicate ids and zero-sized items without any mutation.
    pub fn admit(
        &mut self,
        mut item: ContextItem,
        required: bool,
        objectives: &[String],
        session: &SessionSnapshot,
    ) -> StowageResult<bool> {
        if item.size == 0 {
            return Err(StowageError::InvalidItemSize {
                id: item.id.clone(),
                size: item.size,
            });
        }
        if self.items.contains_key(&item.id) {
            return Err(StowageError::DuplicateItem {
                id: item.id.clone(),
            });
        }

        let now = self.clock.now();
        self.objectives = objectives.to_vec();
        self.session = session.clone();

        item.required = required;
        let priority = self.scorer.score(&item, objectives, session, now);
        item.set_priority(priority);
        let id = item.id.clone();
        debug!(id = %id, size = item.size, priority, required, "admitting item");

        // Re-admission of a previously evicted id feeds the adaptive
        // strategy's penalty map.
        self.strategy.note_admission(&id);
        self.items.insert(id.clone(), item);

        let total = self.total_tokens();
        let pressure = self.window.utilization(total);
        self.window.record_pressure(pressure);
        if self.window.should_optimize(total) {
            self.optimize();
        }
        Ok(self.items.contains_key(&id))
    }

    /// Touch an item: bump last-access and access count. Returns the
    /// refreshed item, or `None` when the id is absent.
    pub fn access(&mut self, id: &str) -> Option<&ContextItem> {
        let now = self.clock.now();
        match self.items.get_mut(id) {
            Some(item) => {
                item.touch(now);
                Some(&*item)
            }
            None => None,
        }
    }

    /// Run a full optimization pass.
    ///
    /// Refreshes decayed relevance and recomputes priority for every
    /// stored item first. Under critical or exceeded pressure the
    /// emergency path evicts instead of selecting; otherwise the
    /// knapsack picks the winners and every excluded non-required item
    /// is dropped from storage.
    pub fn optimize(&mut self) -> OptimizationResult {
        let now = self.clock.now();
        let ctx = DecayContext { now };
        for item in self.items.values_mut() {
            self.decay.refresh(item, &ctx);
            let priority = self.scorer.score(item, &self.objectives, &self.session, now);
            item.set_priority(priority);
        }
        self.optimize_runs += 1;

        let total = self.total_tokens();
        let tier = self.window.tier(total);
        let result = match tier {
            PressureTier::Critical | PressureTier::Exceeded => self.emergency_pass(total, now),
            _ => self.knapsack_pass(now),
        };

        self.window.record_pressure(result.pressure);
        info!(
            selected = result.selected.len(),
            excluded = result.excluded.len(),
            total_tokens = result.total_tokens,
            pressure = result.pressure,
            "optimize pass finished"
        );
        result
    }

    /// Evict non-required items until `tokens_to_free` token units are
    /// freed, using the active policy. Returns the evicted ids, possibly
    /// freeing less when candidates run out.
    pub fn evict(&mut self, tokens_to_free: u32) -> Vec<String> {
        let now = self.clock.now();
        let candidates: Vec<&ContextItem> =
            self.items.values().filter(|i| !i.required).collect();
        let victims = self.strategy.select(&candidates, tokens_to_free, now);

        let mut freed = 0u32;
        for id in &victims {
            if let Some(item) = self.items.remove(id) {
                freed += item.size;
            }
        }
        self.evict_runs += 1;
        debug!(
            evicted = victims.len(),
            freed,
            tokens_to_free,
            policy = %self.strategy.policy(),
            "eviction pass finished"
        );
        victims
    }

    /// Switch the active eviction policy. Adaptive feedback state resets
    /// when the strategy changes.
    pub fn set_policy(&mut self, policy: EvictionPolicy) {
        info!(policy = %policy, "eviction policy changed");
        self.strategy = EvictionStrategy::from_policy(policy, &self.config.eviction);
    }

    /// Remove stored items. With `keep_required`, required items survive.
    pub fn clear(&mut self, keep_required: bool) {
        if keep_required {
            self.items.retain(|_, item| item.required);
        } else {
            self.items.clear();
        }
    }

    /// Aggregate snapshot for callers to render, log, or persist.
    pub fn state(&self) -> EngineState {
        let total = self.total_tokens();
        let mut category_counts: BTreeMap<_, usize> =
            ItemCategory::ALL.iter().map(|c| (*c, 0)).collect();
        for item in self.items.values() {
            *category_counts.entry(item.category).or_insert(0) += 1;
        }
        EngineState {
            item_count: self.items.len(),
            total_tokens: total,
            pressure: self.window.utilization(total),
            category_counts,
            policy: self.strategy.policy().to_string(),
            optimize_runs: self.optimize_runs,
            evict_runs: self.evict_runs,
        }
    }

    /// Read an item without touching its access bookkeeping.
    pub fn get(&self, id: &str) -> Option<&ContextItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> u32 {
        self.window.capacity()
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.strategy.policy()
    }

    pub fn total_tokens(&self) -> u32 {
        self.items.values().map(|i| i.size).sum()
    }

    /// Critical-pressure fallback: no DP, just evict down to the target.
    fn emergency_pass(&mut self, total: u32, now: DateTime<Utc>) -> OptimizationResult {
        let to_free = self.window.tokens_to_free(total);
        warn!(total_tokens = total, to_free, "pressure critical, evicting");
        let evicted = self.evict(to_free);

        let selected: Vec<String> = self.items.keys().cloned().collect();
        let total_tokens = self.total_tokens();
        let total_value = self.items.values().map(|i| value_score(i, now)).sum();
        OptimizationResult {
            selected,
            excluded: evicted,
            total_tokens,
            total_value,
            // No DP ran on this path.
            elapsed: Duration::ZERO,
            pressure: self.window.utilization(total_tokens),
        }
    }

    fn knapsack_pass(&mut self, now: DateTime<Utc>) -> OptimizationResult {
        let items: Vec<&ContextItem> = self.items.values().collect();
        let result = self.knapsack.optimize(&items, self.config.capacity, now);

        // Excluded required items (degenerate path) stay stored; they are
        // excludable from the window, not from the engine.
        for id in &result.excluded {
            let required = self.items.get(id).map(|i| i.required).unwrap_or(false);
            if !required {
                self.items.remove(id);
            }
        }
        result
    }
}
