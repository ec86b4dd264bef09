//! Knapsack-style selection of the value-maximizing admissible subset.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use stowage_core::config::KnapsackConfig;
use stowage_core::constants::REQUIRED_OVERFLOW_PRESSURE;
use stowage_core::models::OptimizationResult;
use stowage_core::ContextItem;
use stowage_scoring::value_score;

use crate::dp;

/// Selects the value-maximizing subset of items that fits a capacity,
/// always admitting required items when they fit together.
#[derive(Debug, Clone)]
pub struct KnapsackOptimizer {
    config: KnapsackConfig,
}

impl KnapsackOptimizer {
    pub fn new(config: KnapsackConfig) -> Self {
        Self { config }
    }

    /// Run one selection pass over `items` at `capacity` token units.
    ///
    /// Required items are admitted up front; optional items compete for
    /// the remaining capacity through exact 0/1 DP. When the required
    /// items alone exceed capacity, the degenerate path greedily keeps
    /// the most valuable required items and reports the sentinel
    /// pressure 1.0.
    pub fn optimize(
        &self,
        items: &[&ContextItem],
        capacity: u32,
        now: DateTime<Utc>,
    ) -> OptimizationResult {
        let started = Instant::now();
        let (required, optional): (Vec<&ContextItem>, Vec<&ContextItem>) =
            items.iter().copied().partition(|i| i.required);
        let required_tokens: u32 = required.iter().map(|i| i.size).sum();

        if required_tokens > capacity {
            return self.required_overflow(&required, &optional, capacity, now, started);
        }

        let remaining = capacity - required_tokens;
        // Scale the DP units when the remaining capacity is too large for
        // an exact table. Sizes round up and the capacity rounds down, so
        // the mapped-back selection can never exceed the true capacity;
        // the cost is up to scale − 1 units of unused slack.
        let scale = (remaining / self.config.dp_capacity_limit).max(1);
        let sizes: Vec<u32> = optional.iter().map(|i| i.size.div_ceil(scale)).collect();
        let values: Vec<f64> = optional.iter().map(|i| value_score(i, now)).collect();
        let chosen: HashSet<usize> = dp::solve(&sizes, &values, remaining / scale)
            .into_iter()
            .collect();

        let mut selected = Vec::with_capacity(required.len() + chosen.len());
        let mut excluded = Vec::new();
        let mut total_tokens = required_tokens;
        let mut total_value: f64 = required.iter().map(|i| value_score(i, now)).sum();

        for item in &required {
            selected.push(item.id.clone());
        }
        for (index, item) in optional.iter().enumerate() {
            if chosen.contains(&index) {
                total_tokens += item.size;
                total_value += values[index];
                selected.push(item.id.clone());
            } else {
                excluded.push(item.id.clone());
            }
        }

        let pressure = f64::from(total_tokens) / f64::from(capacity);
        debug!(
            selected = selected.len(),
            excluded = excluded.len(),
            total_tokens,
            scale,
            "optimization pass complete"
        );
        OptimizationResult {
            selected,
            excluded,
            total_tokens,
            total_value,
            elapsed: started.elapsed(),
            pressure,
        }
    }

    /// Degenerate path: the required set alone cannot fit. Rank required
    /// items by value, keep the best that fit, exclude everything else.
    fn required_overflow(
        &self,
        required: &[&ContextItem],
        optional: &[&ContextItem],
        capacity: u32,
        now: DateTime<Utc>,
        started: Instant,
    ) -> OptimizationResult {
        let mut ranked: Vec<(f64, &ContextItem)> = required
            .iter()
            .map(|i| (value_score(i, now), *i))
            .collect();
        ranked.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        let mut selected = Vec::new();
        let mut excluded = Vec::new();
        let mut total_tokens = 0u32;
        let mut total_value = 0.0;
        for (value, item) in ranked {
            if total_tokens + item.size <= capacity {
                total_tokens += item.size;
                total_value += value;
                selected.push(item.id.clone());
            } else {
                excluded.push(item.id.clone());
            }
        }
        for item in optional {
            excluded.push(item.id.clone());
        }

        warn!(
            required = required.len(),
            kept = selected.len(),
            capacity,
            "required set exceeds capacity"
        );
        OptimizationResult {
            selected,
            excluded,
            total_tokens,
            total_value,
            elapsed: started.elapsed(),
            pressure: REQUIRED_OVERFLOW_PRESSURE,
        }
    }
}

impl Default for KnapsackOptimizer {
    fn default() -> Self {
        Self::new(KnapsackConfig::default())
    }
}
