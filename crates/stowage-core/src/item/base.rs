use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ItemCategory;
use crate::config::defaults;

/// A context fragment held by the engine.
///
/// Identity is the caller-supplied `id`; the scoring fields are mutable
/// and maintained by the engine across admissions, accesses, and
/// optimization passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextItem {
    /// Caller-supplied identifier, unique per engine instance.
    pub id: String,
    /// Category, drives type weighting, decay modifiers, and eviction
    /// immunity for instructions.
    pub category: ItemCategory,
    /// Opaque content. The engine only substring-matches objective
    /// keywords against it.
    pub content: String,
    /// Size in token units. Always >= 1.
    pub size: u32,
    /// Computed priority, clamped to [0, 1].
    pub priority: f64,
    /// Relevance at creation, clamped to [0, 1].
    pub base_relevance: f64,
    /// Cached decayed relevance, refreshed by the decay engine.
    pub relevance: f64,
    /// When `relevance` was last refreshed.
    pub relevance_refreshed_at: DateTime<Utc>,
    /// Base decay rate >= 0. Category modifiers multiply this.
    pub decay_rate: f64,
    /// Hard-required flag, asserted at admission. Required items are
    /// excludable only when capacity genuinely cannot hold them.
    pub required: bool,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    /// Ids of items this one depends on.
    pub dependencies: HashSet<String>,
    /// Opaque caller metadata. The scorer reads `file_path` on
    /// file-content items and `confidence` on decision items.
    pub metadata: serde_json::Value,
}

impl ContextItem {
    /// Create an item with neutral scoring defaults at `now`.
    pub fn new(
        id: impl Into<String>,
        category: ItemCategory,
        content: impl Into<String>,
        size: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            content: content.into(),
            size,
            priority: 0.5,
            base_relevance: 1.0,
            relevance: 1.0,
            relevance_refreshed_at: now,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            required: false,
            created_at: now,
            last_accessed: now,
            access_count: 0,
            dependencies: HashSet::new(),
            metadata: serde_json::Value::Null,
        }
    }

    /// Set the base relevance, seeding the cached relevance with it.
    /// Both are clamped to [0, 1].
    pub fn with_base_relevance(mut self, relevance: f64) -> Self {
        self.base_relevance = relevance.clamp(0.0, 1.0);
        self.relevance = self.base_relevance;
        self
    }

    /// Override the category-default decay rate. Negative rates clamp
    /// to zero.
    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate = rate.max(0.0);
        self
    }

    /// Record an access: bump the counter and the last-access instant.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
        self.access_count += 1;
    }

    /// Set the priority, clamping to [0, 1].
    pub fn set_priority(&mut self, priority: f64) {
        self.priority = priority.clamp(0.0, 1.0);
    }

    /// Set the cached relevance, clamping to [0, 1].
    pub fn set_relevance(&mut self, relevance: f64) {
        self.relevance = relevance.clamp(0.0, 1.0);
    }

    /// Hours since the last access. Never negative.
    pub fn hours_since_access(&self, now: DateTime<Utc>) -> f64 {
        hours_between(self.last_accessed, now)
    }

    /// Hours since the last relevance refresh. Never negative.
    pub fn hours_since_refresh(&self, now: DateTime<Utc>) -> f64 {
        hours_between(self.relevance_refreshed_at, now)
    }

    /// Hours since creation. Never negative.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        hours_between(self.created_at, now)
    }
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds().max(0) as f64 / 3600.0
}

/// Identity equality: two items are equal if they share an id.
impl PartialEq for ContextItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContextItem {}
