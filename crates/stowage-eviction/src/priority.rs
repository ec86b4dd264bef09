//! Priority-based eviction: lowest value score first.

use chrono::{DateTime, Utc};
use tracing::debug;

use stowage_core::ContextItem;
use stowage_scoring::value_score;

use crate::strategy::{evictable, take_until_freed};

pub(crate) fn select(
    items: &[&ContextItem],
    tokens_to_free: u32,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut candidates: Vec<(f64, &ContextItem)> = items
        .iter()
        .copied()
        .filter(|i| evictable(i))
        .map(|i| (value_score(i, now), i))
        .collect();
    sort_ascending(&mut candidates);

    let selected = take_until_freed(candidates.into_iter().map(|(_, i)| i), tokens_to_free);
    debug!(count = selected.len(), tokens_to_free, "priority selection");
    selected
}

/// Ascending by sort key, with a stable id tie-break so equal-value
/// selections are deterministic.
pub(crate) fn sort_ascending(candidates: &mut [(f64, &ContextItem)]) {
    candidates.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.id.cmp(&b.1.id))
    });
}
