//! Recency-based eviction: oldest last-access first.

use tracing::debug;

use stowage_core::ContextItem;

use crate::strategy::{evictable, take_until_freed};

pub(crate) fn select(items: &[&ContextItem], tokens_to_free: u32) -> Vec<String> {
    let mut candidates: Vec<&ContextItem> =
        items.iter().copied().filter(|i| evictable(i)).collect();
    candidates.sort_by(|a, b| {
        a.last_accessed
            .cmp(&b.last_accessed)
            .then_with(|| a.id.cmp(&b.id))
    });

    let selected = take_until_freed(candidates.into_iter(), tokens_to_free);
    debug!(count = selected.len(), tokens_to_free, "recency selection");
    selected
}
