use chrono::{DateTime, Utc};

use stowage_core::config::DecayConfig;
use stowage_core::ContextItem;

use crate::formula;

/// Context for a decay pass.
#[derive(Debug, Clone, Copy)]
pub struct DecayContext {
    pub now: DateTime<Utc>,
}

/// Relevance decay engine holding the injected decay configuration.
///
/// The cached relevance compounds across refreshes: each refresh decays
/// from the previous cached value over the hours since the last refresh,
/// which equals decaying the base relevance over the total elapsed time
/// until the floor intervenes.
#[derive(Debug, Clone)]
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Decayed relevance for an item at `ctx.now`, without mutating it.
    pub fn decayed(&self, item: &ContextItem, ctx: &DecayContext) -> f64 {
        formula::decayed_relevance(item, item.hours_since_refresh(ctx.now), &self.config)
    }

    /// Refresh the item's cached relevance and refresh timestamp.
    /// Returns the new relevance.
    pub fn refresh(&self, item: &mut ContextItem, ctx: &DecayContext) -> f64 {
        let decayed = self.decayed(item, ctx);
        item.set_relevance(decayed);
        item.relevance_refreshed_at = ctx.now;
        item.relevance
    }

    /// Refresh every item in the batch. Returns the number refreshed.
    pub fn refresh_all<'a, I>(&self, items: I, ctx: &DecayContext) -> usize
    where
        I: IntoIterator<Item = &'a mut ContextItem>,
    {
        let mut refreshed = 0;
        for item in items {
            self.refresh(item, ctx);
            refreshed += 1;
        }
        refreshed
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new(DecayConfig::default())
    }
}
