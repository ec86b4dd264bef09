use chrono::{Duration, Utc};
use proptest::prelude::*;

use stowage_core::config::KnapsackConfig;
use stowage_core::{ContextItem, ItemCategory};
use stowage_knapsack::KnapsackOptimizer;

fn arb_items() -> impl Strategy<Value = Vec<ContextItem>> {
    proptest::collection::vec(
        (1u32..80, 0.0f64..=1.0, proptest::bool::weighted(0.2), 0i64..200),
        0..25,
    )
    .prop_map(|specs| {
        let now = Utc::now();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (size, priority, required, hours_ago))| {
                let mut item =
                    ContextItem::new(format!("item{i}"), ItemCategory::Memory, "content", size, now);
                item.priority = priority;
                item.required = required;
                item.last_accessed = now - Duration::hours(hours_ago);
                item
            })
            .collect()
    })
}

proptest! {
    // ── Capacity is respected outside the degenerate path ────────────────

    #[test]
    fn selection_fits_capacity_or_reports_sentinel(
        items in arb_items(),
        capacity in 1u32..400,
    ) {
        let now = Utc::now();
        let refs: Vec<&ContextItem> = items.iter().collect();
        let result = KnapsackOptimizer::default().optimize(&refs, capacity, now);

        if result.pressure < 1.0 {
            prop_assert!(result.total_tokens <= capacity);
        } else {
            let required_tokens: u32 = items.iter().filter(|i| i.required).map(|i| i.size).sum();
            // Sentinel pressure only when required items overflow, or the
            // window is exactly full.
            prop_assert!(
                required_tokens > capacity || result.total_tokens == capacity,
                "sentinel without overflow: required {required_tokens}, capacity {capacity}"
            );
        }
    }

    // ── Required items are kept whenever they fit together ───────────────

    #[test]
    fn required_items_kept_when_they_fit(
        items in arb_items(),
        capacity in 1u32..400,
    ) {
        let now = Utc::now();
        let required_tokens: u32 = items.iter().filter(|i| i.required).map(|i| i.size).sum();
        prop_assume!(required_tokens <= capacity);

        let refs: Vec<&ContextItem> = items.iter().collect();
        let result = KnapsackOptimizer::default().optimize(&refs, capacity, now);
        for item in items.iter().filter(|i| i.required) {
            prop_assert!(
                result.selected.contains(&item.id),
                "required {} was excluded",
                item.id
            );
        }
    }

    // ── Selected and excluded partition the input ────────────────────────

    #[test]
    fn result_is_a_partition(items in arb_items(), capacity in 1u32..400) {
        let now = Utc::now();
        let refs: Vec<&ContextItem> = items.iter().collect();
        let result = KnapsackOptimizer::default().optimize(&refs, capacity, now);

        prop_assert_eq!(result.selected.len() + result.excluded.len(), items.len());
        for item in &items {
            prop_assert!(result.selected.contains(&item.id) ^ result.excluded.contains(&item.id));
        }
    }

    // ── Scaling keeps the capacity invariant ─────────────────────────────

    #[test]
    fn scaled_selection_fits_capacity(
        items in arb_items(),
        capacity in 1_000u32..40_000,
    ) {
        let now = Utc::now();
        let optimizer = KnapsackOptimizer::new(KnapsackConfig { dp_capacity_limit: 64 });
        let refs: Vec<&ContextItem> = items.iter().collect();
        let result = optimizer.optimize(&refs, capacity, now);

        if result.pressure < 1.0 {
            prop_assert!(result.total_tokens <= capacity);
        }
    }

    // ── Raising a winner's priority never expels it ──────────────────────

    #[test]
    fn raising_priority_keeps_a_winner_selected(
        items in arb_items(),
        capacity in 1u32..400,
        bump in 0.05f64..0.5,
    ) {
        let now = Utc::now();
        let refs: Vec<&ContextItem> = items.iter().collect();
        let before = KnapsackOptimizer::default().optimize(&refs, capacity, now);
        prop_assume!(!before.selected.is_empty());

        let winner_id = before.selected[0].clone();
        let mut raised: Vec<ContextItem> = items.clone();
        for item in &mut raised {
            if item.id == winner_id {
                item.set_priority(item.priority + bump);
            }
        }
        let refs: Vec<&ContextItem> = raised.iter().collect();
        let after = KnapsackOptimizer::default().optimize(&refs, capacity, now);
        prop_assert!(
            after.selected.contains(&winner_id),
            "raising priority expelled {winner_id}"
        );
    }
}
