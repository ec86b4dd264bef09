use chrono::{Duration, Utc};
use proptest::prelude::*;

use stowage_core::config::EvictionConfig;
use stowage_core::{ContextItem, ItemCategory};
use stowage_eviction::{EvictionPolicy, EvictionStrategy};

fn arb_category() -> impl Strategy<Value = ItemCategory> {
    prop_oneof![
        Just(ItemCategory::Instruction),
        Just(ItemCategory::Decision),
        Just(ItemCategory::FileContent),
        Just(ItemCategory::UnderstandingNode),
        Just(ItemCategory::Memory),
        Just(ItemCategory::Summary),
        Just(ItemCategory::ErrorContext),
        Just(ItemCategory::Dependency),
    ]
}

fn arb_policy() -> impl Strategy<Value = EvictionPolicy> {
    prop_oneof![
        Just(EvictionPolicy::Recency),
        Just(EvictionPolicy::Priority),
        Just(EvictionPolicy::Adaptive),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<ContextItem>> {
    proptest::collection::vec(
        (arb_category(), 1u32..50, 0.0f64..=1.0, 0i64..500),
        1..20,
    )
    .prop_map(|specs| {
        let now = Utc::now();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (category, size, priority, hours_ago))| {
                let mut item =
                    ContextItem::new(format!("item{i}"), category, "content", size, now);
                item.priority = priority;
                item.last_accessed = now - Duration::hours(hours_ago);
                item
            })
            .collect()
    })
}

proptest! {
    // ── No strategy ever selects an instruction item ─────────────────────

    #[test]
    fn instructions_are_never_selected(
        items in arb_items(),
        policy in arb_policy(),
        tokens_to_free in 0u32..500,
    ) {
        let now = Utc::now();
        let mut strategy = EvictionStrategy::from_policy(policy, &EvictionConfig::default());
        let refs: Vec<&ContextItem> = items.iter().collect();

        let selected = strategy.select(&refs, tokens_to_free, now);
        for id in &selected {
            let item = items.iter().find(|i| &i.id == id).expect("selected unknown id");
            prop_assert!(
                item.category != ItemCategory::Instruction,
                "{policy} selected instruction {id}"
            );
        }
    }

    // ── Selection frees the target or exhausts the candidates ────────────

    #[test]
    fn selection_frees_target_or_runs_out(
        items in arb_items(),
        policy in arb_policy(),
        tokens_to_free in 1u32..500,
    ) {
        let now = Utc::now();
        let mut strategy = EvictionStrategy::from_policy(policy, &EvictionConfig::default());
        let refs: Vec<&ContextItem> = items.iter().collect();

        let selected = strategy.select(&refs, tokens_to_free, now);
        let freed: u32 = selected
            .iter()
            .map(|id| items.iter().find(|i| &i.id == id).map(|i| i.size).unwrap_or(0))
            .sum();
        let evictable_total: u32 = items
            .iter()
            .filter(|i| i.category != ItemCategory::Instruction)
            .map(|i| i.size)
            .sum();

        prop_assert!(
            freed >= tokens_to_free.min(evictable_total),
            "freed {freed} of {tokens_to_free} with {evictable_total} evictable"
        );
    }

    // ── Selections never repeat an id ────────────────────────────────────

    #[test]
    fn selection_has_no_duplicates(
        items in arb_items(),
        policy in arb_policy(),
        tokens_to_free in 0u32..500,
    ) {
        let now = Utc::now();
        let mut strategy = EvictionStrategy::from_policy(policy, &EvictionConfig::default());
        let refs: Vec<&ContextItem> = items.iter().collect();

        let selected = strategy.select(&refs, tokens_to_free, now);
        let mut unique = selected.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), selected.len());
    }
}
