use std::collections::HashSet;

use chrono::{Duration, Utc};
use proptest::prelude::*;

use stowage_core::config::ScoringConfig;
use stowage_core::models::SessionSnapshot;
use stowage_core::{ContextItem, ItemCategory};
use stowage_scoring::{value_score, PriorityScorer};

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

proptest! {
    // ── Priority always lands in [0, 1] ──────────────────────────────────

    #[test]
    fn priority_bounded(
        category in arb_category(),
        access_count in 0u64..10_000,
        hours_since_access in 0i64..10_000,
        objective_count in 0usize..8,
    ) {
        let now = Utc::now();
        let scorer = PriorityScorer::new(ScoringConfig::default());
        let mut item = ContextItem::new("item", category, "alpha beta gamma", 10, now);
        item.access_count = access_count;
        item.last_accessed = now - Duration::hours(hours_since_access);
        let objectives: Vec<String> = (0..objective_count).map(|i| format!("kw{i}")).collect();

        let priority = scorer.score(&item, &objectives, &SessionSnapshot::default(), now);
        prop_assert!((0.0..=1.0).contains(&priority), "priority out of bounds: {priority}");
    }

    // ── Value score is monotone in priority ──────────────────────────────

    #[test]
    fn value_monotone_in_priority(
        base in 0.0f64..0.9,
        bump in 0.01f64..0.1,
        relevance in 0.0f64..1.0,
        access_count in 0u64..100,
    ) {
        let now = Utc::now();
        let mut item = ContextItem::new("item", ItemCategory::Memory, "content", 10, now);
        item.relevance = relevance;
        item.access_count = access_count;

        item.priority = base;
        let before = value_score(&item, now);
        item.priority = base + bump;
        let after = value_score(&item, now);
        prop_assert!(after > before, "raising priority lowered value: {before} -> {after}");
    }

    // ── Dependency satisfaction never exceeds 1 ──────────────────────────

    #[test]
    fn dependency_factor_bounded(dep_count in 0usize..12, known_count in 0usize..12) {
        let now = Utc::now();
        let scorer = PriorityScorer::new(ScoringConfig::default());
        let mut item = ContextItem::new("item", ItemCategory::Dependency, "content", 10, now);
        item.dependencies = (0..dep_count).map(|i| format!("dep{i}")).collect();
        let known: HashSet<String> = (0..known_count).map(|i| format!("dep{i}")).collect();

        let breakdown = scorer.breakdown(&item, &[], &SessionSnapshot::new(known, vec![]), now);
        prop_assert!((0.0..=1.0).contains(&breakdown.dependency_score));
    }
}
