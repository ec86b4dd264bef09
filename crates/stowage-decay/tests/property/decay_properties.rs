use chrono::{Duration, Utc};
use proptest::prelude::*;

use stowage_core::{ContextItem, ItemCategory};
use stowage_decay::{DecayContext, DecayEngine};

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

fn make_item(category: ItemCategory, relevance: f64, decay_rate: f64) -> ContextItem {
    let now = Utc::now();
    ContextItem::new(uuid::Uuid::new_v4().to_string(), category, "content", 10, now)
        .with_base_relevance(relevance)
        .with_decay_rate(decay_rate)
}

proptest! {
    // ── Decay output always lands in [0.1, 1.0] ──────────────────────────

    #[test]
    fn decayed_relevance_bounded(
        category in arb_category(),
        relevance in 0.1f64..=1.0,
        decay_rate in 0.0f64..5.0,
        hours in 0i64..10_000,
    ) {
        let engine = DecayEngine::default();
        let item = make_item(category, relevance, decay_rate);
        let ctx = DecayContext { now: item.created_at + Duration::hours(hours) };

        let decayed = engine.decayed(&item, &ctx);
        prop_assert!((0.1..=1.0).contains(&decayed), "out of bounds: {decayed}");
    }

    // ── Monotonically nonincreasing over time ────────────────────────────

    #[test]
    fn monotonically_nonincreasing(
        category in arb_category(),
        relevance in 0.1f64..=1.0,
        decay_rate in 0.0f64..2.0,
    ) {
        let engine = DecayEngine::default();
        let item = make_item(category, relevance, decay_rate);

        let mut prev = relevance;
        for hours in [1, 6, 24, 168, 720] {
            let ctx = DecayContext { now: item.created_at + Duration::hours(hours) };
            let decayed = engine.decayed(&item, &ctx);
            prop_assert!(
                decayed <= prev + f64::EPSILON,
                "not monotone at hour {hours}: {decayed} > {prev}"
            );
            prev = decayed;
        }
    }

    // ── Zero elapsed time never drops relevance below the floor rule ─────

    #[test]
    fn zero_hours_preserves_relevance_above_floor(
        category in arb_category(),
        relevance in 0.1f64..=1.0,
        decay_rate in 0.0f64..5.0,
    ) {
        let engine = DecayEngine::default();
        let item = make_item(category, relevance, decay_rate);
        let ctx = DecayContext { now: item.created_at };
        let decayed = engine.decayed(&item, &ctx);
        prop_assert!((decayed - relevance).abs() < 1e-12);
    }
}
