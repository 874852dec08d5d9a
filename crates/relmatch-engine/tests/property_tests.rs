use chrono::{DateTime, Duration, TimeZone, Utc};
use indexmap::IndexMap;
use proptest::prelude::*;

use relmatch_core::types::{Inventory, ReleaseItem};
use relmatch_engine::modifiers::frequency_boost;
use relmatch_engine::RankingEngine;

const KNOWN: &[&str] = &[
    "Microsoft.Compute/virtualMachines",
    "Microsoft.Storage/storageAccounts",
    "Microsoft.Network/virtualNetworks",
    "Microsoft.Web/sites",
];
const UNKNOWN: &str = "contoso.widgets/gadgets";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Virtual Machines",
        "VM",
        "Storage Account",
        "Blob Storage",
        "Virtual Network",
        "App Service",
        "Gadgets",
        "generally available",
        "retirement",
        "preview",
        "security",
        "pricing",
        "East US",
        "East US 2",
        "West Europe",
        "select regions",
        "globally",
        "update",
        "Compute",
        "Networking",
    ])
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|w| w.join(" "))
}

fn release() -> impl Strategy<Value = ReleaseItem> {
    (text(), text(), prop::collection::vec(word(), 0..3), prop::option::of(-5i64..400)).prop_map(
        |(title, summary, categories, age)| ReleaseItem {
            title,
            summary,
            categories: categories.into_iter().map(String::from).collect(),
            published: age.map(|d| (now() - Duration::days(d)).to_rfc3339()).unwrap_or_default(),
            ..ReleaseItem::default()
        },
    )
}

fn releases() -> impl Strategy<Value = Vec<ReleaseItem>> {
    prop::collection::vec(release(), 0..8).prop_map(|mut rs| {
        for (i, r) in rs.iter_mut().enumerate() {
            r.id = format!("r{i}");
        }
        rs
    })
}

fn inventory() -> impl Strategy<Value = Inventory> {
    let types: Vec<&'static str> = KNOWN.iter().copied().chain([UNKNOWN]).collect();
    (
        prop::collection::vec((prop::sample::select(types), 1u64..500), 1..6),
        prop::collection::vec(prop::sample::select(vec!["eastus", "East US 2", "westeurope", "japaneast"]), 0..4),
    )
        .prop_map(|(counts, regions)| Inventory::from_counts(counts).with_regions(regions))
}

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(inv in inventory(), rels in releases(), threshold in 0.0f64..=1.0) {
        let engine = RankingEngine::new(relmatch_kb::builtin()).with_threshold(threshold);
        for results in [engine.score_at(&inv.by_type, &rels, now()), engine.score_with_regions_at(&inv, &rels, now())] {
            prop_assert_eq!(results.len(), inv.by_type.len());
            for r in &results {
                prop_assert!((0.0..=1.0).contains(&r.overall_score));
                for m in &r.matched_releases {
                    prop_assert!((0.0..=1.0).contains(&m.relevance_score));
                    prop_assert!(m.relevance_score >= threshold);
                    prop_assert!(m.relevance_score <= r.overall_score);
                }
            }
            for pair in results.windows(2) {
                prop_assert!(pair[0].overall_score >= pair[1].overall_score);
            }
        }
    }

    #[test]
    fn unknown_types_stay_empty(inv in inventory(), rels in releases()) {
        let engine = RankingEngine::new(relmatch_kb::builtin()).with_threshold(0.0);
        for r in engine.score_with_regions_at(&inv, &rels, now()) {
            if r.resource_type == UNKNOWN {
                prop_assert!(r.matched_releases.is_empty());
                prop_assert_eq!(r.overall_score, 0.0);
            }
        }
    }

    #[test]
    fn same_inputs_same_output(inv in inventory(), rels in releases()) {
        let engine = RankingEngine::new(relmatch_kb::builtin()).with_threshold(0.3);
        prop_assert_eq!(engine.score_with_regions_at(&inv, &rels, now()), engine.score_with_regions_at(&inv, &rels, now()));
    }

    #[test]
    fn frequency_boost_is_bounded_and_monotone(max in 1u64..10_000, a in 0u64..10_000, b in 0u64..10_000) {
        let (lo, hi) = if a <= b { (a.min(max), b.min(max)) } else { (b.min(max), a.min(max)) };
        let f_lo = frequency_boost(lo, max);
        let f_hi = frequency_boost(hi, max);
        prop_assert!((0.0..=0.15).contains(&f_lo));
        prop_assert!(f_lo <= f_hi + 1e-12);
    }

    #[test]
    fn more_prevalent_type_never_scores_lower(rels in releases(), low in 1u64..50, extra in 0u64..50) {
        let high = low + extra;
        let vm = KNOWN[0];
        let engine = RankingEngine::new(relmatch_kb::builtin()).with_threshold(0.0);
        let with = |count: u64| -> IndexMap<String, u64> {
            [(vm.to_string(), count), ("Microsoft.Web/sites".to_string(), 100)].into_iter().collect()
        };
        let score_of = |count: u64| {
            engine
                .score_at(&with(count), &rels, now())
                .into_iter()
                .find(|r| r.resource_type == vm)
                .map(|r| r.overall_score)
                .unwrap_or(0.0)
        };
        prop_assert!(score_of(low) <= score_of(high) + 1e-12);
    }
}
