use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

use relmatch_core::types::{Inventory, ReleaseItem};
use relmatch_engine::ranking::sort_results;
use relmatch_engine::{score, score_with_regions, RankingEngine};
use relmatch_kb::{KnowledgeBase, RegionMapping, ServiceMapping};

const VM: &str = "contoso.compute/virtualmachines";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn kb() -> KnowledgeBase {
    KnowledgeBase::new(
        vec![
            ServiceMapping::new(VM, ["Virtual Machines", "VM"], 0.9),
            ServiceMapping::new("contoso.storage/accounts", ["Storage Account"], 0.8),
        ],
        vec![
            RegionMapping::new("westeurope", "West Europe", ["West Europe", "westeurope", "weu"]),
            RegionMapping::new("eastus", "East US", ["East US", "eastus"]),
        ],
    )
    .expect("kb")
}

fn release(id: &str, title: &str, summary: &str, published: &str, categories: &[&str]) -> ReleaseItem {
    ReleaseItem {
        id: id.to_string(),
        title: title.to_string(),
        link: format!("https://updates.example/{id}"),
        published: published.to_string(),
        summary: summary.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

fn counts(entries: &[(&str, u64)]) -> IndexMap<String, u64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn fresh_ga_title_match_saturates_to_one() {
    let kb = kb();
    let releases = vec![release("r1", "Virtual Machines: new SKU generally available", "", &now().to_rfc3339(), &[])];
    let results = RankingEngine::new(&kb).with_threshold(1.0).score_at(&counts(&[(VM, 5)]), &releases, now());

    assert_eq!(results.len(), 1);
    let m = &results[0].matched_releases;
    assert_eq!(m.len(), 1, "score of exactly 1.0 passes a 1.0 threshold");
    assert_eq!(m[0].relevance_score, 1.0);
    assert_eq!(results[0].overall_score, 1.0);
    assert_eq!(m[0].reasons[0], "title match: Virtual Machines");
    assert_eq!(m[0].reasons[1], "lifecycle: general availability");
    assert!(m[0].reasons[2].starts_with("frequency: 5"));
    assert!(m[0].reasons[3].starts_with("recency: 0d"));
}

#[test]
fn release_without_alias_is_skipped_entirely() {
    let kb = kb();
    let releases = vec![release(
        "r1",
        "Storage account redundancy options",
        "Retirement of legacy tiers, generally available now",
        &now().to_rfc3339(),
        &["Launched"],
    )];
    let results = RankingEngine::new(&kb).with_threshold(0.0).score_at(&counts(&[(VM, 5)]), &releases, now());
    assert!(results[0].matched_releases.is_empty(), "no title or category hit, not even at threshold 0");
    assert_eq!(results[0].overall_score, 0.0);
}

#[test]
fn every_inventory_entry_gets_a_result() {
    let kb = kb();
    let results = RankingEngine::new(&kb).score_at(&counts(&[(VM, 1), ("contoso.unknown/thing", 3)]), &[], now());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.matched_releases.is_empty() && r.overall_score == 0.0));
}

#[test]
fn ties_on_overall_score_break_by_resource_count() {
    let kb = kb();
    let inv = counts(&[(VM, 2), ("contoso.storage/accounts", 9), ("contoso.unknown/thing", 4)]);
    let results = RankingEngine::new(&kb).score_at(&inv, &[], now());
    let order: Vec<u64> = results.iter().map(|r| r.resource_count).collect();
    assert_eq!(order, vec![9, 4, 2]);
}

#[test]
fn higher_overall_score_sorts_before_higher_count() {
    let kb = kb();
    let inv = counts(&[("contoso.storage/accounts", 50), (VM, 1)]);
    let releases = vec![release("r1", "VM retirement announced", "", "", &[])];
    let results = RankingEngine::new(&kb).with_threshold(0.1).score_at(&inv, &releases, now());
    assert_eq!(results[0].resource_type, VM);
    assert!(results[0].overall_score > results[1].overall_score);
}

#[test]
fn equal_scores_order_newest_first_and_undated_last() {
    let kb = kb();
    let cats = ["Virtual Machines"];
    let releases = vec![
        release("undated", "Virtual Machines retirement", "", "", &cats),
        release("older", "Virtual Machines retirement", "", "2025-05-01T00:00:00Z", &cats),
        release("newer", "Virtual Machines retirement", "", "2025-05-20T00:00:00Z", &cats),
    ];
    let results = RankingEngine::new(&kb).score_at(&counts(&[(VM, 3)]), &releases, now());
    let ids: Vec<&str> = results[0].matched_releases.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older", "undated"]);
    assert!(results[0].matched_releases.iter().all(|m| m.relevance_score == 1.0));
}

#[test]
fn threshold_is_inclusive() {
    let kb = kb();
    let inv = counts(&[(VM, 1), ("contoso.storage/accounts", 4)]);
    let releases = vec![release("r1", "VM sizes", "", "2025-04-01T00:00:00Z", &[])];
    let baseline = RankingEngine::new(&kb).with_threshold(0.0).score_at(&inv, &releases, now());
    let vm = baseline.iter().find(|r| r.resource_type == VM).unwrap();
    let s = vm.matched_releases[0].relevance_score;
    assert!(s > 0.0 && s < 1.0);

    let at = RankingEngine::new(&kb).with_threshold(s).score_at(&inv, &releases, now());
    assert_eq!(at.iter().find(|r| r.resource_type == VM).unwrap().matched_releases.len(), 1);

    let above = RankingEngine::new(&kb).with_threshold(s + 1e-9).score_at(&inv, &releases, now());
    assert!(above.iter().find(|r| r.resource_type == VM).unwrap().matched_releases.is_empty());
}

#[test]
fn category_conflict_rejects_before_matching() {
    let inv = counts(&[("Microsoft.Compute/virtualMachines", 1)]);
    let conflicting = vec![release("r1", "Virtual Machines backup vaults", "", "", &["Storage"])];
    let overlapping = vec![release("r1", "Virtual Machines backup vaults", "", "", &["Compute", "Storage"])];
    assert!(score(&inv, &conflicting, 0.0)[0].matched_releases.is_empty());
    assert_eq!(score(&inv, &overlapping, 0.0)[0].matched_releases.len(), 1);
}

#[test]
fn unknown_resource_types_never_match() {
    let inv = counts(&[("contoso.widgets/gadgets", 10)]);
    let releases = vec![release("r1", "Gadgets generally available", "Widgets and gadgets", "", &["Gadgets"])];
    assert!(score(&inv, &releases, 0.0)[0].matched_releases.is_empty());
}

fn region_scores(regions: &[&str], title: &str, summary: &str) -> (f64, f64, Vec<String>) {
    let kb = kb();
    let engine = RankingEngine::new(&kb).with_threshold(0.0);
    let releases = vec![release("r1", title, summary, "", &[])];
    let plain = engine.score_at(&counts(&[(VM, 1)]), &releases, now());
    let inv = Inventory::from_counts([(VM, 1)]).with_regions(regions.iter().copied());
    let aware = engine.score_with_regions_at(&inv, &releases, now());
    let m = &aware[0].matched_releases[0];
    (plain[0].matched_releases[0].relevance_score, m.relevance_score, m.reasons.clone())
}

#[test]
fn region_mismatch_applies_penalty() {
    let (plain, aware, reasons) = region_scores(&["west europe"], "Virtual Machines update", "available in East US");
    assert!((aware - plain * 0.7).abs() < 1e-12, "plain={plain} aware={aware}");
    assert!(reasons.contains(&"region mismatch".to_string()));
    assert!(!reasons.contains(&"limited rollout".to_string()));
}

#[test]
fn limited_rollout_mismatch_is_penalized_harder() {
    let (plain, aware, reasons) =
        region_scores(&["westeurope"], "Virtual Machines update", "limited availability in East US");
    assert!((aware - plain * 0.5).abs() < 1e-12);
    assert!(reasons.contains(&"limited rollout".to_string()));
}

#[test]
fn region_coverage_adds_proportional_boost() {
    let (plain, aware, reasons) =
        region_scores(&["weu"], "Virtual Machines update", "Rolling out to West Europe and East US");
    assert!((aware - (plain + 0.1)).abs() < 1e-12, "one of two mentioned regions covered");
    assert!(reasons.iter().any(|r| r == "region match: West Europe"));
}

#[test]
fn unmentioned_regions_get_global_boost_for_spread_inventories() {
    let (plain, aware, reasons) = region_scores(&["westeurope", "eastus"], "Virtual Machines update", "");
    assert!((aware - (plain + 0.04)).abs() < 1e-12);
    assert!(reasons.contains(&"global release".to_string()));

    let (plain, aware, _) = region_scores(&["westeurope", "eastus"], "Virtual Machines update", "in select regions");
    assert_eq!(plain, aware, "limited phrasing suppresses the global boost");

    let (plain, aware, _) = region_scores(&["westeurope", "West Europe"], "Virtual Machines update", "");
    assert_eq!(plain, aware, "one distinct region is not a spread inventory");
}

#[test]
fn aliases_of_one_region_do_not_make_a_spread_inventory() {
    for regions in [&["westeurope", "weu"][..], &["WestEurope", "West Europe", "weu"][..]] {
        let (plain, aware, reasons) = region_scores(regions, "Virtual Machines update", "");
        assert_eq!(plain, aware, "{regions:?}");
        assert!(!reasons.contains(&"global release".to_string()), "{regions:?}");
    }

    let inv = Inventory::from_counts([("Microsoft.Compute/virtualMachines", 1)]).with_regions(["westeurope", "amsterdam"]);
    let releases = vec![release("r1", "Virtual Machines update", "", "", &[])];
    let results = score_with_regions(&inv, &releases, 0.0);
    assert!(!results[0].matched_releases[0].reasons.iter().any(|r| r == "global release"));
}

#[test]
fn empty_region_set_scores_like_plain_variant() {
    let (plain, aware, reasons) = region_scores(&[], "Virtual Machines update", "available in East US");
    assert_eq!(plain, aware);
    assert!(!reasons.iter().any(|r| r.contains("region")));
}

#[test]
fn scoring_is_repeatable() {
    let kb = kb();
    let inv = counts(&[(VM, 3), ("contoso.storage/accounts", 7)]);
    let releases = vec![
        release("a", "Storage Account pricing", "", "2025-05-28T00:00:00Z", &[]),
        release("b", "VM preview", "", "2025-03-01T00:00:00Z", &["Virtual Machines"]),
        release("c", "Virtual Machines retirement", "", "not a date", &[]),
    ];
    let engine = RankingEngine::new(&kb).with_threshold(0.2);
    let first = engine.score_at(&inv, &releases, now());
    let second = engine.score_at(&inv, &releases, now());
    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn sort_results_is_stable_for_full_ties() {
    let mut results = vec![
        relmatch_core::types::MatchResult::empty("a", 1),
        relmatch_core::types::MatchResult::empty("b", 1),
    ];
    sort_results(&mut results);
    assert_eq!(results[0].resource_type, "a");
}
