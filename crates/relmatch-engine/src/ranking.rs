//! Per resource type orchestration: reject, match, modify, threshold, sort.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rayon::prelude::*;
use relmatch_core::config::DEFAULT_THRESHOLD;
use relmatch_core::types::{timestamp_millis_or_zero, Inventory, MatchResult, MatchedRelease, ReleaseItem};
use relmatch_kb::{KnowledgeBase, RegionEntry};
use std::fmt;

use crate::field;
use crate::modifiers::{self, Accumulator, Lifecycle, PipelineInput, RegionInput, RegionScope};
use crate::taxonomy;

/// Why a (resource type, release) pair produced no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    CategoryMismatch,
    NoFieldMatch,
    BelowThreshold,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::CategoryMismatch => "category mismatch",
            SkipReason::NoFieldMatch => "no field match",
            SkipReason::BelowThreshold => "below threshold",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pairs: usize,
    pub kept: usize,
    pub category_mismatch: usize,
    pub no_field_match: usize,
    pub below_threshold: usize,
}

impl RunStats {
    fn skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::CategoryMismatch => self.category_mismatch += 1,
            SkipReason::NoFieldMatch => self.no_field_match += 1,
            SkipReason::BelowThreshold => self.below_threshold += 1,
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            pairs: self.pairs + other.pairs,
            kept: self.kept + other.kept,
            category_mismatch: self.category_mismatch + other.category_mismatch,
            no_field_match: self.no_field_match + other.no_field_match,
            below_threshold: self.below_threshold + other.below_threshold,
        }
    }
}

/// Release facts that do not depend on the resource type, computed once per run.
struct PreparedRelease<'r, 'kb> {
    item: &'r ReleaseItem,
    lowered_categories: Vec<String>,
    lifecycle: Option<Lifecycle>,
    critical: bool,
    published_at: Option<DateTime<Utc>>,
    limited: bool,
    mentioned: Vec<&'kb RegionEntry>,
}

impl<'r, 'kb> PreparedRelease<'r, 'kb> {
    fn new(kb: &'kb KnowledgeBase, item: &'r ReleaseItem, with_regions: bool) -> Self {
        let text = format!("{} {}", item.title, item.summary);
        let mentioned = if with_regions {
            let texts = [item.title.as_str(), item.summary.as_str()].into_iter().chain(item.categories.iter().map(String::as_str));
            kb.mentioned_regions(texts)
        } else {
            Vec::new()
        };
        Self {
            item,
            lowered_categories: item.categories.iter().map(|c| c.to_lowercase()).collect(),
            lifecycle: modifiers::classify_lifecycle(&text),
            critical: modifiers::is_critical(&text),
            published_at: item.published_at(),
            limited: modifiers::is_limited_rollout(&text),
            mentioned,
        }
    }
}

pub struct RankingEngine<'kb> {
    kb: &'kb KnowledgeBase,
    threshold: f64,
}

impl<'kb> RankingEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb, threshold: DEFAULT_THRESHOLD }
    }

    /// Minimum relevance (inclusive) for a release to be kept.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score without the region adjustment.
    pub fn score(&self, inventory: &IndexMap<String, u64>, releases: &[ReleaseItem]) -> Vec<MatchResult> {
        self.score_at(inventory, releases, Utc::now())
    }

    pub fn score_at(&self, inventory: &IndexMap<String, u64>, releases: &[ReleaseItem], now: DateTime<Utc>) -> Vec<MatchResult> {
        self.run(inventory, None, releases, now)
    }

    /// Score with the region adjustment against the inventory's region set.
    /// An inventory without regions scores exactly like [`RankingEngine::score`].
    pub fn score_with_regions(&self, inventory: &Inventory, releases: &[ReleaseItem]) -> Vec<MatchResult> {
        self.score_with_regions_at(inventory, releases, Utc::now())
    }

    pub fn score_with_regions_at(&self, inventory: &Inventory, releases: &[ReleaseItem], now: DateTime<Utc>) -> Vec<MatchResult> {
        let scope = RegionScope::new(self.kb, inventory.regions.iter().map(String::as_str));
        let scope = (!scope.is_empty()).then_some(scope);
        self.run(&inventory.by_type, scope.as_ref(), releases, now)
    }

    fn run(
        &self,
        by_type: &IndexMap<String, u64>,
        scope: Option<&RegionScope<'_>>,
        releases: &[ReleaseItem],
        now: DateTime<Utc>,
    ) -> Vec<MatchResult> {
        let prepared: Vec<PreparedRelease<'_, 'kb>> =
            releases.par_iter().map(|r| PreparedRelease::new(self.kb, r, scope.is_some())).collect();
        let max_count = by_type.values().copied().max().unwrap_or(0);
        let entries: Vec<(&str, u64)> = by_type.iter().map(|(k, v)| (k.as_str(), *v)).collect();

        let scored: Vec<(MatchResult, RunStats)> = entries
            .par_iter()
            .map(|&(resource_type, count)| self.score_type(resource_type, count, max_count, &prepared, scope, now))
            .collect();

        let stats = scored.iter().fold(RunStats::default(), |acc, (_, s)| acc.merge(*s));
        let mut results: Vec<MatchResult> = scored.into_iter().map(|(r, _)| r).collect();
        sort_results(&mut results);

        tracing::debug!(
            resource_types = results.len(),
            releases = releases.len(),
            region_aware = scope.is_some(),
            threshold = self.threshold,
            pairs = stats.pairs,
            kept = stats.kept,
            category_mismatch = stats.category_mismatch,
            no_field_match = stats.no_field_match,
            below_threshold = stats.below_threshold,
            "scoring run complete"
        );
        results
    }

    fn score_type(
        &self,
        resource_type: &str,
        count: u64,
        max_count: u64,
        prepared: &[PreparedRelease<'_, 'kb>],
        scope: Option<&RegionScope<'_>>,
        now: DateTime<Utc>,
    ) -> (MatchResult, RunStats) {
        let mut stats = RunStats { pairs: prepared.len(), ..RunStats::default() };
        let mut result = MatchResult::empty(resource_type, count);
        let Some(entry) = self.kb.service(resource_type) else {
            // Unknown types have no aliases and can never match.
            stats.no_field_match = prepared.len();
            return (result, stats);
        };
        let own_category = taxonomy::category_of(resource_type);

        for rel in prepared {
            if own_category.is_some_and(|own| taxonomy::conflicts_lowered(own, &rel.lowered_categories)) {
                skip(&mut stats, resource_type, rel, SkipReason::CategoryMismatch);
                continue;
            }
            let title = field::title_match(entry, &rel.item.title);
            let category = field::category_match(entry, &rel.lowered_categories);
            if !title.is_match() && !category.is_match() {
                skip(&mut stats, resource_type, rel, SkipReason::NoFieldMatch);
                continue;
            }

            let mut reasons = Vec::new();
            if let Some(alias) = title.alias {
                reasons.push(format!("title match: {alias}"));
            }
            if let Some(alias) = category.alias {
                reasons.push(format!("category match: {alias}"));
            }
            let input = PipelineInput {
                lifecycle: rel.lifecycle,
                critical: rel.critical,
                published_at: rel.published_at,
                now,
                count,
                max_count,
                region: scope.map(|scope| RegionInput { mentioned: &rel.mentioned, limited: rel.limited, scope }),
            };
            let acc = modifiers::run(Accumulator::new(title.score + category.score, reasons), &input).clamped();

            if acc.score < self.threshold {
                skip(&mut stats, resource_type, rel, SkipReason::BelowThreshold);
                continue;
            }
            stats.kept += 1;
            result.matched_releases.push(MatchedRelease::from_release(rel.item, acc.score, acc.reasons));
        }

        finalize(&mut result);
        (result, stats)
    }
}

fn skip(stats: &mut RunStats, resource_type: &str, rel: &PreparedRelease<'_, '_>, reason: SkipReason) {
    stats.skip(reason);
    tracing::trace!(resource_type, release = %rel.item.id, %reason, "release skipped");
}

/// Relevance descending, then publish time descending (undated last).
pub fn sort_matches(matches: &mut [MatchedRelease]) {
    matches.sort_by(|a, b| {
        b.effective_score()
            .total_cmp(&a.effective_score())
            .then_with(|| timestamp_millis_or_zero(&b.published).cmp(&timestamp_millis_or_zero(&a.published)))
    });
}

/// Sort a result's matches and recompute its overall score.
pub fn finalize(result: &mut MatchResult) {
    sort_matches(&mut result.matched_releases);
    result.overall_score = result
        .matched_releases
        .iter()
        .map(MatchedRelease::effective_score)
        .fold(0.0_f64, f64::max)
        .clamp(0.0, 1.0);
}

/// Overall score descending, then resource count descending.
pub fn sort_results(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| b.resource_count.cmp(&a.resource_count))
    });
}

/// Non-region-aware scoring against the built-in knowledge base.
pub fn score(inventory: &IndexMap<String, u64>, releases: &[ReleaseItem], threshold: f64) -> Vec<MatchResult> {
    RankingEngine::new(relmatch_kb::builtin()).with_threshold(threshold).score(inventory, releases)
}

/// Region-aware scoring against the built-in knowledge base.
pub fn score_with_regions(inventory: &Inventory, releases: &[ReleaseItem], threshold: f64) -> Vec<MatchResult> {
    RankingEngine::new(relmatch_kb::builtin()).with_threshold(threshold).score_with_regions(inventory, releases)
}
