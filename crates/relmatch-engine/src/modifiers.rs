//! Adjustments applied on top of a field-match base score.
//!
//! Each step is a pure function over an [`Accumulator`]; [`run`] applies them
//! in the fixed order lifecycle → frequency → (clamp) → recency → region.
//! The score is clamped once before recency is added and not again until the
//! caller's final clamp, so recency and the region step operate on a value
//! that may briefly exceed 1.

use chrono::{DateTime, Utc};
use regex::Regex;
use relmatch_kb::{normalize_region, KnowledgeBase, RegionEntry};
use std::sync::LazyLock;

pub const FREQUENCY_CEILING: f64 = 0.15;
pub const RECENCY_CEILING: f64 = 0.15;
/// Days for the recency factor to fall to 1/e.
pub const RECENCY_DECAY_DAYS: f64 = 60.0;
/// Lowest recency factor for breaking or security items.
pub const CRITICAL_RECENCY_FLOOR: f64 = 0.5;
pub const GLOBAL_BOOST_PER_REGION: f64 = 0.02;
pub const GLOBAL_BOOST_CAP: f64 = 0.05;
pub const MISMATCH_FACTOR: f64 = 0.7;
pub const LIMITED_MISMATCH_FACTOR: f64 = 0.5;
pub const COVERAGE_BOOST: f64 = 0.2;

/// Lifecycle buckets in priority order; only the first that matches counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Breaking,
    GeneralAvailability,
    SecurityFix,
    Pricing,
    Preview,
}

impl Lifecycle {
    pub fn boost(self) -> f64 {
        match self {
            Lifecycle::Breaking => 0.20,
            Lifecycle::GeneralAvailability => 0.12,
            Lifecycle::SecurityFix | Lifecycle::Pricing => 0.08,
            Lifecycle::Preview => 0.06,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lifecycle::Breaking => "breaking change",
            Lifecycle::GeneralAvailability => "general availability",
            Lifecycle::SecurityFix => "security fix",
            Lifecycle::Pricing => "pricing",
            Lifecycle::Preview => "preview",
        }
    }
}

static LIFECYCLE_PATTERNS: LazyLock<Vec<(Lifecycle, Regex)>> = LazyLock::new(|| {
    [
        (
            Lifecycle::Breaking,
            r"(?i)\b(breaking|retire[ds]?|retirement|retiring|deprecat\w*|end of (support|life)|removal)\b",
        ),
        (Lifecycle::GeneralAvailability, r"(?i)\b(generally available|general availability|ga|launched)\b"),
        (
            Lifecycle::SecurityFix,
            r"(?i)\b(security|vulnerabilit(y|ies)|cve|fix(es|ed)?|bug ?fix(es)?|hotfix(es)?|patch(es|ed)?)\b",
        ),
        (Lifecycle::Pricing, r"(?i)\b(pricing|prices?|billing|billed|cost)\b"),
        (Lifecycle::Preview, r"(?i)\b(preview|beta)\b"),
    ]
    .into_iter()
    .map(|(bucket, pattern)| (bucket, Regex::new(pattern).expect("lifecycle pattern compiles")))
    .collect()
});

static LIMITED_ROLLOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(limited|select(ed)?|specific|certain|some) regions?\b|\blimited (availability|rollout|release)\b")
        .expect("limited rollout pattern compiles")
});

/// First lifecycle bucket whose keywords occur in `text`.
pub fn classify_lifecycle(text: &str) -> Option<Lifecycle> {
    LIFECYCLE_PATTERNS.iter().find(|(_, re)| re.is_match(text)).map(|(bucket, _)| *bucket)
}

/// Breaking or security wording anywhere in `text`, regardless of which
/// bucket won the lifecycle classification.
pub fn is_critical(text: &str) -> bool {
    LIFECYCLE_PATTERNS
        .iter()
        .filter(|(bucket, _)| matches!(bucket, Lifecycle::Breaking | Lifecycle::SecurityFix))
        .any(|(_, re)| re.is_match(text))
}

pub fn is_limited_rollout(text: &str) -> bool {
    LIMITED_ROLLOUT.is_match(text)
}

/// Prevalence boost in `[0, FREQUENCY_CEILING]`, non-decreasing in `count`.
///
/// A sigmoid over `count / max_count`, damped by
/// `log10(count + 1) / log10(max_count + 1)` so rare types stay small even
/// when they dominate a tiny inventory.
pub fn frequency_boost(count: u64, max_count: u64) -> f64 {
    if count == 0 || max_count == 0 {
        return 0.0;
    }
    let p = (count as f64 / max_count as f64).min(1.0);
    let sigmoid = 1.0 / (1.0 + (-6.0 * (p - 0.5)).exp());
    let term = (FREQUENCY_CEILING * (sigmoid - 0.5) * 2.0).max(0.0);
    let damping = ((count as f64 + 1.0).log10() / (max_count as f64 + 1.0).log10()).min(1.0);
    term * damping
}

/// Exponential freshness factor, floored for critical items. Zero without a
/// publish date.
pub fn recency_boost(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>, critical: bool) -> f64 {
    let Some(published) = published_at else {
        return 0.0;
    };
    let mut decay = (-age_days(published, now) / RECENCY_DECAY_DAYS).exp();
    if critical {
        decay = decay.max(CRITICAL_RECENCY_FLOOR);
    }
    RECENCY_CEILING * decay
}

fn age_days(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - published).num_seconds() as f64 / 86_400.0).max(0.0)
}

/// Running score plus the reasons of every step that fired, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl Accumulator {
    pub fn new(score: f64, reasons: Vec<String>) -> Self {
        Self { score, reasons }
    }

    pub fn clamped(mut self) -> Self {
        self.score = self.score.clamp(0.0, 1.0);
        self
    }

    fn bump(mut self, delta: f64, reason: String) -> Self {
        self.score += delta;
        self.reasons.push(reason);
        self
    }
}

/// Inventory regions, one per distinct region. Spellings the knowledge base
/// knows collapse onto their region key (`westeurope`, `weu` and `amsterdam`
/// are one region); unknown names collapse by normalized spelling.
pub struct RegionScope<'kb> {
    kb: &'kb KnowledgeBase,
    regions: Vec<String>,
}

impl<'kb> RegionScope<'kb> {
    pub fn new<'a, I>(kb: &'kb KnowledgeBase, regions: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: Vec<String> = Vec::new();
        let mut kept = Vec::new();
        for r in regions {
            let identity = match kb.region(r) {
                Some(entry) => entry.key().to_string(),
                None => normalize_region(r),
            };
            if identity.is_empty() || seen.contains(&identity) {
                continue;
            }
            seen.push(identity);
            kept.push(r.to_string());
        }
        Self { kb, regions: kept }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn covers(&self, region: &RegionEntry) -> bool {
        self.regions.iter().any(|r| self.kb.regions_equivalent(r, region.key()))
    }
}

/// What the release says about where it applies.
pub struct RegionInput<'a> {
    pub mentioned: &'a [&'a RegionEntry],
    pub limited: bool,
    pub scope: &'a RegionScope<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionEffect {
    Unchanged,
    GlobalBoost(f64),
    Mismatch { factor: f64, limited: bool },
    Coverage { matched: usize, mentioned: usize, boost: f64 },
}

pub fn region_effect(input: &RegionInput<'_>) -> RegionEffect {
    if input.mentioned.is_empty() {
        if input.scope.len() >= 2 && !input.limited {
            let boost = (GLOBAL_BOOST_PER_REGION * input.scope.len() as f64).min(GLOBAL_BOOST_CAP);
            return RegionEffect::GlobalBoost(boost);
        }
        return RegionEffect::Unchanged;
    }
    let matched = input.mentioned.iter().filter(|r| input.scope.covers(r)).count();
    if matched == 0 {
        let factor = if input.limited { LIMITED_MISMATCH_FACTOR } else { MISMATCH_FACTOR };
        return RegionEffect::Mismatch { factor, limited: input.limited };
    }
    let mentioned = input.mentioned.len();
    RegionEffect::Coverage { matched, mentioned, boost: COVERAGE_BOOST * matched as f64 / mentioned as f64 }
}

pub fn apply_lifecycle(acc: Accumulator, lifecycle: Option<Lifecycle>) -> Accumulator {
    match lifecycle {
        Some(bucket) => acc.bump(bucket.boost(), format!("lifecycle: {}", bucket.label())),
        None => acc,
    }
}

pub fn apply_frequency(acc: Accumulator, count: u64, max_count: u64) -> Accumulator {
    let boost = frequency_boost(count, max_count);
    if boost > 0.0 {
        acc.bump(boost, format!("frequency: {count} of max {max_count}"))
    } else {
        acc
    }
}

pub fn apply_recency(acc: Accumulator, published_at: Option<DateTime<Utc>>, now: DateTime<Utc>, critical: bool) -> Accumulator {
    let Some(published) = published_at else {
        return acc;
    };
    let days = age_days(published, now).floor();
    let boost = recency_boost(published_at, now, critical);
    let reason = if critical { format!("recency: {days}d old, critical") } else { format!("recency: {days}d old") };
    acc.bump(boost, reason)
}

pub fn apply_region(mut acc: Accumulator, input: &RegionInput<'_>) -> Accumulator {
    match region_effect(input) {
        RegionEffect::Unchanged => acc,
        RegionEffect::GlobalBoost(boost) => acc.bump(boost, "global release".to_string()),
        RegionEffect::Mismatch { factor, limited } => {
            acc.score *= factor;
            acc.reasons.push("region mismatch".to_string());
            if limited {
                acc.reasons.push("limited rollout".to_string());
            }
            acc
        }
        RegionEffect::Coverage { boost, .. } => {
            let names: Vec<&str> = input
                .mentioned
                .iter()
                .filter(|r| input.scope.covers(r))
                .map(|r| r.display_name())
                .collect();
            acc.bump(boost, format!("region match: {}", names.join(", ")))
        }
    }
}

/// Per-pair facts the pipeline needs.
pub struct PipelineInput<'a> {
    pub lifecycle: Option<Lifecycle>,
    pub critical: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
    pub count: u64,
    pub max_count: u64,
    pub region: Option<RegionInput<'a>>,
}

/// Apply every modifier in order. The result is not clamped at the end.
pub fn run(acc: Accumulator, input: &PipelineInput<'_>) -> Accumulator {
    let acc = apply_lifecycle(acc, input.lifecycle);
    let acc = apply_frequency(acc, input.count, input.max_count).clamped();
    let acc = apply_recency(acc, input.published_at, input.now, input.critical);
    match &input.region {
        Some(region) => apply_region(acc, region),
        None => acc,
    }
}
