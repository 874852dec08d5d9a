//! Domain types shared by ingestion, scoring and augmentation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// `provider/resourceKind[/subKind...]`, compared case-insensitively.
pub type ResourceTypeId = String;
pub type ReleaseId = String;

/// One entry of a release-note feed.
///
/// `published` is kept verbatim; use [`ReleaseItem::published_at`] for the
/// parsed instant. Categories are free-text labels whose order carries no
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseItem {
    pub id: ReleaseId,
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl ReleaseItem {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published)
    }
}

/// Resource-type occurrence counts plus the inventory-wide deployment regions.
///
/// `by_type` keeps producer order so runs over the same input are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub by_type: IndexMap<ResourceTypeId, u64>,
    #[serde(default)]
    pub regions: BTreeSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self { by_type: counts.into_iter().map(|(k, v)| (k.into(), v)).collect(), regions: BTreeSet::new() }
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(regions.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// A release judged relevant to one resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRelease {
    pub id: ReleaseId,
    pub title: String,
    pub link: String,
    pub published: String,
    pub relevance_score: f64,
    pub reasons: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
}

impl MatchedRelease {
    pub fn from_release(release: &ReleaseItem, relevance_score: f64, reasons: Vec<String>) -> Self {
        Self {
            id: release.id.clone(),
            title: release.title.clone(),
            link: release.link.clone(),
            published: release.published.clone(),
            relevance_score,
            reasons,
            categories: release.categories.clone(),
            ai_summary: None,
            ai_confidence: None,
        }
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published)
    }

    /// Score used for ordering: the heuristic score, raised by an attached
    /// annotation confidence when one is present.
    pub fn effective_score(&self) -> f64 {
        self.relevance_score.max(self.ai_confidence.unwrap_or(0.0))
    }
}

/// Per resource type outcome of a scoring run. Always produced, even when
/// `matched_releases` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub resource_type: ResourceTypeId,
    pub resource_count: u64,
    pub matched_releases: Vec<MatchedRelease>,
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_impact_summary: Option<String>,
}

impl MatchResult {
    pub fn empty(resource_type: impl Into<String>, resource_count: u64) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_count,
            matched_releases: Vec::new(),
            overall_score: 0.0,
            top_impact_summary: None,
        }
    }
}

/// An externally produced judgement about one (resource type, release) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub resource_type: ResourceTypeId,
    pub release_id: ReleaseId,
    pub confidence: f64,
    #[serde(default)]
    pub summary: String,
}

/// Offset-carrying forms that are not strict RFC 3339, e.g. `+0000` without a colon.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse a feed timestamp. Accepts RFC 3339, RFC 2822, ISO-like stamps with
/// a `+hhmm` offset, `YYYY-MM-DD HH:MM:SS` (read as UTC) and dates such as
/// `2025-05-19` or `May 19, 2025`; anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS.iter().find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok()) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok()) {
        return Some(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch, with absent timestamps mapped to zero so
/// they order last under a descending sort.
pub fn timestamp_millis_or_zero(raw: &str) -> i64 {
    parse_timestamp(raw).map(|dt| dt.timestamp_millis()).unwrap_or(0)
}
