//! Merge externally produced annotations into scored results.
//!
//! An annotation for a pair the engine already matched attaches its summary
//! and confidence. An annotation for a new pair is accepted only at or above
//! [`MIN_ACCEPTED_CONFIDENCE`]. Either way the affected results are re-sorted
//! and re-aggregated with the same rules the engine uses.

use relmatch_core::traits::Annotator;
use relmatch_core::types::{Annotation, MatchResult, MatchedRelease, ReleaseItem};
use relmatch_kb::normalize_resource_type;
use serde::Deserialize;
use std::collections::HashMap;

use crate::ranking::{finalize, sort_results};

pub const MIN_ACCEPTED_CONFIDENCE: f64 = 0.4;
pub const AUGMENTED_REASON: &str = "augmented match";

pub fn apply_annotations(mut results: Vec<MatchResult>, releases: &[ReleaseItem], annotations: &[Annotation]) -> Vec<MatchResult> {
    let by_type: HashMap<String, usize> =
        results.iter().enumerate().map(|(i, r)| (normalize_resource_type(&r.resource_type), i)).collect();
    let by_id: HashMap<&str, &ReleaseItem> = releases.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut applied = 0usize;
    for ann in annotations {
        let Some(&row) = by_type.get(&normalize_resource_type(&ann.resource_type)) else {
            tracing::debug!(resource_type = %ann.resource_type, "annotation for unknown resource type ignored");
            continue;
        };
        let confidence = ann.confidence.clamp(0.0, 1.0);
        let matches = &mut results[row].matched_releases;
        if let Some(existing) = matches.iter_mut().find(|m| m.id == ann.release_id) {
            existing.ai_summary = Some(ann.summary.clone());
            existing.ai_confidence = Some(confidence);
            applied += 1;
        } else if confidence >= MIN_ACCEPTED_CONFIDENCE {
            let Some(release) = by_id.get(ann.release_id.as_str()) else {
                continue;
            };
            let mut added = MatchedRelease::from_release(release, confidence, vec![AUGMENTED_REASON.to_string()]);
            added.ai_summary = Some(ann.summary.clone());
            added.ai_confidence = Some(confidence);
            matches.push(added);
            applied += 1;
        }
    }

    for result in &mut results {
        finalize(result);
        result.top_impact_summary = result.matched_releases.first().and_then(|m| m.ai_summary.clone());
    }
    sort_results(&mut results);
    tracing::debug!(annotations = annotations.len(), applied, "annotations merged");
    results
}

/// Ask `annotator` about every release and merge what it returns. A failing
/// release is logged and skipped; the heuristic results stand.
pub fn augment(annotator: &dyn Annotator, releases: &[ReleaseItem], results: Vec<MatchResult>) -> Vec<MatchResult> {
    let resource_types: Vec<String> = results.iter().map(|r| r.resource_type.clone()).collect();
    let mut annotations = Vec::new();
    for release in releases {
        match annotator.annotate(release, &resource_types) {
            Ok(found) => annotations.extend(found),
            Err(e) => tracing::warn!(release = %release.id, error = %e, "annotation failed"),
        }
    }
    apply_annotations(results, releases, &annotations)
}

/// Request text for a language-model annotator.
pub fn build_prompt(release: &ReleaseItem, resource_types: &[String]) -> String {
    format!(
        "Decide which of the listed cloud resource types the release note below affects.\n\
         Product names in release notes often differ from resource type identifiers \
         (for example an \"App Service\" note concerns Microsoft.Web/sites), so reason about the \
         product, but answer only with identifiers from the list.\n\n\
         Title: {title}\n\
         Summary: {summary}\n\n\
         Resource types:\n{types}\n\n\
         Reply with a JSON array only. Each element: \
         {{\"resource_type\": string, \"confidence\": number between 0 and 1, \"impact_summary\": string of at most 40 words}}.",
        title = release.title,
        summary = release.summary,
        types = resource_types.join(", "),
    )
}

#[derive(Deserialize)]
struct ReplyItem {
    #[serde(default)]
    resource_type: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    impact_summary: String,
}

/// Decode an annotator reply for one release. Code fences are tolerated;
/// anything that is not a JSON array of reply items yields no annotations.
pub fn parse_annotations(release_id: &str, reply: &str) -> Vec<Annotation> {
    let body = strip_code_fence(reply.trim());
    match serde_json::from_str::<Vec<ReplyItem>>(body) {
        Ok(items) => items
            .into_iter()
            .filter(|i| !i.resource_type.is_empty())
            .map(|i| Annotation {
                resource_type: i.resource_type,
                release_id: release_id.to_string(),
                confidence: i.confidence,
                summary: i.impact_summary,
            })
            .collect(),
        Err(e) => {
            tracing::debug!(release = release_id, error = %e, "unparseable annotation reply");
            Vec::new()
        }
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
