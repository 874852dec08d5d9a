//! Output formats for scored results.

use std::io::Write;

use relmatch_core::types::MatchResult;

/// Matches listed per resource type in the CSV export.
pub const EXPORT_MATCH_LIMIT: usize = 10;

pub const EXPORT_HEADER: [&str; 6] =
    ["resource_type", "resource_count", "overall_score", "match_count", "matches", "top_impact_summary"];

/// Human-readable listing. Resource types without matches are summarized in
/// one trailing line.
pub fn write_table<W: Write>(out: &mut W, results: &[MatchResult]) -> anyhow::Result<()> {
    let mut quiet = 0usize;
    for r in results {
        if r.matched_releases.is_empty() {
            quiet += 1;
            continue;
        }
        writeln!(out, "{:.2}  {} ({} resources)", r.overall_score, r.resource_type, r.resource_count)?;
        if let Some(summary) = &r.top_impact_summary {
            writeln!(out, "      impact: {summary}")?;
        }
        for m in &r.matched_releases {
            let date = m.published_at().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "undated".to_string());
            writeln!(out, "      {:.2}  {date}  {}", m.effective_score(), m.title)?;
            writeln!(out, "            {}", m.reasons.join("; "))?;
        }
    }
    if quiet > 0 {
        writeln!(out, "{quiet} resource types with no relevant releases")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, results: &[MatchResult]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

/// One row per resource type, in result order.
pub fn write_csv<W: Write>(out: W, results: &[MatchResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_HEADER)?;
    for r in results {
        let matches: Vec<String> = r
            .matched_releases
            .iter()
            .take(EXPORT_MATCH_LIMIT)
            .map(|m| format!("{} ({})", m.title, m.link))
            .collect();
        writer.write_record([
            r.resource_type.clone(),
            r.resource_count.to_string(),
            format!("{:.2}", r.overall_score),
            r.matched_releases.len().to_string(),
            matches.join("; "),
            r.top_impact_summary.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
