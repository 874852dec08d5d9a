use std::fs;

use clap::Parser;
use tempfile::TempDir;

use relmatch_cli::commands;
use relmatch_cli::render::{write_csv, write_json, write_table, EXPORT_HEADER};
use relmatch_cli::{Cli, Command, Format, ScoreArgs};
use relmatch_core::config::Config;
use relmatch_core::types::{MatchResult, MatchedRelease, ReleaseItem};

fn sample_results() -> Vec<MatchResult> {
    let mut matched = MatchResult::empty("Microsoft.Web/sites", 4);
    for i in 0..12 {
        let release = ReleaseItem {
            id: format!("r{i}"),
            title: format!("App Service, item {i}"),
            link: format!("https://updates.example/{i}"),
            published: "2025-05-01T00:00:00Z".to_string(),
            ..ReleaseItem::default()
        };
        matched.matched_releases.push(MatchedRelease::from_release(&release, 0.9 - 0.01 * i as f64, vec!["title match: App Service".into()]));
    }
    matched.overall_score = 0.9;
    matched.top_impact_summary = Some("Plan \"B\" required".to_string());
    vec![matched, MatchResult::empty("Microsoft.Sql/servers", 2)]
}

#[test]
fn csv_export_has_fixed_columns_and_caps_matches() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &sample_results()).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, EXPORT_HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Microsoft.Web/sites");
    assert_eq!(&rows[0][1], "4");
    assert_eq!(&rows[0][2], "0.90");
    assert_eq!(&rows[0][3], "12");
    assert_eq!(rows[0][4].split("; ").count(), 10);
    assert!(rows[0][4].starts_with("App Service, item 0 (https://updates.example/0)"));
    assert_eq!(&rows[0][5], "Plan \"B\" required");
    assert_eq!(&rows[1][2], "0.00");
    assert_eq!(&rows[1][4], "");
}

#[test]
fn table_lists_matches_and_counts_quiet_types() {
    let mut buf = Vec::new();
    write_table(&mut buf, &sample_results()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("0.90  Microsoft.Web/sites (4 resources)"));
    assert!(text.contains("impact: Plan \"B\" required"));
    assert!(text.contains("2025-05-01  App Service, item 11"));
    assert!(text.trim_end().ends_with("1 resource types with no relevant releases"));
}

#[test]
fn json_uses_camel_case_fields() {
    let mut buf = Vec::new();
    write_json(&mut buf, &sample_results()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value[0]["resourceType"], "Microsoft.Web/sites");
    assert_eq!(value[0]["matchedReleases"][0]["relevanceScore"], 0.9);
    assert_eq!(value[1]["topImpactSummary"], serde_json::Value::Null);
}

#[test]
fn lookup_reports_known_and_unknown_types() {
    let kb = relmatch_kb::builtin();
    let mut buf = Vec::new();
    commands::lookup(&mut buf, kb, "microsoft.compute/VIRTUALMACHINES").unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("microsoft.compute/virtualmachines\n"));
    assert!(text.contains("category: compute"));
    assert!(text.contains("Virtual Machines"));

    let mut buf = Vec::new();
    commands::lookup(&mut buf, kb, "contoso.widgets/gadgets").unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("not in the knowledge base"));
}

#[test]
fn parses_score_flags() {
    let cli = Cli::try_parse_from([
        "relmatch", "score", "--inventory", "inv.csv", "--threshold", "0.3", "--no-regions", "--format", "csv",
    ])
    .unwrap();
    let Command::Score(args) = cli.command else {
        panic!("expected score");
    };
    assert_eq!(args.threshold, Some(0.3));
    assert!(args.no_regions);
    assert_eq!(args.format, Format::Csv);
    assert!(args.releases.is_none());
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("relmatch.toml"),
        "[scoring]\nthreshold = 0.4\n\n[paths]\ninventory = \"inventory.csv\"\nreleases = \"feed.json\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("inventory.csv"),
        "NAME,RESOURCE TYPE,LOCATION\nvm1,Microsoft.Compute/virtualMachines,westeurope\nvm2,microsoft.compute/virtualmachines,westeurope\nsite,Microsoft.Web/sites,westeurope\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("feed.json"),
        r#"{"items": [
            {"id": "a", "title": "Virtual Machines: new sizes generally available", "summary": "Available in West Europe", "categories": ["Compute"]},
            {"id": "b", "title": "Virtual Machines maintenance", "summary": "Only in Japan East", "categories": []},
            {"id": "c", "title": "Cosmos DB update", "categories": ["Databases"]}
        ]}"#,
    )
    .unwrap();
    dir
}

#[test]
fn score_reads_paths_and_threshold_from_config() {
    let dir = workspace();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let results = commands::score(&config, relmatch_kb::builtin(), &ScoreArgs::default()).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].resource_type, "Microsoft.Compute/virtualMachines");
    assert_eq!(results[0].resource_count, 2);
    let ids: Vec<&str> = results[0].matched_releases.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(results[0].matched_releases[1].reasons.contains(&"region mismatch".to_string()));
    assert!(results[1].matched_releases.is_empty());
}

#[test]
fn score_flags_override_config() {
    let dir = workspace();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let args = ScoreArgs { threshold: Some(0.95), no_regions: true, ..ScoreArgs::default() };
    let results = commands::score(&config, relmatch_kb::builtin(), &args).unwrap();
    assert!(results.iter().all(|r| r.matched_releases.iter().all(|m| m.relevance_score >= 0.95)));

    let bad = ScoreArgs { threshold: Some(1.5), ..ScoreArgs::default() };
    assert!(commands::score(&config, relmatch_kb::builtin(), &bad).is_err());
}

#[test]
fn score_merges_annotation_file() {
    let dir = workspace();
    fs::write(
        dir.path().join("ann.json"),
        r#"[{"resourceType": "microsoft.web/sites", "releaseId": "c", "confidence": 0.8, "summary": "Check connection strings"}]"#,
    )
    .unwrap();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let args = ScoreArgs { annotations: Some(dir.path().join("ann.json")), ..ScoreArgs::default() };
    let results = commands::score(&config, relmatch_kb::builtin(), &args).unwrap();

    let site = results.iter().find(|r| r.resource_type == "Microsoft.Web/sites").unwrap();
    assert_eq!(site.matched_releases.len(), 1);
    assert_eq!(site.top_impact_summary.as_deref(), Some("Check connection strings"));
}

#[test]
fn score_without_inputs_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let err = commands::score(&config, relmatch_kb::builtin(), &ScoreArgs::default()).unwrap_err();
    assert!(err.to_string().contains("--inventory"));
}

#[test]
fn annotator_args_accept_leading_hyphens() {
    let cli = Cli::try_parse_from([
        "relmatch", "score", "--annotator", "sh", "--annotator-arg", "-c", "--annotator-arg", "cat",
    ])
    .unwrap();
    let Command::Score(args) = cli.command else {
        panic!("expected score");
    };
    assert_eq!(args.annotator.as_deref(), Some("sh"));
    assert_eq!(args.annotator_args, vec!["-c", "cat"]);
}

#[cfg(unix)]
fn shell_annotator(script: &str) -> ScoreArgs {
    ScoreArgs {
        annotator: Some("sh".to_string()),
        annotator_args: vec!["-c".to_string(), script.to_string()],
        ..ScoreArgs::default()
    }
}

#[cfg(unix)]
#[test]
fn score_runs_external_annotator_per_release() {
    let dir = workspace();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let reply = r#"```json
[{"resource_type": "Microsoft.Web/sites", "confidence": 0.9, "impact_summary": "Rotate keys"}]
```"#;
    let args = shell_annotator(&format!("cat > /dev/null; printf '%s' '{reply}'"));
    let results = commands::score(&config, relmatch_kb::builtin(), &args).unwrap();

    let site = results.iter().find(|r| r.resource_type == "Microsoft.Web/sites").unwrap();
    assert_eq!(site.matched_releases.len(), 3, "one reply per release");
    assert!(site.matched_releases.iter().all(|m| m.reasons == vec!["augmented match".to_string()]));
    assert_eq!(site.top_impact_summary.as_deref(), Some("Rotate keys"));
}

#[cfg(unix)]
#[test]
fn failing_annotator_leaves_heuristic_results() {
    let dir = workspace();
    let config = Config::load_from(dir.path(), "test").unwrap();
    let plain = commands::score(&config, relmatch_kb::builtin(), &ScoreArgs::default()).unwrap();
    let failed = commands::score(&config, relmatch_kb::builtin(), &shell_annotator("cat > /dev/null; exit 3")).unwrap();
    assert_eq!(plain, failed);
}
